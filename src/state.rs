use std::sync::Arc;

use crate::config::Config;
use crate::db::Datastore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn Datastore>,
    pub config: Config,
}
