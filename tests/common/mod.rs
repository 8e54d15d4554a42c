use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::HeaderValue;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use labdesk::config::{Config, DatabaseConfig, PoolConfig};
use labdesk::db::Datastore;
use labdesk::models::{ManagerSubmission, NewVisitor, UserSubmission};

/// In-memory datastore that records every row and can be told to fail.
#[derive(Default)]
pub struct MemoryStore {
    pub visitors: Mutex<Vec<NewVisitor>>,
    pub users: Mutex<Vec<UserSubmission>>,
    pub managers: Mutex<Vec<ManagerSubmission>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn fail_inserts(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing.load(Ordering::SeqCst) {
            Err(sqlx::Error::Protocol("connection reset by peer".to_string()))
        } else {
            Ok(())
        }
    }
}

fn push<T>(rows: &Mutex<Vec<T>>, row: T) -> i64 {
    let mut rows = rows.lock().unwrap();
    rows.push(row);
    rows.len() as i64
}

#[async_trait]
impl Datastore for MemoryStore {
    async fn insert_visitor(&self, visitor: &NewVisitor) -> Result<i64, sqlx::Error> {
        self.check()?;
        Ok(push(&self.visitors, visitor.clone()))
    }

    async fn insert_user(&self, user: &UserSubmission) -> Result<i64, sqlx::Error> {
        self.check()?;
        Ok(push(&self.users, user.clone()))
    }

    async fn insert_manager(&self, manager: &ManagerSubmission) -> Result<i64, sqlx::Error> {
        self.check()?;
        Ok(push(&self.managers, manager.clone()))
    }
}

/// A running test server backed by a [`MemoryStore`].
pub struct TestApp {
    pub addr: SocketAddr,
    pub store: Arc<MemoryStore>,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON body, return (body, status).
    pub async fn post_json(&self, path: &str, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(data)
            .send()
            .await
            .expect("post json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST raw bytes with the given content type, return (body, status).
    pub async fn post_raw(&self, path: &str, content_type: &str, data: &'static str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .header("content-type", content_type)
            .body(data)
            .send()
            .await
            .expect("post raw failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config() -> Config {
    Config {
        database: DatabaseConfig::Url("postgres://localhost/unused".to_string()),
        pool: PoolConfig {
            max_connections: 1,
            min_connections: 0,
            max_lifetime: Duration::from_secs(60),
        },
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cors_origin: HeaderValue::from_static("*"),
        max_body_size: 4096,
        log_level: "warn".to_string(),
    }
}

/// Spawn the app on a random port.
pub async fn spawn_app() -> TestApp {
    let store = Arc::new(MemoryStore::default());
    let app = labdesk::build_app(store.clone(), test_config());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        store,
        client: Client::new(),
    }
}
