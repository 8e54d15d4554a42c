use chrono::{DateTime, Utc};

use crate::error::FormError;
use crate::models::{FormKind, NewVisitor, Submission, VisitorSubmission};
use crate::state::AppState;

use super::nullable;
use super::validate;

/// Decode, validate, normalize and persist one form body. Returns the
/// id the datastore assigned to the new row.
pub async fn run(state: &AppState, kind: FormKind, body: &[u8]) -> Result<i64, FormError> {
    let submission = Submission::decode(kind, body)?;
    validate::validate(&submission)?;

    let saved = match submission {
        Submission::Visitor(visitor) => {
            let row = normalize_visitor(visitor, Utc::now());
            state.store.insert_visitor(&row).await
        }
        Submission::User(user) => state.store.insert_user(&user).await,
        Submission::Manager(manager) => state.store.insert_manager(&manager).await,
    };

    let id = saved.map_err(|source| FormError::Persistence { kind, source })?;
    tracing::info!(form = %kind, id, "Submission saved");
    Ok(id)
}

/// A custom purpose is only kept alongside an "other" purpose.
pub fn normalize_visitor(visitor: VisitorSubmission, created_at: DateTime<Utc>) -> NewVisitor {
    let custom_purpose = if validate::is_other_purpose(&visitor.purpose) {
        nullable::normalize(Some(visitor.custom_purpose))
    } else {
        None
    };

    NewVisitor {
        name: visitor.name,
        organization: visitor.organization,
        contact: visitor.contact,
        lab_contact: visitor.lab_contact,
        purpose: visitor.purpose,
        custom_purpose,
        created_at,
    }
}
