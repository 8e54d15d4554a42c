use crate::error::ValidationError;
use crate::models::{ManagerSubmission, Submission, UserSubmission, VisitorSubmission};

/// Purpose values that make `tujuan_custom` mandatory.
pub const OTHER_PURPOSES: [&str; 2] = ["lainnya", "other"];

pub fn is_other_purpose(purpose: &str) -> bool {
    let purpose = purpose.trim();
    OTHER_PURPOSES
        .iter()
        .any(|sentinel| purpose.eq_ignore_ascii_case(sentinel))
}

pub fn validate(submission: &Submission) -> Result<(), ValidationError> {
    match submission {
        Submission::Visitor(visitor) => validate_visitor(visitor),
        Submission::User(user) => validate_user(user),
        Submission::Manager(manager) => validate_manager(manager),
    }
}

fn validate_visitor(visitor: &VisitorSubmission) -> Result<(), ValidationError> {
    require(&[
        ("nama", visitor.name.as_str()),
        ("instansi", visitor.organization.as_str()),
        ("kontak", visitor.contact.as_str()),
        ("pic_lab", visitor.lab_contact.as_str()),
        ("tujuan", visitor.purpose.as_str()),
    ])?;

    if is_other_purpose(visitor.purpose.as_str()) && visitor.custom_purpose.is_empty() {
        return Err(ValidationError::MissingConditionalField {
            field: "tujuan_custom",
            condition: format!("tujuan is {}", visitor.purpose.trim()),
        });
    }
    Ok(())
}

fn validate_user(user: &UserSubmission) -> Result<(), ValidationError> {
    require(&[
        ("nama", user.name.as_str()),
        ("nim", user.member_id.as_str()),
        ("kontak", user.contact.as_str()),
    ])
}

fn validate_manager(manager: &ManagerSubmission) -> Result<(), ValidationError> {
    require(&[("nama", manager.name.as_str())])
}

/// First empty field wins, in form order.
fn require(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    match fields.iter().find(|(_, value)| value.is_empty()) {
        Some((name, _)) => Err(ValidationError::MissingField(*name)),
        None => Ok(()),
    }
}
