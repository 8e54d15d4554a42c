use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::null_as_empty;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisitorSubmission {
    #[serde(rename = "nama", deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "instansi", deserialize_with = "null_as_empty")]
    pub organization: String,
    #[serde(rename = "kontak", deserialize_with = "null_as_empty")]
    pub contact: String,
    #[serde(rename = "pic_lab", deserialize_with = "null_as_empty")]
    pub lab_contact: String,
    #[serde(rename = "tujuan", deserialize_with = "null_as_empty")]
    pub purpose: String,
    #[serde(rename = "tujuan_custom", deserialize_with = "null_as_empty")]
    pub custom_purpose: String,
}

/// A validated visitor check-in, ready for the `visitors` table.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVisitor {
    pub name: String,
    pub organization: String,
    pub contact: String,
    pub lab_contact: String,
    pub purpose: String,
    pub custom_purpose: Option<String>,
    pub created_at: DateTime<Utc>,
}
