use serde::Deserialize;

use super::null_as_empty;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserSubmission {
    #[serde(rename = "nama", deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "nim", deserialize_with = "null_as_empty")]
    pub member_id: String,
    #[serde(rename = "kontak", deserialize_with = "null_as_empty")]
    pub contact: String,
}
