use serde::Deserialize;

use super::null_as_empty;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ManagerSubmission {
    #[serde(rename = "nama", deserialize_with = "null_as_empty")]
    pub name: String,
}
