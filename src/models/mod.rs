mod manager;
mod user;
mod visitor;

pub use manager::ManagerSubmission;
pub use user::UserSubmission;
pub use visitor::{NewVisitor, VisitorSubmission};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// The closed set of forms the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Visitor,
    User,
    Manager,
}

impl FormKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FormKind::Visitor => "visitor",
            FormKind::User => "user",
            FormKind::Manager => "manager",
        }
    }

    /// English key names accepted in place of the stored column names,
    /// as `(alias, canonical)`.
    pub fn aliases(self) -> &'static [(&'static str, &'static str)] {
        match self {
            FormKind::Visitor => &[
                ("name", "nama"),
                ("organization", "instansi"),
                ("contact", "kontak"),
                ("labContact", "pic_lab"),
                ("purpose", "tujuan"),
                ("customPurpose", "tujuan_custom"),
            ],
            FormKind::User => &[("name", "nama"), ("memberId", "nim"), ("contact", "kontak")],
            FormKind::Manager => &[("name", "nama")],
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded form body, tagged by the form it was posted to.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Visitor(VisitorSubmission),
    User(UserSubmission),
    Manager(ManagerSubmission),
}

impl Submission {
    /// Decode a JSON object body. Unknown keys are ignored and missing keys
    /// decode as empty strings; anything other than an object is rejected.
    /// An alias only fills its canonical key when that key is absent.
    pub fn decode(kind: FormKind, body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut value: serde_json::Value = serde_json::from_slice(body)?;
        let Some(object) = value.as_object_mut() else {
            return Err(serde_json::Error::custom("expected a JSON object"));
        };

        for (alias, canonical) in kind.aliases() {
            if let Some(aliased) = object.remove(*alias) {
                object.entry(*canonical).or_insert(aliased);
            }
        }

        Ok(match kind {
            FormKind::Visitor => Submission::Visitor(serde_json::from_value(value)?),
            FormKind::User => Submission::User(serde_json::from_value(value)?),
            FormKind::Manager => Submission::Manager(serde_json::from_value(value)?),
        })
    }

    pub fn kind(&self) -> FormKind {
        match self {
            Submission::Visitor(_) => FormKind::Visitor,
            Submission::User(_) => FormKind::User,
            Submission::Manager(_) => FormKind::Manager,
        }
    }
}

/// `null` decodes the same as an absent key.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
