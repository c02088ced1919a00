use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Who the participant is relative to the account holder.
/// Display/label only; carries no behavioral weight in eligibility checks.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    #[serde(rename = "self")]
    Myself,
    Child,
    Spouse,
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Relationship::Myself => "Self",
            Relationship::Child => "Child",
            Relationship::Spouse => "Spouse",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub relationship: Relationship,
    pub is_selected: bool,
}

impl Participant {
    pub fn new(name: impl Into<String>, relationship: Relationship) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            relationship,
            is_selected: false,
        }
    }
}
