use serde::{Deserialize, Serialize};

/// A listing category. Reference data, read-only for visitors.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_string(),
        }
    }
}
