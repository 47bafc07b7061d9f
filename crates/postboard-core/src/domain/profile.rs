use serde::{Deserialize, Serialize};

/// Profile entity - the singleton owner profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
}

/// Content fields of the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
}

impl ProfileDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<ProfileDraft> for Profile {
    fn from(draft: ProfileDraft) -> Self {
        Self { name: draft.name }
    }
}
