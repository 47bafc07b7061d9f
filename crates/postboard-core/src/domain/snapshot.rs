use serde::{Deserialize, Serialize};

use super::{Comment, Post, Profile};

/// The whole store as one unit: the shape of the durable file.
///
/// ```json
/// { "posts": [...], "comments": [...], "profile": {} }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// An absent profile is written as an empty object.
    #[serde(default, with = "profile_slot")]
    pub profile: Option<Profile>,
}

mod profile_slot {
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::domain::Profile;

    pub fn serialize<S>(profile: &Option<Profile>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match profile {
            Some(profile) => profile.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Profile>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Slot {
            name: Option<String>,
        }

        let slot = Slot::deserialize(deserializer)?;
        Ok(slot.name.map(|name| Profile { name }))
    }
}
