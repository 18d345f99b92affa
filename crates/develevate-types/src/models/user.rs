use serde::{Deserialize, Serialize};

/// Authenticated user as seen by the client.
///
/// Every field is optional: the server may omit any of them and the
/// presentation layer substitutes fallbacks (see [`crate::IdentitySummary`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Server-side account id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    /// Avatar image URL
    #[serde(default)]
    pub avatar: Option<String>,

    /// Learning progress (level and points)
    #[serde(default)]
    pub progress: Option<Progress>,
}

/// Learning progress attached to a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Level label (e.g. "Beginner", "Intermediate")
    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub total_points: Option<u64>,
}

impl UserRecord {
    /// Create a record with only a name and email set
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            ..Self::default()
        }
    }

    pub fn with_progress(mut self, level: impl Into<String>, total_points: u64) -> Self {
        self.progress = Some(Progress {
            level: Some(level.into()),
            total_points: Some(total_points),
        });
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "name": "Ada",
            "email": "ada@example.com",
            "progress": {"level": "Advanced", "totalPoints": 1200}
        }"#;

        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert_eq!(user.avatar, None);

        let progress = user.progress.unwrap();
        assert_eq!(progress.level.as_deref(), Some("Advanced"));
        assert_eq!(progress.total_points, Some(1200));
    }

    #[test]
    fn test_deserialize_empty_object() {
        let user: UserRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(user, UserRecord::default());
    }

    #[test]
    fn test_partial_progress() {
        let json = r#"{"progress": {"level": "Beginner"}}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.progress.unwrap().total_points, None);
    }
}
