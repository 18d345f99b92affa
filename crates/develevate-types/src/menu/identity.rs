//! Identity header shown at the top of the profile menu
//!
//! All fallbacks for a partial or missing [`UserRecord`] are resolved here and
//! nowhere else.

use crate::models::UserRecord;

pub const DEFAULT_NAME: &str = "Guest User";
pub const DEFAULT_EMAIL: &str = "guest@example.com";
pub const DEFAULT_LEVEL: &str = "Beginner";

/// Name passed to the avatar generator when the user has none
const AVATAR_FALLBACK_NAME: &str = "User";
const AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";

/// Display-ready identity, every field resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentitySummary {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    /// Alt text for the avatar (empty when the user has no name)
    pub avatar_alt: String,
    pub level: String,
    pub total_points: u64,
}

impl IdentitySummary {
    /// Resolve the header from an optional user record
    pub fn from_user(user: Option<&UserRecord>) -> Self {
        let name = user.and_then(|u| non_empty(&u.name));
        let progress = user.and_then(|u| u.progress.as_ref());

        let avatar_url = match user.and_then(|u| non_empty(&u.avatar)) {
            Some(url) => url.to_string(),
            None => generated_avatar_url(name.unwrap_or(AVATAR_FALLBACK_NAME)),
        };

        Self {
            name: name.unwrap_or(DEFAULT_NAME).to_string(),
            email: user
                .and_then(|u| non_empty(&u.email))
                .unwrap_or(DEFAULT_EMAIL)
                .to_string(),
            avatar_url,
            avatar_alt: name.unwrap_or_default().to_string(),
            level: progress
                .and_then(|p| non_empty(&p.level))
                .unwrap_or(DEFAULT_LEVEL)
                .to_string(),
            total_points: progress.and_then(|p| p.total_points).unwrap_or(0),
        }
    }

    /// "<n> points" label
    pub fn points_label(&self) -> String {
        format!("{} points", self.total_points)
    }
}

/// Avatar URL from the initials service, blue background, white text
pub fn generated_avatar_url(name: &str) -> String {
    format!(
        "{}?name={}&background=3b82f6&color=fff",
        AVATAR_SERVICE,
        urlencoding::encode(name)
    )
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
