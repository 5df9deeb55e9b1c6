use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Users.
///
/// Unique within one page of results only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// A directory entry as served by the remote users endpoint.
///
/// Records are immutable once fetched; identity is [`User::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `id` - Identifier within the page
    /// * `first_name` - Given name
    /// * `last_name` - Family name
    /// * `email` - Email address, `local@domain`
    /// * `avatar` - Avatar image URL
    pub fn new(
        id: impl Into<UserId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        avatar: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            avatar: avatar.into(),
        }
    }

    /// The part of the email after the last `@`, if any.
    pub fn email_domain(&self) -> Option<&str> {
        self.email.rsplit_once('@').map(|(_, domain)| domain)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_remote_shape() {
        let json = r#"{
            "id": 7,
            "email": "michael.lawson@reqres.in",
            "first_name": "Michael",
            "last_name": "Lawson",
            "avatar": "https://reqres.in/img/faces/7-image.jpg"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId(7));
        assert_eq!(user.email_domain(), Some("reqres.in"));
        assert_eq!(user.full_name(), "Michael Lawson");
    }

    #[test]
    fn test_email_without_at_has_no_domain() {
        let user = User::new(1, "No", "Domain", "nodomain", "");
        assert_eq!(user.email_domain(), None);
    }
}
