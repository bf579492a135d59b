use super::User;

/// Form-in-progress identity for the register page. Nothing here touches
/// the backend until the create call goes out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub id: Option<String>,
    pub username: String,
    pub email: String,
    /// Placeholder only. The raw value never leaves the client.
    pub password_hash: String,
}

impl UserDraft {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Payload for `POST /users`. The password placeholder stays behind.
    pub fn into_user(self) -> User {
        User {
            id: self.id.unwrap_or_default(),
            username: self.username,
            email: self.email,
            ..User::default()
        }
    }
}
