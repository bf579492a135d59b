use super::User;

/// Client-side login state. One instance lives for the whole app run, held
/// in a signal and handed down through context rather than a global.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub authenticated: bool,
    pub user: Option<User>,
}

impl Session {
    pub fn login(&mut self, user: User) {
        self.authenticated = true;
        self.user = Some(user);
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        self.user = None;
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn somebody() -> User {
        User {
            id: "u1".to_string(),
            username: "ada".to_string(),
            ..User::default()
        }
    }

    #[test]
    fn login_marks_authenticated_and_keeps_the_user() {
        let mut session = Session::default();
        session.login(somebody());
        assert!(session.authenticated);
        assert_eq!(session.user_id(), Some("u1"));
    }

    #[test]
    fn logout_resets_both_fields_regardless_of_prior_state() {
        let mut session = Session::default();
        session.logout();
        assert_eq!(session, Session::default());

        session.login(somebody());
        session.logout();
        assert!(!session.authenticated);
        assert!(session.user.is_none());
    }
}
