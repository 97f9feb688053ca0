/// Holds the bearer token for the lifetime of the process. It is set once by
/// a successful login and never refreshed, expired or cleared.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        return self.token.as_deref();
    }

    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    pub fn is_authenticated(&self) -> bool {
        return self.token.is_some();
    }
}
