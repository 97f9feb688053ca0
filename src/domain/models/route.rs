#[cfg(test)]
#[path = "route_test.rs"]
mod tests;

use super::Session;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Table,
    NotFound,
}

/// The path currently visited. Only `/` and `/login` mean anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    path: String,
}

impl Default for Route {
    fn default() -> Route {
        return Route::new(ROOT_PATH);
    }
}

impl Route {
    pub fn new(path: &str) -> Route {
        let mut path = path.trim().trim_end_matches('/').to_string();
        if !path.starts_with('/') {
            path = format!("/{path}");
        }

        return Route { path };
    }

    pub fn path(&self) -> &str {
        return &self.path;
    }

    pub fn visit(&mut self, path: &str) {
        *self = Route::new(path);
    }

    /// The login path renders the login screen without looking at the
    /// session, even once a token exists.
    pub fn screen(&self, session: &Session) -> Screen {
        if self.path == LOGIN_PATH || !session.is_authenticated() {
            return Screen::Login;
        }

        if self.path == ROOT_PATH {
            return Screen::Table;
        }

        return Screen::NotFound;
    }
}
