// Client-side routes
//
// The TUI shows one view at a time, addressed by the same paths the web
// client used: `/` and `/login` for the login form, `/search` for the table.

/// A resolved route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Search,
    NotFound,
}

impl Route {
    pub const ROOT: &'static str = "/";
    pub const LOGIN: &'static str = "/login";
    pub const SEARCH: &'static str = "/search";

    /// Resolve a path. Tolerates hash-style (`#/search`) and trailing slashes.
    pub fn parse(path: &str) -> Self {
        let path = path.trim().trim_start_matches('#');
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Route::Login,
            Self::LOGIN => Route::Login,
            Self::SEARCH => Route::Search,
            _ => Route::NotFound,
        }
    }

    /// Where navigation actually lands: unknown paths fall back to login
    pub fn resolve(path: &str) -> Self {
        match Self::parse(path) {
            Route::NotFound => {
                tracing::warn!("No route for {:?}, redirecting to login", path);
                Route::Login
            }
            route => route,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => Self::ROOT,
            Route::Search => Self::SEARCH,
            Route::NotFound => Self::ROOT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_routes() {
        assert_eq!(Route::parse("/"), Route::Login);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/search"), Route::Search);
        assert_eq!(Route::parse("#/search/"), Route::Search);
    }

    #[test]
    fn test_unknown_route_redirects_to_login() {
        assert_eq!(Route::parse("/favorites"), Route::NotFound);
        assert_eq!(Route::resolve("/favorites"), Route::Login);
    }
}
