use dioxus::prelude::*;

use crate::client::route::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    /// Tests that the root path resolves to the landing page.
    ///
    /// Expected: Route::Home
    #[test]
    fn test_root_route() {
        assert_eq!(Route::from_str("/").ok(), Some(Route::Home {}));
    }

    /// Tests that unknown paths fall through to the not found page.
    ///
    /// Expected: Route::NotFound carrying the path segments
    #[test]
    fn test_unknown_route() {
        assert_eq!(
            Route::from_str("/guilds/web").ok(),
            Some(Route::NotFound {
                segments: vec!["guilds".to_string(), "web".to_string()]
            })
        );
    }
}
