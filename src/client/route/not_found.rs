use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::{ErrorPage, Header},
    constant::SITE_NAME,
};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("No page for /{}", segments.join("/"));

    rsx! {
        Title { "Not Found | {SITE_NAME}" }
        Header {}
        ErrorPage { status: 404, message: "This page could not be found" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests rendering the not found route.
    ///
    /// Expected: the site header followed by a 404 error page
    #[test]
    fn test_not_found_page() {
        let html = dioxus_ssr::render_element(rsx! {
            NotFound { segments: vec!["missing".to_string()] }
        });

        assert_eq!(html.matches("<header").count(), 1);
        let header = html.find("<header").unwrap();
        let status = html.find(">404</h1>").unwrap();
        assert!(header < status);
        assert!(html.contains(">This page could not be found</p>"));
    }
}
