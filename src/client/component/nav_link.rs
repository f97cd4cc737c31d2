use std::fmt;

use dioxus::prelude::*;

/// Anchor targets the site links to.
///
/// Only `Home` is served by this app; the others are pages hosted alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Guilds,
    Projects,
    Join,
}

impl Destination {
    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Guilds => "/guilds",
            Self::Projects => "/projects",
            Self::Join => "/join",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}

/// Plain anchor to a [`Destination`].
///
/// Renders the same markup on web, desktop and the server, and needs no router
/// in scope.
#[component]
pub fn NavLink(to: Destination, class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        a {
            href: "{to}",
            class: "{class}",
            {children}
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the fixed path of every destination.
    ///
    /// Expected: `/`, `/guilds`, `/projects`, `/join`
    #[test]
    fn test_destination_href() {
        assert_eq!(Destination::Home.href(), "/");
        assert_eq!(Destination::Guilds.href(), "/guilds");
        assert_eq!(Destination::Projects.href(), "/projects");
        assert_eq!(Destination::Join.href(), "/join");
        assert_eq!(Destination::Join.to_string(), "/join");
    }

    /// Tests rendering a link with a class and text children.
    ///
    /// Expected: a single anchor carrying the href, class and label
    #[test]
    fn test_render_nav_link() {
        let html = dioxus_ssr::render_element(rsx! {
            NavLink { to: Destination::Projects, class: "text-white", "Projects" }
        });

        assert_eq!(html.matches("<a").count(), 1);
        assert!(html.contains(r#"href="/projects""#));
        assert!(html.contains(r#"class="text-white""#));
        assert!(html.contains(">Projects</a>"));
    }
}
