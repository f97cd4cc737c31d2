mod guild_grid;
mod hero;

pub use guild_grid::GuildGrid;
pub use hero::Hero;

use dioxus::prelude::*;

use crate::{
    client::{
        component::{use_theme, Header, Page},
        constant::{SITE_DESCRIPTION, SITE_TITLE},
    },
    model::guild::GuildSummary,
};

/// Guilds featured on the landing page, in display order.
pub fn featured_guilds() -> Vec<GuildSummary> {
    vec![
        GuildSummary::new("Web Nexus").with_tag("React • Node • Design"),
        GuildSummary::new("Android Nexus").with_tag("Kotlin • Flutter • UX"),
        GuildSummary::new("Data Nexus").with_tag("ML • BI • Dashboards"),
        GuildSummary::new("DevOps Nexus").with_tag("IaC • CI/CD • Security"),
    ]
}

#[component]
pub fn Home() -> Element {
    let theme_color = use_theme().colors.nn_surface;

    rsx! {
        Title { "{SITE_TITLE}" }
        document::Meta {
            name: "description",
            content: SITE_DESCRIPTION
        }
        document::Meta {
            name: "theme-color",
            content: theme_color
        }
        LandingPage {}
    }
}

#[component]
pub fn LandingPage() -> Element {
    rsx! {
        Header {}
        Page {
            Hero {}
            GuildGrid { guilds: featured_guilds() }
        }
    }
}
