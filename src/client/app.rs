use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::ThemeProvider, constant::SITE_NAME, model::theme::ThemeConfig, router::Route,
};

const FAVICON: Asset = asset!("/assets/logo.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    // Theme is read once per app instance
    let theme = use_hook(|| {
        tracing::info!("Starting {}", SITE_NAME);
        ThemeConfig::load()
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        ThemeProvider {
            theme,
            Router::<Route> {}
        }
    }
}
