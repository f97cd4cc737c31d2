use dioxus::prelude::*;

use crate::client::model::theme::ThemeConfig;

/// Shares `theme` with the tree and declares its tokens on a root element.
///
/// Descendants reference tokens through `var(--nn-*)` in their classes, or read
/// the config directly with [`use_theme`].
#[component]
pub fn ThemeProvider(theme: ThemeConfig, children: Element) -> Element {
    let theme = use_context_provider(|| theme);
    let style = theme.root_style();

    rsx!(
        div {
            class: "min-h-screen text-white",
            style: "{style}",
            {children}
        }
    )
}

pub fn use_theme() -> ThemeConfig {
    use_context::<ThemeConfig>()
}
