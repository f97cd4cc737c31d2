use dioxus::prelude::*;

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        main {
            class: "max-w-6xl mx-auto px-6 py-12 {class}",
            {children}
        }
    )
}

#[component]
pub fn ErrorPage(status: u16, #[props(into)] message: String) -> Element {
    rsx!(
        Page {
            class: "flex flex-col items-center justify-center gap-4 text-center",
            h1 {
                class: "text-4xl font-extrabold text-white",
                "{status}"
            }
            p {
                class: "text-lg text-[var(--nn-muted)]",
                "{message}"
            }
        }
    )
}
