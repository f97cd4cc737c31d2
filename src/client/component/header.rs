use dioxus::prelude::*;

use crate::client::{
    component::{Destination, NavLink},
    constant::SITE_NAME,
};

const LOGO: Asset = asset!("/assets/logo.svg");

#[component]
pub fn Header() -> Element {
    rsx!(header {
        class: "bg-[var(--nn-surface)] border-b border-[#0B1A2B]",
        div {
            class: "max-w-6xl mx-auto px-6 py-4 flex items-center justify-between",
            NavLink {
                to: Destination::Home,
                class: "flex items-center gap-3",
                img {
                    class: "w-10 h-10",
                    src: LOGO,
                    alt: SITE_NAME,
                }
                span {
                    class: "text-white font-semibold",
                    {SITE_NAME}
                }
            }
            nav {
                class: "flex gap-4 items-center",
                NavLink {
                    to: Destination::Guilds,
                    class: "text-[var(--nn-muted)] hover:text-white",
                    "Guilds"
                }
                NavLink {
                    to: Destination::Projects,
                    class: "text-[var(--nn-muted)] hover:text-white",
                    "Projects"
                }
                NavLink {
                    to: Destination::Join,
                    class: "px-3 py-2 bg-[var(--nn-cyan)] text-black rounded-md",
                    "Join"
                }
            }
        }
    })
}
