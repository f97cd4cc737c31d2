use dioxus::prelude::*;

use crate::client::{
    component::{Destination, NavLink},
    constant::{SITE_NAME, SITE_TAGLINE},
};

#[component]
pub fn Hero() -> Element {
    rsx!(section {
        class: "text-center mb-12",
        h1 {
            class: "text-4xl md:text-5xl font-extrabold text-white mb-4",
            {SITE_NAME}
        }
        p {
            class: "text-lg md:text-xl text-[var(--nn-muted)] max-w-2xl mx-auto",
            {SITE_TAGLINE}
        }
        div {
            class: "mt-8 flex justify-center gap-4",
            NavLink {
                to: Destination::Join,
                class: "px-6 py-3 rounded-lg bg-[var(--nn-cyan)] text-black font-semibold",
                "Join the Founding Circle"
            }
            NavLink {
                to: Destination::Guilds,
                class: "px-6 py-3 rounded-lg border border-[var(--nn-muted)]",
                "Explore Guilds"
            }
        }
    })
}
