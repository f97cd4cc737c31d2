use dioxus::prelude::*;

use crate::{
    client::component::{Destination, NavLink},
    model::guild::GuildSummary,
};

#[component]
pub fn GuildCard(guild: GuildSummary) -> Element {
    let tag = guild.tag_text().to_string();

    rsx!(
        article {
            class: "p-6 rounded-xl bg-[linear-gradient(0deg,rgba(255,255,255,0.02),rgba(255,255,255,0.02))] border border-[#102030]",
            h3 {
                class: "text-xl text-white font-semibold",
                "{guild.title}"
            }
            p {
                class: "text-[var(--nn-muted)] mt-2",
                {tag}
            }
            div {
                class: "mt-4",
                NavLink {
                    to: Destination::Guilds,
                    class: "inline-block px-3 py-2 rounded-md text-sm bg-[var(--nn-purple)]",
                    "Explore"
                }
            }
        }
    )
}
