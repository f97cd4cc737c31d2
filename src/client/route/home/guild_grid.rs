use dioxus::prelude::*;

use crate::{client::component::GuildCard, model::guild::GuildSummary};

#[component]
pub fn GuildGrid(guilds: Vec<GuildSummary>) -> Element {
    rsx!(section {
        h2 {
            class: "text-2xl text-white mb-6",
            "Guilds"
        }
        div {
            class: "grid grid-cols-1 md:grid-cols-2 gap-6",
            for (i, guild) in guilds.into_iter().enumerate() {
                GuildCard {
                    key: "{i}",
                    guild
                }
            }
        }
    })
}
