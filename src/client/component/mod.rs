pub mod guild_card;
pub mod header;
pub mod nav_link;
pub mod page;
pub mod theme_provider;

pub use guild_card::GuildCard;
pub use header::Header;
pub use nav_link::{Destination, NavLink};
pub use page::{ErrorPage, Page};
pub use theme_provider::{use_theme, ThemeProvider};
