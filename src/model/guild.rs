use serde::{Deserialize, Serialize};

/// Display record for a single guild card.
///
/// The tag is descriptive text only; a guild without one renders an empty
/// tag line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildSummary {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl GuildSummary {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tag: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Tag text to display, empty when the guild has no tag.
    pub fn tag_text(&self) -> &str {
        self.tag.as_deref().unwrap_or_default()
    }
}
