use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    /// The theme document is not valid JSON or does not match the theme shape.
    #[error("Failed to parse theme: {0}")]
    Parse(#[from] serde_json::Error),

    /// A color token holds something other than a `#RGB` or `#RRGGBB` hex value.
    ///
    /// # Fields
    /// - `token` - Name of the offending design token, e.g. `nn-cyan`
    /// - `value` - The rejected value as written in the theme
    #[error("Invalid color for token {token}: {value}")]
    InvalidColor { token: &'static str, value: String },

    /// The sans font stack is empty or contains a blank family, which would
    /// produce an invalid `font-family` declaration.
    #[error("Font stack must name at least one family and no blank families")]
    EmptyFontStack,
}
