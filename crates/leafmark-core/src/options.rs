/// Selects which optional pipeline stages run for a given call site.
///
/// The renderer itself is stateless; call sites hold whichever options value
/// fits their surface instead of flipping a shared mode somewhere global.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Detect pipe-delimited Markdown tables and render them as HTML tables.
    pub tables: bool,
    /// Wrap a leading run of emoji on a line in an enlarged, bolder span.
    pub emoji_emphasis: bool,
}

impl RenderOptions {
    /// Profile for live chat bubbles: the full pipeline.
    pub fn chat() -> Self {
        Self {
            tables: true,
            emoji_emphasis: true,
        }
    }

    /// Profile for stored history entries: tables, but no emoji styling.
    pub fn history() -> Self {
        Self {
            tables: true,
            emoji_emphasis: false,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::chat()
    }
}
