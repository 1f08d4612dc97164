//! Per-invocation option record, built once from flags and config
//! defaults, then read-only until the URL is built and presented.

use crate::lang::Language;

/// Iframe height in pixels when none is configured or passed.
pub const DEFAULT_HEIGHT: u32 = 350;

/// How the built URL is handed to the user. Exactly one mode is active
/// per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Write an `<iframe>` snippet embedding the visualizer.
    Inline,
    /// Open the URL in the system browser.
    Tab,
    /// Write a styled hyperlink to the visualizer.
    Link,
}

/// Options for one embed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOptions {
    pub language: Language,
    /// Iframe height in pixels; `None` falls back to [`DEFAULT_HEIGHT`].
    pub height: Option<u32>,
    pub open_in_new_tab: bool,
    /// Use `https://` for the visualizer URL.
    pub secure: bool,
    pub link_only: bool,
    /// Visualize all stack frames cumulatively.
    pub cumulative: bool,
    /// Render primitive values as heap objects.
    pub heap_primitives: bool,
    /// Use text labels for object references.
    pub text_references: bool,
    /// Start the visualization at the last instruction.
    pub jump_to_end: bool,
    /// Step the visualization starts on.
    pub cur_instr: u32,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            height: None,
            open_in_new_tab: false,
            secure: false,
            link_only: false,
            cumulative: false,
            heap_primitives: false,
            text_references: false,
            jump_to_end: false,
            cur_instr: 0,
        }
    }
}

impl EmbedOptions {
    /// Resolve the single active presentation mode. A link request wins
    /// over a tab request; inline embedding is the fallback.
    pub fn presentation(&self) -> Presentation {
        if self.link_only {
            Presentation::Link
        } else if self.open_in_new_tab {
            Presentation::Tab
        } else {
            Presentation::Inline
        }
    }

    /// Height to use for inline embedding.
    pub fn iframe_height(&self) -> u32 {
        self.height.unwrap_or(DEFAULT_HEIGHT)
    }
}
