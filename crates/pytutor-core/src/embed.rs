//! URL construction for the visualizer's iframe-embed page.
//!
//! Pure string building: the cell text is percent-encoded into the
//! `#code=` fragment, followed by the visualizer options in the fixed
//! order the site expects. Presentation (iframe, browser tab, link) is
//! the caller's concern.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::options::EmbedOptions;

/// Escape set for the embedded code: everything except ASCII
/// alphanumerics, `_ . - ~` and `/` becomes `%XX` (space is `%20`),
/// matching what the site's decoder expects.
const CODE_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Host and page, appended to the protocol chosen by `secure`.
const EMBED_PAGE: &str = "pythontutor.com/iframe-embed.html#code=";

/// Marker the site uses to identify the embedding frontend.
const ORIGIN_PARAM: &str = "&origin=opt-frontend.js";

/// Fixed trailer: empty raw-input list and the embed pane layout.
const LAYOUT_TRAILER: &str = "&rawInputLstJSON=%5B%5D&codeDivWidth=50%25&codeDivHeight=100%25";

/// Build the visualizer URL for `cell_text`.
///
/// The language in `opts` is already validated, so this cannot fail;
/// unknown tags are rejected earlier, when the tag is parsed.
pub fn build_url(cell_text: &str, opts: &EmbedOptions) -> String {
    let protocol = if opts.secure { "https://" } else { "http://" };

    let mut url = String::with_capacity(cell_text.len() * 2 + 160);
    url.push_str(protocol);
    url.push_str(EMBED_PAGE);
    url.push_str(&utf8_percent_encode(cell_text, CODE_ESCAPE).to_string());
    url.push_str(ORIGIN_PARAM);

    // Visualizer toggles, in the order the site lists them.
    url.push_str(&format!("&cumulative={}", opts.cumulative));
    url.push_str(&format!("&heapPrimitives={}", opts.heap_primitives));
    url.push_str(&format!("&textReferences={}", opts.text_references));
    url.push_str(&format!("&jumpToEnd={}", opts.jump_to_end));
    url.push_str(&format!("&curInstr={}&", opts.cur_instr));

    url.push_str("py=");
    url.push_str(opts.language.site_code());

    url.push_str(LAYOUT_TRAILER);
    url
}
