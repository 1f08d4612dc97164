//! HTML snippets for the inline-embed and hyperlink presentation modes.
//!
//! The snippets mirror what the notebook rendition displayed: a
//! full-width iframe, or a centered bold link with a fixed inline style.

/// Inline style carried by the hyperlink mode.
pub const LINK_STYLE: &str =
    "box-sizing: border-box; padding: 0 5px; border: 1px solid #CFCFCF;";

/// Label shown on the hyperlink.
const LINK_LABEL: &str = "Python Tutor";

/// `<iframe>` snippet embedding the visualizer at full width.
pub fn iframe_html(url: &str, height: u32) -> String {
    format!(
        "<iframe width=\"100%\" height=\"{}\" frameborder=\"0\" src=\"{}\"></iframe>",
        height, url
    )
}

/// Centered bold link opening the visualizer in a new browser tab.
pub fn link_html(url: &str) -> String {
    format!(
        "<div style=\"text-align: center;\"><strong>\
         <a style=\"{}\" target=\"_blank\" href=\"{}\">{}</a>\
         </strong></div>",
        LINK_STYLE, url, LINK_LABEL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iframe_carries_height_and_url() {
        let html = iframe_html("http://example.com/x", 350);
        assert!(html.contains("height=\"350\""));
        assert!(html.contains("width=\"100%\""));
        assert!(html.contains("src=\"http://example.com/x\""));
        assert!(html.contains("frameborder=\"0\""));
    }

    #[test]
    fn iframe_custom_height() {
        let html = iframe_html("http://example.com/x", 620);
        assert!(html.contains("height=\"620\""));
    }

    #[test]
    fn link_carries_style_label_and_url() {
        let html = link_html("http://example.com/x");
        assert!(html.contains(LINK_STYLE));
        assert!(html.contains(">Python Tutor</a>"));
        assert!(html.contains("href=\"http://example.com/x\""));
        assert!(html.contains("target=\"_blank\""));
    }
}
