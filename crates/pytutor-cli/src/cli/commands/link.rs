//! `--link` – print a styled hyperlink to the visualizer.

use pytutor_core::embed::build_url;
use pytutor_core::options::EmbedOptions;
use pytutor_core::render;

pub fn run_link(cell_text: &str, opts: &EmbedOptions) {
    let url = build_url(cell_text, opts);
    println!("{}", render::link_html(&url));
}
