//! Default mode – print an iframe snippet embedding the visualizer.

use pytutor_core::embed::build_url;
use pytutor_core::options::EmbedOptions;
use pytutor_core::render;

pub fn run_embed(cell_text: &str, opts: &EmbedOptions) {
    let url = build_url(cell_text, opts);
    tracing::debug!("embedding visualizer iframe, height {}", opts.iframe_height());
    println!("{}", render::iframe_html(&url, opts.iframe_height()));
}
