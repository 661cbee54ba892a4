mod block;
mod config;
mod error;
mod html;
mod inline;
mod page;
mod parser;
mod site;
mod text;

pub use block::{BlockType, block_to_block_type, markdown_to_blocks};
pub use config::{Config, ConfigError, PathsConfig, TemplateConfig};
pub use error::{MarkdownError, SiteError};
pub use html::{HtmlNode, Props, props_to_html};
pub use inline::{
    extract_markdown_images, extract_markdown_links, split_nodes_delimiter, split_nodes_image,
    split_nodes_link, text_to_text_nodes,
};
pub use page::{extract_title, render_page};
pub use parser::{block_to_html_node, markdown_to_html_node};
pub use site::{build_site, copy_static, generate_page, generate_pages_recursive};
pub use text::{TextNode, TextType, text_node_to_html_node};

/// Convert markdown to an HTML fragment wrapped in a `div`.
pub fn markdown_to_html(markdown: &str) -> Result<String, MarkdownError> {
    markdown_to_html_node(markdown)?.to_html()
}
