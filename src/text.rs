use std::fmt;

use crate::html::HtmlNode;

/// Inline formatting kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextType {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl TextType {
    pub fn as_str(self) -> &'static str {
        match self {
            TextType::Text => "text",
            TextType::Bold => "bold",
            TextType::Italic => "italic",
            TextType::Code => "code",
            TextType::Link => "link",
            TextType::Image => "image",
        }
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A run of inline text with a single formatting kind.
///
/// Only links and images carry a url; the constructors keep it that way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    text: String,
    text_type: TextType,
    url: Option<String>,
}

impl TextNode {
    /// A node without a url. Use [`TextNode::link`] or [`TextNode::image`]
    /// for the url-carrying kinds.
    pub fn new(text: impl Into<String>, text_type: TextType) -> Self {
        Self {
            text: text.into(),
            text_type,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextType::Text)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_type: TextType::Link,
            url: Some(url.into()),
        }
    }

    /// An image; `alt` is stored as the node text.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            text_type: TextType::Image,
            url: Some(url.into()),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_type(&self) -> TextType {
        self.text_type
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextNode({}, {}, {})",
            self.text,
            self.text_type,
            self.url.as_deref().unwrap_or("None")
        )
    }
}

/// Map an inline node to its HTML leaf.
pub fn text_node_to_html_node(node: &TextNode) -> HtmlNode {
    let url = node.url().unwrap_or_default();
    match node.text_type {
        TextType::Text => HtmlNode::text(node.text()),
        TextType::Bold => HtmlNode::leaf("b", node.text()),
        TextType::Italic => HtmlNode::leaf("i", node.text()),
        TextType::Code => HtmlNode::leaf("code", node.text()),
        TextType::Link => HtmlNode::leaf("a", node.text()).with_prop("href", url),
        TextType::Image => HtmlNode::leaf("img", "")
            .with_prop("src", url)
            .with_prop("alt", node.text()),
    }
}
