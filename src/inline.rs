//! Inline splitting: turns a run of text into typed [`TextNode`]s.
//!
//! The pipeline is a fixed sequence of `Vec<TextNode> -> Vec<TextNode>`
//! stages: bold (`**`), italic (`_`), code (`` ` ``), images, then links.
//! Each stage only rewrites [`TextType::Text`] nodes, so text claimed by an
//! earlier stage is never re-split. Image and link text is kept verbatim.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{MarkdownError, Result};
use crate::text::{TextNode, TextType};

/// Bold, italic and code delimiters in the order they are applied.
pub const DELIMITERS: [(&str, TextType); 3] = [
    ("**", TextType::Bold),
    ("_", TextType::Italic),
    ("`", TextType::Code),
];

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| {
        Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
    })
}

// The optional `!` lets us see and skip images; the regex crate has no lookbehind.
fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| {
        Regex::new(r"(!?)\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
    })
}

/// Parse a run of inline markdown into text nodes.
pub fn text_to_text_nodes(text: &str) -> Result<Vec<TextNode>> {
    let mut nodes = vec![TextNode::plain(text)];
    for (delimiter, text_type) in DELIMITERS {
        nodes = split_nodes_delimiter(nodes, delimiter, text_type)?;
    }
    let nodes = split_nodes_image(nodes)?;
    let nodes = split_nodes_link(nodes)?;
    log::trace!("inline nodes for {text:?}: {nodes:?}");
    Ok(nodes)
}

/// Split every plain-text node on `delimiter`. Odd-numbered parts become
/// `text_type`, empty parts are dropped.
pub fn split_nodes_delimiter(
    nodes: Vec<TextNode>,
    delimiter: &'static str,
    text_type: TextType,
) -> Result<Vec<TextNode>> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.text_type() != TextType::Text {
            out.push(node);
            continue;
        }

        let parts: Vec<&str> = node.text().split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(MarkdownError::UnclosedDelimiter { delimiter });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(TextNode::plain(part));
            } else {
                out.push(TextNode::new(part, text_type));
            }
        }
    }
    Ok(out)
}

/// All `![alt](url)` occurrences as `(alt, url)` pairs, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    image_regex()
        .captures_iter(text)
        .map(|caps| {
            let (_, [alt, url]) = caps.extract();
            (alt, url)
        })
        .collect()
}

/// All `[text](url)` occurrences not preceded by `!`, as `(text, url)` pairs.
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    link_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let (_, [bang, anchor, url]) = caps.extract();
            bang.is_empty().then_some((anchor, url))
        })
        .collect()
}

pub fn split_nodes_image(nodes: Vec<TextNode>) -> Result<Vec<TextNode>> {
    split_nodes_with(
        nodes,
        extract_markdown_images,
        |alt, url| format!("![{alt}]({url})"),
        |alt, url| TextNode::image(alt, url),
        MarkdownError::UnclosedImage,
    )
}

pub fn split_nodes_link(nodes: Vec<TextNode>) -> Result<Vec<TextNode>> {
    split_nodes_with(
        nodes,
        extract_markdown_links,
        |anchor, url| format!("[{anchor}]({url})"),
        |anchor, url| TextNode::link(anchor, url),
        MarkdownError::UnclosedLink,
    )
}

/// Shared body of the image and link stages: cut each plain-text node at
/// every extracted section, keeping the text in between.
fn split_nodes_with(
    nodes: Vec<TextNode>,
    extract: fn(&str) -> Vec<(&str, &str)>,
    section: fn(&str, &str) -> String,
    make: fn(&str, &str) -> TextNode,
    unclosed: MarkdownError,
) -> Result<Vec<TextNode>> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.text_type() != TextType::Text {
            out.push(node);
            continue;
        }

        let matches = extract(node.text());
        if matches.is_empty() {
            out.push(node);
            continue;
        }

        let mut remaining = node.text();
        for (text, url) in matches {
            let (before, after) = remaining
                .split_once(section(text, url).as_str())
                .ok_or_else(|| unclosed.clone())?;
            if !before.is_empty() {
                out.push(TextNode::plain(before));
            }
            out.push(make(text, url));
            remaining = after;
        }
        if !remaining.is_empty() {
            out.push(TextNode::plain(remaining));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> TextNode {
        TextNode::plain(s)
    }

    #[test]
    fn delimiter_on_empty_input() {
        for (delimiter, text_type) in DELIMITERS {
            assert_eq!(
                split_nodes_delimiter(Vec::new(), delimiter, text_type).unwrap(),
                Vec::<TextNode>::new()
            );
        }
    }

    #[test]
    fn delimiter_absent_leaves_node_alone() {
        for (delimiter, text_type) in DELIMITERS {
            assert_eq!(
                split_nodes_delimiter(vec![text("hello world")], delimiter, text_type).unwrap(),
                vec![text("hello world")]
            );
        }
    }

    #[test]
    fn bold_split() {
        assert_eq!(
            split_nodes_delimiter(vec![text("hello **world**")], "**", TextType::Bold).unwrap(),
            vec![text("hello "), TextNode::new("world", TextType::Bold)]
        );
    }

    #[test]
    fn code_split_keeps_trailing_text() {
        let nodes = vec![text("This is text with a `code block` word")];
        assert_eq!(
            split_nodes_delimiter(nodes, "`", TextType::Code).unwrap(),
            vec![
                text("This is text with a "),
                TextNode::new("code block", TextType::Code),
                text(" word"),
            ]
        );
    }

    #[test]
    fn repeated_delimiters() {
        let nodes = vec![text("hello **world** and **test**")];
        assert_eq!(
            split_nodes_delimiter(nodes, "**", TextType::Bold).unwrap(),
            vec![
                text("hello "),
                TextNode::new("world", TextType::Bold),
                text(" and "),
                TextNode::new("test", TextType::Bold),
            ]
        );
    }

    #[test]
    fn delimiter_at_start_and_end_drops_empty_parts() {
        assert_eq!(
            split_nodes_delimiter(vec![text("**hello**")], "**", TextType::Bold).unwrap(),
            vec![TextNode::new("hello", TextType::Bold)]
        );
        assert_eq!(
            split_nodes_delimiter(vec![text("_hello_")], "_", TextType::Italic).unwrap(),
            vec![TextNode::new("hello", TextType::Italic)]
        );
    }

    #[test]
    fn whitespace_inside_delimiters_is_kept() {
        assert_eq!(
            split_nodes_delimiter(vec![text("hello _ world _")], "_", TextType::Italic).unwrap(),
            vec![text("hello "), TextNode::new(" world ", TextType::Italic)]
        );
    }

    #[test]
    fn typed_nodes_pass_through() {
        let nodes = vec![
            TextNode::new("hello **x**", TextType::Italic),
            TextNode::new("world", TextType::Bold),
        ];
        assert_eq!(
            split_nodes_delimiter(nodes.clone(), "**", TextType::Bold).unwrap(),
            nodes
        );
    }

    #[test]
    fn each_text_node_split_independently() {
        let nodes = vec![text("hello **world**"), text("another _test_")];
        assert_eq!(
            split_nodes_delimiter(nodes.clone(), "**", TextType::Bold).unwrap(),
            vec![
                text("hello "),
                TextNode::new("world", TextType::Bold),
                text("another _test_"),
            ]
        );
        assert_eq!(
            split_nodes_delimiter(nodes, "_", TextType::Italic).unwrap(),
            vec![
                text("hello **world**"),
                text("another "),
                TextNode::new("test", TextType::Italic),
            ]
        );
    }

    #[test]
    fn unclosed_delimiter_fails() {
        let nodes = vec![text("This has **unclosed bold formatting.")];
        assert_eq!(
            split_nodes_delimiter(nodes, "**", TextType::Bold),
            Err(MarkdownError::UnclosedDelimiter { delimiter: "**" })
        );
    }

    #[test]
    fn extract_images() {
        assert_eq!(
            extract_markdown_images(
                "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and ![another](b.png)"
            ),
            vec![
                ("image", "https://i.imgur.com/zjjcJKZ.png"),
                ("another", "b.png"),
            ]
        );
    }

    #[test]
    fn extract_links_skips_images() {
        assert_eq!(extract_markdown_links("![alt](url)"), Vec::<(&str, &str)>::new());
        assert_eq!(
            extract_markdown_links("a [to boot dev](https://www.boot.dev) and ![img](i.png)"),
            vec![("to boot dev", "https://www.boot.dev")]
        );
    }

    #[test]
    fn extract_adjacent_links() {
        assert_eq!(
            extract_markdown_links("[a](1)[b](2)"),
            vec![("a", "1"), ("b", "2")]
        );
    }

    #[test]
    fn extract_allows_empty_parts() {
        assert_eq!(extract_markdown_images("![]()"), vec![("", "")]);
        assert_eq!(extract_markdown_links("[]()"), vec![("", "")]);
    }

    #[test]
    fn split_images() {
        let nodes = vec![text(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )];
        assert_eq!(
            split_nodes_image(nodes).unwrap(),
            vec![
                text("This is text with an "),
                TextNode::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                text(" and another "),
                TextNode::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn split_links_with_trailing_text() {
        let nodes = vec![text("go [home](/) now")];
        assert_eq!(
            split_nodes_link(nodes).unwrap(),
            vec![text("go "), TextNode::link("home", "/"), text(" now")]
        );
    }

    #[test]
    fn split_without_matches_keeps_node() {
        let nodes = vec![text("nothing to see"), TextNode::new("[x](y)", TextType::Code)];
        assert_eq!(split_nodes_link(nodes.clone()).unwrap(), nodes);
    }

    #[test]
    fn full_pipeline_in_source_order() {
        let nodes = text_to_text_nodes(
            "This is **text** with an _italic_ word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)",
        )
        .unwrap();
        assert_eq!(
            nodes,
            vec![
                text("This is "),
                TextNode::new("text", TextType::Bold),
                text(" with an "),
                TextNode::new("italic", TextType::Italic),
                text(" word and a "),
                TextNode::new("code block", TextType::Code),
                text(" and an "),
                TextNode::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                text(" and a "),
                TextNode::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn bold_wins_over_code_inside_it() {
        assert_eq!(
            text_to_text_nodes("**a `b` c**").unwrap(),
            vec![TextNode::new("a `b` c", TextType::Bold)]
        );
    }

    #[test]
    fn code_split_runs_before_links() {
        assert_eq!(
            text_to_text_nodes("see [the `docs`](d.html)").unwrap(),
            vec![
                text("see [the "),
                TextNode::new("docs", TextType::Code),
                text("](d.html)"),
            ]
        );
    }

    #[test]
    fn empty_text_yields_no_nodes() {
        assert_eq!(text_to_text_nodes("").unwrap(), Vec::<TextNode>::new());
    }

    #[test]
    fn unclosed_italic_in_pipeline() {
        assert_eq!(
            text_to_text_nodes("snake_case"),
            Err(MarkdownError::UnclosedDelimiter { delimiter: "_" })
        );
    }
}
