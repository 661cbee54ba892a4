use std::sync::OnceLock;

use regex::Regex;

use crate::block::{BlockType, CODE_FENCE, block_to_block_type, markdown_to_blocks};
use crate::error::{MarkdownError, Result};
use crate::html::HtmlNode;
use crate::inline::text_to_text_nodes;
use crate::text::text_node_to_html_node;

// Opening fence, optional info string, a line break, then the shortest run
// up to the next fence.
fn code_regex() -> &'static Regex {
    static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
    CODE_REGEX.get_or_init(|| {
        Regex::new(r"(?s)\A```[^\n`]*\n(.*?)```").expect("Invalid code regex")
    })
}

/// Parse a whole document into a `div` holding one node per block.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let blocks = markdown_to_blocks(markdown);
    let mut children = Vec::with_capacity(blocks.len());
    for block in blocks {
        let block_type = block_to_block_type(block);
        log::debug!("block {:?}: {:?}", block_type, first_line(block));
        children.push(block_to_html_node(block, block_type)?);
    }
    Ok(HtmlNode::parent("div", children))
}

/// Convert one block of the given type.
pub fn block_to_html_node(block: &str, block_type: BlockType) -> Result<HtmlNode> {
    match block_type {
        BlockType::Paragraph => paragraph_to_html_node(block),
        BlockType::Heading(_) => heading_to_html_node(block),
        BlockType::Code => code_to_html_node(block),
        BlockType::Quote => quote_to_html_node(block),
        BlockType::UnorderedList => unordered_list_to_html_node(block),
        BlockType::OrderedList => ordered_list_to_html_node(block),
    }
}

/// Inline-parse `text` and map each inline node to HTML.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(text_to_text_nodes(text)?
        .iter()
        .map(text_node_to_html_node)
        .collect())
}

pub fn paragraph_to_html_node(block: &str) -> Result<HtmlNode> {
    let paragraph = block.lines().collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", text_to_children(&paragraph)?))
}

pub fn heading_to_html_node(block: &str) -> Result<HtmlNode> {
    let level = block.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&level) {
        return Err(MarkdownError::InvalidHeadingLevel(level));
    }
    // Skip the separator after the hashes; it is ASCII in any classified heading.
    let mut rest = block[level..].chars();
    rest.next();
    let text = rest.as_str();
    if text.is_empty() {
        return Err(MarkdownError::InvalidHeadingLevel(level));
    }
    Ok(HtmlNode::parent(format!("h{level}"), text_to_children(text)?))
}

/// Fenced code is emitted verbatim as `<pre><code>..</code></pre>`.
pub fn code_to_html_node(block: &str) -> Result<HtmlNode> {
    if !block.starts_with(CODE_FENCE) || !block.ends_with(CODE_FENCE) {
        return Err(MarkdownError::InvalidCodeBlock);
    }
    let content = code_regex()
        .captures(block)
        .and_then(|caps| caps.get(1))
        .ok_or(MarkdownError::InvalidCodeBlock)?;
    let code = HtmlNode::parent("code", vec![HtmlNode::text(content.as_str())]);
    Ok(HtmlNode::parent("pre", vec![code]))
}

pub fn quote_to_html_node(block: &str) -> Result<HtmlNode> {
    let lines = block
        .lines()
        .map(|line| {
            line.strip_prefix('>')
                .map(str::trim_start)
                .ok_or(MarkdownError::InvalidQuoteBlock)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent("blockquote", text_to_children(&lines.join(" "))?))
}

pub fn unordered_list_to_html_node(block: &str) -> Result<HtmlNode> {
    list_to_html_node(block, "ul", |line| line.strip_prefix("- ").unwrap_or(line))
}

pub fn ordered_list_to_html_node(block: &str) -> Result<HtmlNode> {
    list_to_html_node(block, "ol", strip_ordered_marker)
}

fn list_to_html_node(block: &str, tag: &str, strip: fn(&str) -> &str) -> Result<HtmlNode> {
    let items = block
        .lines()
        .map(|line| -> Result<HtmlNode> {
            Ok(HtmlNode::parent("li", text_to_children(strip(line))?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent(tag, items))
}

/// Drop a leading `<digits>. ` marker; lines without one are returned as is.
fn strip_ordered_marker(line: &str) -> &str {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return line;
    }
    line[digits..].strip_prefix(". ").unwrap_or(line)
}

fn first_line(block: &str) -> &str {
    block.lines().next().unwrap_or_default()
}
