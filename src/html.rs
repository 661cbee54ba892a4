use crate::error::{MarkdownError, Result};

/// HTML attributes in insertion order.
pub type Props = Vec<(String, String)>;

/// A node of the rendered HTML tree.
///
/// Nodes are built bottom-up by the converter and never mutated afterwards.
/// A parent owns its children outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A node holding a value and no children. Without a tag the value is
    /// emitted as raw text.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        props: Props,
    },
    /// An element wrapping other nodes.
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        props: Props,
    },
}

impl HtmlNode {
    /// A tagged leaf, e.g. `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            props: Props::new(),
        }
    }

    /// An untagged leaf rendered verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            props: Props::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children,
            props: Props::new(),
        }
    }

    /// Append an attribute; attributes render in the order they were added.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { props, .. } | HtmlNode::Parent { props, .. } => {
                props.push((key.into(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn props(&self) -> &[(String, String)] {
        match self {
            HtmlNode::Leaf { props, .. } | HtmlNode::Parent { props, .. } => props,
        }
    }

    /// Serialize this node and everything below it.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        write_node(self, &mut out)?;
        Ok(out)
    }
}

/// Serialize attributes as ` key="value"` pairs. Values are not escaped.
pub fn props_to_html(props: &[(String, String)]) -> String {
    let mut out = String::new();
    for (key, value) in props {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out
}

fn write_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf { tag, value, props } => {
            let value = value.as_deref().ok_or(MarkdownError::MissingValue)?;
            match tag.as_deref() {
                None | Some("") => out.push_str(value),
                Some(tag) => {
                    open_tag(tag, props, out);
                    out.push_str(value);
                    close_tag(tag, out);
                }
            }
        }
        HtmlNode::Parent {
            tag,
            children,
            props,
        } => {
            let tag = tag.as_deref().ok_or(MarkdownError::MissingTag)?;
            if children.is_empty() {
                return Err(MarkdownError::MissingChildren);
            }
            open_tag(tag, props, out);
            for child in children {
                write_node(child, out)?;
            }
            close_tag(tag, out);
        }
    }
    Ok(())
}

fn open_tag(tag: &str, props: &[(String, String)], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&props_to_html(props));
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
