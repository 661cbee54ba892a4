/// Fence that opens and closes a code block
pub const CODE_FENCE: &str = "```";

/// Block-level kinds, in classification priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Split a document into trimmed, non-empty blocks separated by blank lines.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block. The first matching rule wins.
pub fn block_to_block_type(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }
    if block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE) {
        return BlockType::Code;
    }
    if block.lines().all(|line| line.starts_with('>')) {
        return BlockType::Quote;
    }
    if block.lines().all(|line| line.starts_with("- ")) {
        return BlockType::UnorderedList;
    }
    if is_ordered_list(block) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

/// Level of a `#`..`######` prefix followed by a space.
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block[hashes..].starts_with(' ') {
        u8::try_from(hashes).ok()
    } else {
        None
    }
}

/// Every line numbered `1. `, `2. `, ... with no gaps.
fn is_ordered_list(block: &str) -> bool {
    block
        .lines()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn empty_document_has_no_blocks() {
        assert_eq!(markdown_to_blocks(""), Vec::<&str>::new());
    }

    #[test]
    fn single_paragraph() {
        assert_eq!(
            markdown_to_blocks("This is a single paragraph."),
            vec!["This is a single paragraph."]
        );
    }

    #[test]
    fn runs_of_blank_lines_collapse() {
        let md = "\n\n\nFirst paragraph\n\n\nSecond paragraph\n\n\n        ";
        assert_eq!(
            markdown_to_blocks(md),
            vec!["First paragraph", "Second paragraph"]
        );
    }

    #[test]
    fn multiple_blocks_keep_inner_newlines() {
        let md = "
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
    ";
        assert_eq!(
            markdown_to_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn whitespace_only_pieces_are_dropped() {
        for block in markdown_to_blocks("a\n\n   \n\n\t\n\nb") {
            assert!(!block.trim().is_empty());
        }
    }

    #[rstest]
    #[case("# heading", BlockType::Heading(1))]
    #[case("### heading", BlockType::Heading(3))]
    #[case("###### heading", BlockType::Heading(6))]
    #[case("####### too deep", BlockType::Paragraph)]
    #[case("#no space", BlockType::Paragraph)]
    #[case("```\ncode\n```", BlockType::Code)]
    #[case("```python\nprint()\n```", BlockType::Code)]
    #[case("```", BlockType::Code)]
    #[case("```\nunclosed", BlockType::Paragraph)]
    #[case("> quote\n> more", BlockType::Quote)]
    #[case(">tight\n>quote", BlockType::Quote)]
    #[case("> quote\nnot quote", BlockType::Paragraph)]
    #[case("- one\n- two", BlockType::UnorderedList)]
    #[case("- one\n-two", BlockType::Paragraph)]
    #[case("* star", BlockType::Paragraph)]
    #[case("1. one\n2. two\n3. three", BlockType::OrderedList)]
    #[case("2. two\n3. three", BlockType::Paragraph)]
    #[case("1. one\n3. three", BlockType::Paragraph)]
    #[case("1. one\n1. one", BlockType::Paragraph)]
    #[case("1. one\nplain", BlockType::Paragraph)]
    #[case("1.one", BlockType::Paragraph)]
    #[case("just text", BlockType::Paragraph)]
    fn classify(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(block_to_block_type(block), expected);
    }

    #[test]
    fn heading_beats_quote_and_list_rules() {
        assert_eq!(block_to_block_type("# > quoted"), BlockType::Heading(1));
        assert_eq!(block_to_block_type("## - item"), BlockType::Heading(2));
    }

    #[test]
    fn ordered_list_counts_past_nine() {
        let block = (1..=12)
            .map(|i| format!("{i}. item"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(block_to_block_type(&block), BlockType::OrderedList);
    }
}
