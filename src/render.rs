use std::fmt::Write;

use owo_colors::OwoColorize;

/// A bold or plain run of text within one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(String),
}

/// One display block. The grammar is deliberately tiny and line-oriented:
/// four patterns tried in order, everything else is a paragraph. Nested
/// structures, fences, links, and tables are out of scope and fall
/// through as literal paragraph text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading3(Vec<Inline>),
    Heading4(Vec<Inline>),
    ListItem(Vec<Inline>),
    Paragraph(Vec<Inline>),
    LineBreak,
}

fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find("**") {
        let Some(close) = rest[open + 2..].find("**") else {
            // Unpaired marker stays literal.
            break;
        };
        if open > 0 {
            spans.push(Inline::Text(rest[..open].to_string()));
        }
        spans.push(Inline::Bold(rest[open + 2..open + 2 + close].to_string()));
        rest = &rest[open + 4 + close..];
    }
    if !rest.is_empty() {
        spans.push(Inline::Text(rest.to_string()));
    }
    spans
}

/// Classifies raw model output into a block sequence. Runs of blank
/// lines collapse into a single `LineBreak`.
pub fn parse(raw: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    for line in raw.lines() {
        if line.trim().is_empty() {
            if blocks.last() != Some(&Block::LineBreak) {
                blocks.push(Block::LineBreak);
            }
            continue;
        }
        let block = if let Some(rest) = line.strip_prefix("### ") {
            Block::Heading3(parse_inline(rest))
        } else if let Some(rest) = line.strip_prefix("#### ") {
            Block::Heading4(parse_inline(rest))
        } else if let Some(rest) = line.strip_prefix("* ") {
            Block::ListItem(parse_inline(rest))
        } else {
            Block::Paragraph(parse_inline(line))
        };
        blocks.push(block);
    }
    blocks
}

fn inline_plain(spans: &[Inline]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Inline::Text(text) => out.push_str(text),
            Inline::Bold(text) => {
                let _ = write!(out, "{}", text.bold());
            }
        }
    }
    out
}

/// Renders a block sequence for the terminal. Presentation only; the
/// raw response text is what gets persisted or copied.
pub fn to_terminal(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading3(spans) => {
                let _ = writeln!(out, "{}", inline_plain(spans).bold().underline());
            }
            Block::Heading4(spans) => {
                let _ = writeln!(out, "{}", inline_plain(spans).cyan().bold());
            }
            Block::ListItem(spans) => {
                let _ = writeln!(out, "  • {}", inline_plain(spans));
            }
            Block::Paragraph(spans) => {
                let _ = writeln!(out, "{}", inline_plain(spans));
            }
            Block::LineBreak => {
                let _ = writeln!(out);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn bold(s: &str) -> Inline {
        Inline::Bold(s.to_string())
    }

    #[test]
    fn classifies_the_minimal_grammar() {
        let blocks = parse("### Title\n* item\n**bold**");
        assert_eq!(
            blocks,
            vec![
                Block::Heading3(vec![text("Title")]),
                Block::ListItem(vec![text("item")]),
                Block::Paragraph(vec![bold("bold")]),
            ]
        );
    }

    #[test]
    fn level_four_headings_and_bold_spans_combine() {
        let blocks = parse("#### **I. Overall Summary**");
        assert_eq!(blocks, vec![Block::Heading4(vec![bold("I. Overall Summary")])]);
    }

    #[test]
    fn blank_line_runs_collapse_to_one_break() {
        let blocks = parse("one\n\n\n\ntwo");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(vec![text("one")]),
                Block::LineBreak,
                Block::Paragraph(vec![text("two")]),
            ]
        );
    }

    #[test]
    fn unpaired_bold_marker_is_literal() {
        let blocks = parse("a ** b");
        assert_eq!(blocks, vec![Block::Paragraph(vec![text("a ** b")])]);
    }

    #[test]
    fn bold_inside_list_item_splits_spans() {
        let blocks = parse("* **For Student:** Practice daily.");
        assert_eq!(
            blocks,
            vec![Block::ListItem(vec![
                bold("For Student:"),
                text(" Practice daily."),
            ])]
        );
    }

    #[test]
    fn indented_or_unknown_markup_falls_through_as_paragraph() {
        let blocks = parse("  ### not a heading\n| a | b |");
        assert_eq!(
            blocks,
            vec![
                Block::Paragraph(vec![text("  ### not a heading")]),
                Block::Paragraph(vec![text("| a | b |")]),
            ]
        );
    }

    #[test]
    fn terminal_output_contains_every_block() {
        let rendered = to_terminal(&parse("### Title\n\n* item\nplain"));
        assert!(rendered.contains("Title"));
        assert!(rendered.contains("• item"));
        assert!(rendered.contains("plain"));
    }
}
