//! Portfolio parsing with comrak.
//!
//! Level-1 and level-2 headings open sections; everything beneath a
//! heading becomes that section's body. Content before the first
//! heading belongs to no section and is dropped.

use std::collections::HashSet;

use comrak::nodes::{AstNode, ListType, NodeList, NodeValue};
use comrak::{Arena, Options, parse_document};

use super::PortfolioError;
use super::types::{BodyLine, LineType, Portfolio, Section};

/// Markdown heading levels that open a new section.
const SECTION_HEADING_MAX_LEVEL: u8 = 2;

pub(super) fn parse(source: &str) -> Result<Portfolio, PortfolioError> {
    let arena = Arena::new();
    let options = create_options();
    let root = parse_document(&arena, source, &options);

    let mut sections: Vec<Section> = Vec::new();
    let mut used_ids: HashSet<String> = HashSet::new();

    for node in root.children() {
        let is_section_heading = matches!(
            &node.data.borrow().value,
            NodeValue::Heading(heading) if heading.level <= SECTION_HEADING_MAX_LEVEL
        );
        if is_section_heading {
            let title = extract_text(node);
            let id = unique_slug(&title, &mut used_ids);
            sections.push(Section {
                id,
                title,
                lines: Vec::new(),
            });
            continue;
        }
        let Some(section) = sections.last_mut() else {
            continue;
        };
        append_block(node, &mut section.lines);
    }

    for section in &mut sections {
        while section
            .lines
            .last()
            .is_some_and(|line| line.line_type() == LineType::Empty)
        {
            section.lines.pop();
        }
    }

    if sections.is_empty() {
        return Err(PortfolioError::NoSections);
    }
    Ok(Portfolio::new(sections))
}

fn create_options() -> Options {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options
}

fn append_block<'a>(node: &'a AstNode<'a>, lines: &mut Vec<BodyLine>) {
    match &node.data.borrow().value {
        NodeValue::Heading(heading) => {
            ensure_blank(lines);
            lines.push(BodyLine::new(
                extract_text(node),
                LineType::Heading(heading.level),
            ));
            lines.push(BodyLine::new(String::new(), LineType::Empty));
        }

        NodeValue::Paragraph => {
            for text in paragraph_lines(node) {
                lines.push(BodyLine::new(text, LineType::Paragraph));
            }
            lines.push(BodyLine::new(String::new(), LineType::Empty));
        }

        NodeValue::List(list) => {
            append_list(node, list, 0, lines);
            lines.push(BodyLine::new(String::new(), LineType::Empty));
        }

        NodeValue::BlockQuote => {
            for child in node.children() {
                let is_paragraph =
                    matches!(child.data.borrow().value, NodeValue::Paragraph);
                if is_paragraph {
                    for text in paragraph_lines(child) {
                        lines.push(BodyLine::new(format!("> {text}"), LineType::Quote));
                    }
                }
            }
            lines.push(BodyLine::new(String::new(), LineType::Empty));
        }

        NodeValue::CodeBlock(code_block) => {
            for raw_line in code_block.literal.lines() {
                lines.push(BodyLine::new(raw_line, LineType::CodeBlock));
            }
            lines.push(BodyLine::new(String::new(), LineType::Empty));
        }

        NodeValue::ThematicBreak => {
            ensure_blank(lines);
        }

        _ => {}
    }
}

fn append_list<'a>(
    node: &'a AstNode<'a>,
    list: &NodeList,
    depth: usize,
    lines: &mut Vec<BodyLine>,
) {
    let indent = "  ".repeat(depth);
    let mut number = list.start;

    for item in node.children() {
        let is_item = matches!(item.data.borrow().value, NodeValue::Item(_));
        if !is_item {
            continue;
        }
        let marker = match list.list_type {
            ListType::Bullet => "•".to_string(),
            ListType::Ordered => {
                let marker = format!("{number}.");
                number += 1;
                marker
            }
        };

        let mut first = true;
        for child in item.children() {
            match &child.data.borrow().value {
                NodeValue::Paragraph => {
                    for text in paragraph_lines(child) {
                        let content = if first {
                            format!("{indent}{marker} {text}")
                        } else {
                            format!("{indent}  {text}")
                        };
                        first = false;
                        lines.push(BodyLine::new(content, LineType::ListItem));
                    }
                }
                NodeValue::List(nested) => append_list(child, nested, depth + 1, lines),
                _ => {}
            }
        }
        if first {
            lines.push(BodyLine::new(format!("{indent}{marker}"), LineType::ListItem));
        }
    }
}

fn ensure_blank(lines: &mut Vec<BodyLine>) {
    if lines
        .last()
        .is_some_and(|line| line.line_type() != LineType::Empty)
    {
        lines.push(BodyLine::new(String::new(), LineType::Empty));
    }
}

/// Flatten a node's inline content into logical lines. Soft breaks
/// join with a space; hard breaks start a new line.
fn paragraph_lines<'a>(node: &'a AstNode<'a>) -> Vec<String> {
    let mut lines = vec![String::new()];
    collect_inline_text(node, &mut lines);
    lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn collect_inline_text<'a>(node: &'a AstNode<'a>, lines: &mut Vec<String>) {
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(text) => push_text(lines, text),
            NodeValue::Code(code) => push_text(lines, &code.literal),
            NodeValue::SoftBreak => push_text(lines, " "),
            NodeValue::LineBreak => lines.push(String::new()),
            _ => collect_inline_text(child, lines),
        }
    }
}

fn push_text(lines: &mut Vec<String>, text: &str) {
    if let Some(last) = lines.last_mut() {
        last.push_str(text);
    }
}

fn extract_text<'a>(node: &'a AstNode<'a>) -> String {
    paragraph_lines(node).join(" ")
}

/// Slug of a heading title: lowercase, alphanumeric runs joined by `-`.
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }
    slug
}

fn unique_slug(title: &str, used: &mut HashSet<String>) -> String {
    let base = {
        let slug = slugify(title);
        if slug.is_empty() { "section".to_string() } else { slug }
    };
    let mut candidate = base.clone();
    let mut n = 1;
    while used.contains(&candidate) {
        candidate = format!("{base}-{n}");
        n += 1;
    }
    used.insert(candidate.clone());
    candidate
}
