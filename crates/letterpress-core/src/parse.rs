//! Markdown subset parser
//!
//! Block structure is recognised line by line; inline markup is tokenised
//! with pulldown-cmark so delimiter runs, escapes and link destinations follow
//! CommonMark. The parser never fails: anything outside the supported subset
//! is kept as literal paragraph text.

use once_cell::sync::Lazy;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;

use crate::ast::{Block, Inline, ListItem};

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ {0,3}(#{1,3})[ \t]+(.*?)[ \t]*$").expect("heading pattern"));

static THEMATIC_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ {0,3}(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})$")
        .expect("thematic break pattern")
});

static BULLET_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*[-*+][ \t]+(.*)$").expect("bullet item pattern"));

static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*(\d{1,9})[.)][ \t]+(.*)$").expect("ordered item pattern"));

/// List under construction
struct OpenList {
    ordered: bool,
    start: u32,
    items: Vec<String>,
}

/// Parse a Markdown string into a document block
pub fn parse_markdown(source: &str) -> Block {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut list: Option<OpenList> = None;

    for line in source.lines() {
        let line = line.trim_end();

        if line.trim().is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_list(&mut list, &mut blocks);
            continue;
        }

        if THEMATIC_BREAK.is_match(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_list(&mut list, &mut blocks);
            blocks.push(Block::ThematicBreak);
            continue;
        }

        if let Some(caps) = HEADING.captures(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_list(&mut list, &mut blocks);
            let level = caps[1].len() as u8;
            blocks.push(Block::Heading {
                level,
                content: parse_inlines(&caps[2]),
            });
            continue;
        }

        if let Some(caps) = BULLET_ITEM.captures(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            push_item(&mut list, &mut blocks, false, 1, &caps[1]);
            continue;
        }

        if let Some(caps) = ORDERED_ITEM.captures(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            let start = caps[1].parse().unwrap_or(1);
            push_item(&mut list, &mut blocks, true, start, &caps[2]);
            continue;
        }

        // Lazy continuation of the last list item
        if let Some(open) = list.as_mut() {
            if let Some(last) = open.items.last_mut() {
                last.push('\n');
                last.push_str(line.trim_start());
                continue;
            }
        }

        paragraph.push(line.trim_start());
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    flush_list(&mut list, &mut blocks);

    Block::Document(blocks)
}

fn push_item(
    list: &mut Option<OpenList>,
    blocks: &mut Vec<Block>,
    ordered: bool,
    start: u32,
    text: &str,
) {
    if list.as_ref().is_some_and(|open| open.ordered != ordered) {
        flush_list(list, blocks);
    }
    list.get_or_insert_with(|| OpenList {
        ordered,
        start,
        items: Vec::new(),
    })
    .items
    .push(text.to_string());
}

fn flush_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if lines.is_empty() {
        return;
    }
    let text = lines.join("\n");
    lines.clear();
    blocks.push(Block::Paragraph(parse_inlines(&text)));
}

fn flush_list(list: &mut Option<OpenList>, blocks: &mut Vec<Block>) {
    if let Some(open) = list.take() {
        blocks.push(Block::List {
            ordered: open.ordered,
            start: open.start,
            items: open
                .items
                .iter()
                .map(|item| ListItem::new(parse_inlines(item)))
                .collect(),
        });
    }
}

/// Inline container waiting for its end tag
enum OpenInline {
    Strong,
    Emphasis,
    Link(String),
}

/// Parse inline markup (strong, emphasis, links) in a span of text.
///
/// Any other construct the tokenizer reports (code spans, images, raw HTML,
/// nested blocks) is copied from `text` verbatim.
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    let mut root = Vec::new();
    let mut stack: Vec<(OpenInline, Vec<Inline>)> = Vec::new();
    let mut literal_until = 0;

    for (event, range) in Parser::new_ext(text, Options::empty()).into_offset_iter() {
        if range.start < literal_until {
            continue;
        }

        match event {
            Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph) => {}
            Event::Start(Tag::Strong) => stack.push((OpenInline::Strong, Vec::new())),
            Event::Start(Tag::Emphasis) => stack.push((OpenInline::Emphasis, Vec::new())),
            Event::Start(Tag::Link { dest_url, .. }) => {
                stack.push((OpenInline::Link(dest_url.into_string()), Vec::new()));
            }
            Event::End(TagEnd::Strong | TagEnd::Emphasis | TagEnd::Link) => {
                if let Some((open, content)) = stack.pop() {
                    let inline = match open {
                        OpenInline::Strong => Inline::Strong(content),
                        OpenInline::Emphasis => Inline::Emphasis(content),
                        OpenInline::Link(url) => Inline::Link { content, url },
                    };
                    current(&mut root, &mut stack).push(inline);
                }
            }
            Event::Text(value) => push_text(current(&mut root, &mut stack), &value),
            Event::SoftBreak | Event::HardBreak => {
                push_text(current(&mut root, &mut stack), "\n");
            }
            Event::Start(_) => {
                push_text(current(&mut root, &mut stack), &text[range.start..range.end]);
                literal_until = range.end;
            }
            Event::End(_) => {}
            _ => push_text(current(&mut root, &mut stack), &text[range.start..range.end]),
        }
    }

    root
}

fn current<'a>(
    root: &'a mut Vec<Inline>,
    stack: &'a mut [(OpenInline, Vec<Inline>)],
) -> &'a mut Vec<Inline> {
    match stack.last_mut() {
        Some((_, content)) => content,
        None => root,
    }
}

/// Append text, joining it with a preceding text run
fn push_text(inlines: &mut Vec<Inline>, value: &str) {
    if let Some(Inline::Text(last)) = inlines.last_mut() {
        last.push_str(value);
    } else {
        inlines.push(Inline::Text(value.to_string()));
    }
}
