//! Markdown subset used by learning notes and journal entries.
//!
//! # Responsibility
//! - Parse the supported subset into a tagged block/inline tree that the
//!   presentation layer renders.
//! - Derive plain-text previews for dashboard cards.
//!
//! # Invariants
//! - Parsing is line oriented and total: every input yields blocks, never
//!   an error.
//! - Supported: `#`/`##`/`###` headings, `- ` bullets, `**bold**`,
//!   `*italic*` and `` `code` ``. Everything else is literal text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,3}) (.*)$").expect("valid heading regex"));
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^- (.*)$").expect("valid bullet regex"));
static INLINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*(?P<bold>.+?)\*\*|\*(?P<italic>.+?)\*|`(?P<code>.+?)`")
        .expect("valid inline regex")
});
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Inline span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Bold(String),
    Italic(String),
    Code(String),
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Bold(text) | Self::Italic(text) | Self::Code(text) => text,
        }
    }
}

/// One rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading { level: u8, spans: Vec<Inline> },
    ListItem { spans: Vec<Inline> },
    Paragraph { spans: Vec<Inline> },
    Blank,
}

impl Block {
    pub fn spans(&self) -> &[Inline] {
        match self {
            Self::Heading { spans, .. } | Self::ListItem { spans } | Self::Paragraph { spans } => {
                spans
            }
            Self::Blank => &[],
        }
    }
}

/// Parses `source` line by line.
pub fn parse_markdown(source: &str) -> Vec<Block> {
    source.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> Block {
    if line.trim().is_empty() {
        return Block::Blank;
    }
    if let Some(caps) = HEADING_RE.captures(line) {
        // The pattern only admits one to three `#`.
        let level = u8::try_from(caps[1].len()).unwrap_or(3);
        return Block::Heading {
            level,
            spans: parse_inline(&caps[2]),
        };
    }
    if let Some(caps) = BULLET_RE.captures(line) {
        return Block::ListItem {
            spans: parse_inline(&caps[1]),
        };
    }
    Block::Paragraph {
        spans: parse_inline(line),
    }
}

/// Splits one line into text and emphasis spans.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    for caps in INLINE_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > cursor {
            spans.push(Inline::Text(text[cursor..whole.start()].to_string()));
        }
        let span = if let Some(bold) = caps.name("bold") {
            Inline::Bold(bold.as_str().to_string())
        } else if let Some(italic) = caps.name("italic") {
            Inline::Italic(italic.as_str().to_string())
        } else if let Some(code) = caps.name("code") {
            Inline::Code(code.as_str().to_string())
        } else {
            Inline::Text(whole.as_str().to_string())
        };
        spans.push(span);
        cursor = whole.end();
    }
    if cursor < text.len() {
        spans.push(Inline::Text(text[cursor..].to_string()));
    }
    spans
}

/// Markup-free summary of `source`, at most `max_chars` characters plus a
/// trailing `...` when cut. `None` for blank input.
pub fn plain_preview(source: &str, max_chars: usize) -> Option<String> {
    let joined = parse_markdown(source)
        .iter()
        .map(|block| block.spans().iter().map(Inline::text).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");
    let normalized = WHITESPACE_RE.replace_all(&joined, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut preview: String = trimmed.chars().take(max_chars).collect();
    if trimmed.chars().count() > max_chars {
        preview.push_str("...");
    }
    Some(preview)
}
