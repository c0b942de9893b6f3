//! Markdown-subset renderer.
//!
//! Interprets the restricted dialect slide bodies are written in: `#`
//! headings, `-`/`*`/`+` bullet lists, and inline `[text](url)` links.
//! Anything else degrades to a plain paragraph; the renderer never fails
//! on malformed input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::{
    Paragraph, TextFrame, TextRun, HEADING_BASE_PT, HEADING_STEP_PT, INDENT_SPACES_PER_LEVEL,
};

static HEADING_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").unwrap());
static BULLET_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s*)([-*+])\s+(.*)$").unwrap());
static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Render markdown-subset text into `frame`, one paragraph per input line.
///
/// Heading syntax takes precedence over bullet syntax; lines matching
/// neither become unstyled paragraphs. Empty input appends nothing.
pub fn render_markdown(frame: &mut TextFrame, text: &str) {
    for line in text.lines() {
        frame.push(render_line(line));
    }
}

fn render_line(line: &str) -> Paragraph {
    if let Some(caps) = HEADING_PATTERN.captures(line) {
        let level = caps[1].len() as u32;
        return Paragraph {
            runs: split_runs(&caps[2]),
            bold: true,
            size_pt: Some(HEADING_BASE_PT.saturating_sub(HEADING_STEP_PT * (level - 1))),
            ..Paragraph::default()
        };
    }

    if let Some(caps) = BULLET_PATTERN.captures(line) {
        let indent = caps[1].len() / INDENT_SPACES_PER_LEVEL;
        return Paragraph {
            runs: split_runs(&caps[3]),
            bullet: true,
            indent_level: indent.min(u8::MAX as usize) as u8,
            ..Paragraph::default()
        };
    }

    Paragraph {
        runs: split_runs(line),
        ..Paragraph::default()
    }
}

/// Split line content into runs, one per inline link plus plain runs for
/// the surrounding text. Links are resolved left to right.
fn split_runs(content: &str) -> Vec<TextRun> {
    if !LINK_PATTERN.is_match(content) {
        return vec![TextRun::plain(content)];
    }

    let mut runs = Vec::new();
    let mut last_end = 0;
    for caps in LINK_PATTERN.captures_iter(content) {
        let whole = caps.get(0).unwrap();
        let pre = &content[last_end..whole.start()];
        if !pre.is_empty() {
            runs.push(TextRun::plain(pre));
        }
        runs.push(TextRun::link(&caps[1], &caps[2]));
        last_end = whole.end();
    }
    let tail = &content[last_end..];
    if !tail.is_empty() {
        runs.push(TextRun::plain(tail));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> TextFrame {
        let mut frame = TextFrame::new();
        render_markdown(&mut frame, text);
        frame
    }

    #[test]
    fn plain_line_is_one_unstyled_paragraph() {
        let frame = render("Hello world");
        assert_eq!(frame.paragraphs.len(), 1);
        let p = &frame.paragraphs[0];
        assert_eq!(p.text(), "Hello world");
        assert!(!p.bullet);
        assert!(!p.bold);
        assert_eq!(p.size_pt, None);
    }

    #[test]
    fn empty_input_adds_no_paragraphs() {
        let frame = render("");
        assert!(frame.paragraphs.is_empty());
    }

    #[test]
    fn heading_level_maps_to_size() {
        let frame = render("# Title");
        let p = &frame.paragraphs[0];
        assert!(p.bold);
        assert_eq!(p.size_pt, Some(32));
        assert_eq!(p.text(), "Title");

        let frame = render("### Title");
        let p = &frame.paragraphs[0];
        assert_eq!(p.size_pt, Some(24));
        assert!(!p.text().contains('#'));
    }

    #[test]
    fn bullet_indent_buckets_by_two_spaces() {
        let frame = render("- item one\n  - item two");
        let first = &frame.paragraphs[0];
        assert!(first.bullet);
        assert_eq!(first.indent_level, 0);
        assert_eq!(first.text(), "item one");

        let second = &frame.paragraphs[1];
        assert!(second.bullet);
        assert_eq!(second.indent_level, 1);
        assert_eq!(second.text(), "item two");
    }

    #[test]
    fn heading_takes_precedence_over_bullet() {
        // "# - x" matches the heading pattern first.
        let frame = render("# - x");
        let p = &frame.paragraphs[0];
        assert!(p.bold);
        assert!(!p.bullet);
        assert_eq!(p.text(), "- x");
    }

    #[test]
    fn inline_link_splits_into_three_runs() {
        let frame = render("See [docs](https://x.example/y) for more");
        let p = &frame.paragraphs[0];
        assert_eq!(p.runs.len(), 3);
        assert_eq!(p.runs[0], TextRun::plain("See "));
        assert_eq!(p.runs[1].text, "docs");
        assert_eq!(p.runs[1].hyperlink.as_deref(), Some("https://x.example/y"));
        assert!(p.runs[1].underline && p.runs[1].accent);
        assert_eq!(p.runs[2], TextRun::plain(" for more"));
    }

    #[test]
    fn multiple_links_resolve_left_to_right() {
        let frame = render("[a](u1) and [b](u2)");
        let p = &frame.paragraphs[0];
        let links: Vec<_> = p.runs.iter().filter(|r| r.hyperlink.is_some()).collect();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].hyperlink.as_deref(), Some("u1"));
        assert_eq!(links[1].hyperlink.as_deref(), Some("u2"));
        assert_eq!(p.text(), "a and b");
    }

    #[test]
    fn links_inside_bullets_keep_bullet_styling() {
        let frame = render("- read [docs](u)");
        let p = &frame.paragraphs[0];
        assert!(p.bullet);
        assert_eq!(p.runs.len(), 2);
        assert_eq!(p.runs[1].hyperlink.as_deref(), Some("u"));
    }

    #[test]
    fn blank_line_becomes_empty_paragraph() {
        let frame = render("a\n\nb");
        assert_eq!(frame.paragraphs.len(), 3);
        assert_eq!(frame.paragraphs[1].text(), "");
    }

    #[test]
    fn malformed_markdown_falls_through_to_plain() {
        let frame = render("####### seven hashes\n[unclosed(link");
        assert_eq!(frame.paragraphs.len(), 2);
        assert!(!frame.paragraphs[0].bold);
        assert!(frame.paragraphs[1].runs[0].hyperlink.is_none());
    }
}
