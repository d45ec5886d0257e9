//! Markdown rendering for guide replies.
//!
//! Converts a Markdown string into styled ratatui [`Line`]s. The guide
//! backend answers in light Markdown (bold, emphasis, bullet lists, inline
//! code, headings); everything else renders as plain text.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Render a Markdown string into ratatui lines.
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let parser = Parser::new_ext(text, Options::empty());

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut style = Style::default();
    let mut list_depth: usize = 0;

    let mut flush = |current: &mut Vec<Span<'static>>, lines: &mut Vec<Line<'static>>| {
        if !current.is_empty() {
            lines.push(Line::from(std::mem::take(current)));
        }
    };

    for event in parser {
        match event {
            Event::Start(Tag::Strong) => style = style.add_modifier(Modifier::BOLD),
            Event::End(TagEnd::Strong) => style = style.remove_modifier(Modifier::BOLD),
            Event::Start(Tag::Emphasis) => style = style.add_modifier(Modifier::ITALIC),
            Event::End(TagEnd::Emphasis) => style = style.remove_modifier(Modifier::ITALIC),

            Event::Start(Tag::Heading { .. }) => {
                flush(&mut current, &mut lines);
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            Event::End(TagEnd::Heading(_)) => {
                style = style.remove_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                flush(&mut current, &mut lines);
                lines.push(Line::default());
            }

            Event::Start(Tag::List(_)) => {
                flush(&mut current, &mut lines);
                list_depth += 1;
            }
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 {
                    lines.push(Line::default());
                }
            }
            Event::Start(Tag::Item) => {
                flush(&mut current, &mut lines);
                let indent = "  ".repeat(list_depth.saturating_sub(1));
                current.push(Span::raw(format!("{indent}• ")));
            }
            Event::End(TagEnd::Item) => flush(&mut current, &mut lines),

            Event::Start(Tag::Paragraph) => flush(&mut current, &mut lines),
            Event::End(TagEnd::Paragraph) => {
                flush(&mut current, &mut lines);
                if list_depth == 0 {
                    lines.push(Line::default());
                }
            }

            Event::Start(Tag::CodeBlock(_)) => flush(&mut current, &mut lines),
            Event::End(TagEnd::CodeBlock) => flush(&mut current, &mut lines),

            Event::Text(text) => {
                current.push(Span::styled(text.into_string(), style));
            }
            Event::Code(code) => {
                current.push(Span::styled(
                    code.into_string(),
                    style.add_modifier(Modifier::DIM | Modifier::BOLD),
                ));
            }
            Event::SoftBreak => current.push(Span::raw(" ")),
            Event::HardBreak => flush(&mut current, &mut lines),

            _ => {}
        }
    }

    flush(&mut current, &mut lines);

    // Drop a trailing blank line left by the final paragraph
    while lines.last().is_some_and(|l| l.spans.is_empty()) {
        lines.pop();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_plain_paragraph() {
        let lines = render_markdown("Just a sentence.");
        assert_eq!(lines.len(), 1);
        assert_eq!(text_of(&lines[0]), "Just a sentence.");
    }

    #[test]
    fn test_bold_span_is_styled() {
        let lines = render_markdown("Visit **Fes** soon");
        let spans = &lines[0].spans;
        let bold = spans.iter().find(|s| s.content == "Fes").unwrap();
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_bullet_list_gets_markers() {
        let lines = render_markdown("- tagine\n- couscous");
        let texts: Vec<_> = lines.iter().map(text_of).collect();
        assert!(texts[0].starts_with("• tagine"));
        assert!(texts[1].starts_with("• couscous"));
    }

    #[test]
    fn test_paragraphs_separated_by_blank_line() {
        let lines = render_markdown("one\n\ntwo");
        let texts: Vec<_> = lines.iter().map(text_of).collect();
        assert_eq!(texts, vec!["one", "", "two"]);
    }

    #[test]
    fn test_soft_break_becomes_space() {
        let lines = render_markdown("first\nsecond");
        assert_eq!(text_of(&lines[0]), "first second");
    }
}
