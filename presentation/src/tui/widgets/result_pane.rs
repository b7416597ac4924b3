//! Result pane: the latest result as markdown text, or a placeholder

use crate::tui::state::FormState;
use jobscout_application::SessionView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ResultPaneWidget<'a> {
    state: &'a FormState,
    view: &'a SessionView,
}

impl<'a> ResultPaneWidget<'a> {
    pub fn new(state: &'a FormState, view: &'a SessionView) -> Self {
        Self { state, view }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        if self.state.searching {
            lines.push(Line::from(Span::styled(
                "Searching the web for the latest listings...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
        }

        match &self.view.result {
            Some(result) => {
                let body_style = if result.is_fallback {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                lines.extend(
                    result
                        .text
                        .lines()
                        .map(|line| Line::from(Span::styled(line.to_string(), body_style))),
                );
                if let Some(caption) = self.view.caption {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        caption,
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    )));
                }
            }
            None => {
                if let Some(placeholder) = self.view.placeholder {
                    lines.push(Line::from(Span::styled(
                        placeholder,
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
        }
        lines
    }
}

impl<'a> Widget for ResultPaneWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match &self.view.result {
            Some(result) => format!(" {} ", result.heading()),
            None => " Austin, TX job search ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobscout_application::RESULT_CAPTION;
    use jobscout_domain::{JobCategory, SearchResult};

    fn view(result: Option<SearchResult>) -> SessionView {
        SessionView {
            state: "ResultShown",
            credential_editable: true,
            selector_enabled: true,
            trigger_enabled: true,
            selected: JobCategory::MathTutor,
            placeholder: if result.is_some() {
                None
            } else {
                Some("Pick a job category")
            },
            caption: result.as_ref().map(|_| RESULT_CAPTION),
            result,
        }
    }

    fn rendered(state: &FormState, view: &SessionView) -> String {
        let area = Rect::new(0, 0, 200, 12);
        let mut buf = Buffer::empty(area);
        ResultPaneWidget::new(state, view).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect::<String>()
    }

    #[test]
    fn test_renders_markdown_verbatim_with_caption() {
        let state = FormState::new();
        let result = SearchResult::new(JobCategory::MathTutor, "| Title | Pay |\n|---|---|");
        let content = rendered(&state, &view(Some(result)));

        assert!(content.contains("| Title | Pay |"));
        assert!(content.contains("|---|---|"));
        assert!(content.contains("latest job listings"));
        assert!(content.contains("Listings come from Gemini"));
    }

    #[test]
    fn test_placeholder_without_result() {
        let state = FormState::new();
        let content = rendered(&state, &view(None));
        assert!(content.contains("Pick a job category"));
        assert!(content.contains("Austin, TX job search"));
    }

    #[test]
    fn test_searching_banner() {
        let mut state = FormState::new();
        state.searching = true;
        let content = rendered(&state, &view(None));
        assert!(content.contains("Searching the web"));
    }
}
