//! Sidebar widget: credential field, confirm button, category list, search button

use crate::tui::state::{Focus, FormState};
use jobscout_application::{CredentialPolicy, SessionView};
use jobscout_domain::JobCategory;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

const MASK: char = '•';

pub struct SidebarWidget<'a> {
    state: &'a FormState,
    view: &'a SessionView,
    policy: CredentialPolicy,
    model: &'a str,
}

/// Sub-regions of the sidebar; credential rows are absent when the field is hidden
struct Sections {
    credential: Option<Rect>,
    confirm: Option<Rect>,
    categories: Rect,
    search: Rect,
    info: Rect,
}

impl<'a> SidebarWidget<'a> {
    pub fn new(
        state: &'a FormState,
        view: &'a SessionView,
        policy: CredentialPolicy,
        model: &'a str,
    ) -> Self {
        Self {
            state,
            view,
            policy,
            model,
        }
    }

    fn sections(&self, area: Rect) -> Sections {
        let show_field = self.view.credential_editable;
        let show_confirm = show_field && self.policy == CredentialPolicy::ExplicitConfirm;

        let mut constraints = Vec::with_capacity(5);
        if show_field {
            constraints.push(Constraint::Length(3));
        }
        if show_confirm {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Length(JobCategory::ALL.len() as u16 + 2));
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Min(0));

        let rects = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut next = rects.iter().copied();
        let credential = if show_field { next.next() } else { None };
        let confirm = if show_confirm { next.next() } else { None };
        Sections {
            credential,
            confirm,
            categories: next.next().unwrap_or_default(),
            search: next.next().unwrap_or_default(),
            info: next.next().unwrap_or_default(),
        }
    }

    /// Terminal cursor position while the credential field has focus
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if self.state.focus != Focus::Credential || self.state.searching {
            return None;
        }
        let field = self.sections(area).credential?;
        let max_x = field.right().saturating_sub(2);
        let x = (field.x + 1 + self.state.cursor_column() as u16).min(max_x);
        Some(Position::new(x, field.y + 1))
    }

    fn border_style(&self, focus: Focus, enabled: bool) -> Style {
        if !enabled {
            Style::default().fg(Color::DarkGray)
        } else if self.state.focus == focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    fn render_credential(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Gemini API key ")
            .border_style(self.border_style(Focus::Credential, true));

        let masked: String = std::iter::repeat_n(MASK, self.state.credential_draft.chars().count())
            .collect();
        let line = if masked.is_empty() {
            Line::from(Span::styled(
                "paste your key here",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(masked)
        };
        Paragraph::new(line).block(block).render(area, buf);
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer, label: &str, focus: Focus, enabled: bool) {
        let style = self.border_style(focus, enabled);
        let mut text_style = style;
        if enabled && self.state.focus == focus {
            text_style = text_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Paragraph::new(Line::from(Span::styled(format!(" {} ", label), text_style)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style))
            .render(area, buf);
    }

    fn render_categories(&self, area: Rect, buf: &mut Buffer) {
        let enabled = self.view.selector_enabled;
        let items: Vec<ListItem> = JobCategory::ALL
            .iter()
            .map(|category| {
                let selected = *category == self.view.selected;
                let marker = if selected { "(•) " } else { "( ) " };
                let style = match (enabled, selected) {
                    (false, _) => Style::default().fg(Color::DarkGray),
                    (true, true) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    (true, false) => Style::default(),
                };
                ListItem::new(Line::from(Span::styled(
                    format!("{}{}", marker, category.label()),
                    style,
                )))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Job category ")
                    .border_style(self.border_style(Focus::Category, enabled)),
            )
            .render(area, buf);
    }

    fn render_info(&self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().fg(Color::DarkGray);
        let mut lines = vec![
            Line::from(Span::styled(format!(" model: {}", self.model), dim)),
            Line::from(Span::styled(format!(" key source: {}", self.policy), dim)),
        ];
        if !self.view.credential_editable {
            lines.push(Line::from(Span::styled(
                " API key loaded from the environment",
                dim,
            )));
        }
        Paragraph::new(lines).render(area, buf);
    }
}

impl<'a> Widget for SidebarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sections = self.sections(area);

        if let Some(field) = sections.credential {
            self.render_credential(field, buf);
        }
        if let Some(confirm) = sections.confirm {
            self.render_button(confirm, buf, "Confirm key", Focus::Confirm, true);
        }
        self.render_categories(sections.categories, buf);
        self.render_button(
            sections.search,
            buf,
            "Search listings",
            Focus::Search,
            self.view.trigger_enabled,
        );
        self.render_info(sections.info, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(ready: bool, editable: bool) -> SessionView {
        SessionView {
            state: "Ready",
            credential_editable: editable,
            selector_enabled: ready,
            trigger_enabled: ready,
            selected: JobCategory::SchoolBusDriver,
            placeholder: None,
            result: None,
            caption: None,
        }
    }

    fn rendered(widget: SidebarWidget<'_>, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect::<String>()
    }

    #[test]
    fn test_credential_is_masked() {
        let mut state = FormState::new();
        for c in "AIzaSecret".chars() {
            state.insert_char(c);
        }
        let view = view(false, true);
        let area = Rect::new(0, 0, 40, 20);
        let content = rendered(
            SidebarWidget::new(&state, &view, CredentialPolicy::ExplicitConfirm, "m"),
            area,
        );

        assert!(!content.contains("AIzaSecret"));
        assert!(content.contains(&"•".repeat(10)));
        assert!(content.contains("Confirm key"));
    }

    #[test]
    fn test_process_scoped_hides_credential_field() {
        let state = FormState::new();
        let view = view(true, false);
        let area = Rect::new(0, 0, 40, 20);
        let content = rendered(
            SidebarWidget::new(&state, &view, CredentialPolicy::ProcessScoped, "m"),
            area,
        );

        assert!(!content.contains("Gemini API key"));
        assert!(!content.contains("Confirm key"));
        assert!(content.contains("(•) School Bus Driver"));
        assert!(content.contains("environment"));
    }

    #[test]
    fn test_cursor_follows_draft() {
        let mut state = FormState::new();
        state.insert_char('a');
        state.insert_char('b');
        let view = view(false, true);
        let widget = SidebarWidget::new(&state, &view, CredentialPolicy::Memoized, "m");
        assert_eq!(
            widget.cursor_position(Rect::new(0, 0, 40, 20)),
            Some(Position::new(3, 1))
        );

        state.focus = Focus::Search;
        let widget = SidebarWidget::new(&state, &view, CredentialPolicy::Memoized, "m");
        assert_eq!(widget.cursor_position(Rect::new(0, 0, 40, 20)), None);
    }
}
