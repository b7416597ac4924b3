//! Help overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct HelpWidget;

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Everywhere:"),
            Line::from("  Tab/Shift+Tab  Move focus"),
            Line::from("  Enter          Activate the focused control"),
            Line::from("  PgUp/PgDn      Scroll the result"),
            Line::from("  Esc, Ctrl+C    Quit"),
            Line::from(""),
            Line::from("API key field:"),
            Line::from("  Enter          Commit the key (memoized) or go to Confirm"),
            Line::from("  Ctrl+U         Clear the field"),
            Line::from(""),
            Line::from("Outside the field:"),
            Line::from("  ↑/↓, k/j       Change category (category list)"),
            Line::from("  k/j            Scroll the result"),
            Line::from("  ?              Toggle this help"),
            Line::from("  q              Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "Press ? or Esc to close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(Color::Cyan));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
