//! Status bar widget: session state indicator + latest notice or key hints

use crate::tui::state::{Focus, FormState};
use jobscout_application::SessionView;
use jobscout_domain::NoticeLevel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a FormState,
    view: &'a SessionView,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a FormState, view: &'a SessionView) -> Self {
        Self { state, view }
    }

    fn indicator(&self) -> (&'static str, Color) {
        if self.state.searching {
            return ("SEARCHING", Color::Yellow);
        }
        match self.view.state {
            "NoCredential" => ("NO KEY", Color::Red),
            "ResultShown" => ("RESULT", Color::Green),
            _ => ("READY", Color::Blue),
        }
    }

    fn hints(&self) -> &'static str {
        match self.state.focus {
            Focus::Credential => "type key  Tab:next  Enter:commit  Ctrl+U:clear  Esc:quit",
            Focus::Category => "↑/↓:category  Enter:next  Tab:next  ?:help  q:quit",
            _ => "Enter:activate  Tab:next  j/k:scroll  ?:help  q:quit",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let (label, color) = self.indicator();
        let indicator_style = Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD);
        let indicator = Line::from(Span::styled(format!(" {} ", label), indicator_style));
        let indicator_width = label.len() as u16 + 2;
        buf.set_line(area.x, area.y, &indicator, indicator_width);

        // Notice or key hints after the indicator
        let (text, style) = match &self.state.notice {
            Some((notice, _)) => {
                let fg = match notice.level {
                    NoticeLevel::Info => Color::White,
                    NoticeLevel::Success => Color::LightGreen,
                    NoticeLevel::Warning => Color::LightYellow,
                    NoticeLevel::Error => Color::LightRed,
                };
                (notice.message.clone(), Style::default().fg(fg).bg(Color::DarkGray))
            }
            None => (self.hints().to_string(), bg_style),
        };

        let text_x = area.x + indicator_width + 1;
        if text_x < area.right() {
            let line = Line::from(Span::styled(text, style));
            buf.set_line(text_x, area.y, &line, area.right() - text_x);
        }
    }
}
