//! Status Line Component
//!
//! Displays mode indicator, the notification field and the help bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::input::InputMode;

/// Message type for status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Warning,
    Error,
}

impl MessageType {
    /// Classify a notification by its tag.
    pub fn of(notification: &str) -> Self {
        if notification.starts_with("[ERROR]") {
            Self::Error
        } else if notification.starts_with("[WARNING]") {
            Self::Warning
        } else {
            Self::Info
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Status line widget
pub struct StatusLine<'a> {
    mode: InputMode,
    command_buffer: Option<&'a str>,
    message: Option<&'a str>,
    account_count: Option<usize>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            command_buffer: None,
            message: None,
            account_count: None,
        }
    }

    pub fn command_buffer(mut self, buffer: &'a str) -> Self {
        self.command_buffer = Some(buffer);
        self
    }

    pub fn message(mut self, msg: &'a str) -> Self {
        self.message = Some(msg);
        self
    }

    pub fn account_count(mut self, count: usize) -> Self {
        self.account_count = Some(count);
        self
    }
}

impl<'a> Widget for StatusLine<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mut x = area.x;

        let mode_style = match self.mode {
            InputMode::Normal => Style::default().fg(Color::Black).bg(Color::Blue),
            InputMode::Insert(_) => Style::default().fg(Color::Black).bg(Color::Green),
            InputMode::Command => Style::default().fg(Color::Black).bg(Color::Red),
        };

        let mode_text = format!(" {} ", self.mode.indicator());
        buf.set_string(x, area.y, &mode_text, mode_style.add_modifier(Modifier::BOLD));
        x += mode_text.len() as u16 + 1;

        if let Some(buffer) = self.command_buffer {
            let cmd_text = format!(":{}", buffer);
            buf.set_string(x, area.y, &cmd_text, Style::default().fg(Color::White).bg(Color::DarkGray));
        } else if let Some(msg) = self.message.filter(|m| !m.is_empty()) {
            let color = MessageType::of(msg).color();
            buf.set_string(x, area.y, msg, Style::default().fg(color).bg(Color::DarkGray));
        }

        if let Some(count) = self.account_count {
            let right_text = format!("{} accounts", count);
            let right_x = area.x + area.width.saturating_sub(right_text.len() as u16 + 1);
            buf.set_string(right_x, area.y, &right_text, Style::default().fg(Color::Gray).bg(Color::DarkGray));
        }
    }
}

/// Help bar widget
pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> HelpBar<'a> {
    pub fn for_mode(mode: InputMode) -> Self {
        let hints = match mode {
            InputMode::Normal => vec![
                ("j/k", "navigate"),
                ("Enter", "select"),
                ("f", "fetch"),
                ("w", "save"),
                ("dd", "delete"),
                ("c", "clear"),
                ("i/y/p+s/u/p", "edit/copy/paste"),
                ("r", "reveal"),
                ("q", "quit"),
            ],
            InputMode::Insert(_) => vec![
                ("Esc", "cancel"),
                ("Enter", "confirm"),
                ("C-u", "clear"),
            ],
            InputMode::Command => vec![
                ("Esc", "cancel"),
                ("Enter", "execute"),
            ],
        };
        Self { hints }
    }
}

impl<'a> Widget for HelpBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
        }
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
