//! Account Fields Component
//!
//! Service, username and password as labeled rows. The row being edited
//! shows the edit buffer and a cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::state::Field;

const LABEL_WIDTH: usize = 10;
const MASK: char = '*';

/// Buffer of the field currently in Insert mode
#[derive(Debug, Clone, Copy)]
pub struct FieldEdit<'a> {
    pub field: Field,
    pub buffer: &'a str,
    pub cursor: usize,
}

pub struct AccountView<'a> {
    service: &'a str,
    username: &'a str,
    password: &'a str,
    password_visible: bool,
    edit: Option<FieldEdit<'a>>,
    block: Option<Block<'a>>,
}

impl<'a> AccountView<'a> {
    pub fn new(service: &'a str, username: &'a str, password: &'a str) -> Self {
        Self {
            service,
            username,
            password,
            password_visible: false,
            edit: None,
            block: None,
        }
    }

    pub fn password_visible(mut self, visible: bool) -> Self {
        self.password_visible = visible;
        self
    }

    pub fn edit(mut self, edit: Option<FieldEdit<'a>>) -> Self {
        self.edit = edit;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn value(&self, field: Field) -> &'a str {
        match field {
            Field::Service => self.service,
            Field::Username => self.username,
            Field::Password => self.password,
        }
    }

    fn display(&self, field: Field, text: &str) -> String {
        if field == Field::Password && !self.password_visible {
            std::iter::repeat(MASK).take(text.chars().count()).collect()
        } else {
            text.to_string()
        }
    }

    fn build_line(&self, field: Field) -> Line<'static> {
        let label = Span::styled(
            format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH),
            Style::default().fg(Color::Magenta),
        );

        let Some(edit) = self.edit.filter(|e| e.field == field) else {
            let value = self.display(field, self.value(field));
            return Line::from(vec![label, Span::styled(value, Style::default().fg(Color::White))]);
        };

        let shown = self.display(field, edit.buffer);
        let (before, rest): (String, String) = {
            let split = shown.char_indices().nth(edit.cursor).map_or(shown.len(), |(i, _)| i);
            (shown[..split].to_string(), shown[split..].to_string())
        };
        let mut rest = rest.chars();
        let at_cursor = rest.next().map_or_else(|| " ".to_string(), |c| c.to_string());
        let after: String = rest.collect();

        let text_style = Style::default().fg(Color::White).bg(Color::DarkGray);
        Line::from(vec![
            label,
            Span::styled(before, text_style),
            Span::styled(at_cursor, text_style.add_modifier(Modifier::REVERSED)),
            Span::styled(after, text_style),
        ])
    }
}

impl<'a> Widget for AccountView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = Field::ALL.iter().map(|f| self.build_line(*f)).collect();
        let mut paragraph = Paragraph::new(lines);
        if let Some(block) = self.block.clone() {
            paragraph = paragraph.block(block);
        }
        paragraph.render(area, buf);
    }
}
