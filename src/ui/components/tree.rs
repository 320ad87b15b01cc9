//! Tree View Component
//!
//! Displays services with their usernames indented beneath them.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::state::Selection;
use crate::ui::renderer::Renderer;

#[derive(Debug, Clone, Default)]
pub struct TreeViewState {
    pub selected: Option<usize>,
    pub total: usize,
    list_state: ListState,
}

impl TreeViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
        self.list_state.select(index);
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.select(compute_selection_after_total_change(self.selected, total));
    }

    pub fn move_up(&mut self) {
        if self.total == 0 {
            return;
        }
        let new_index = self.selected.unwrap_or(0).saturating_sub(1);
        self.select(Some(new_index));
    }

    pub fn move_down(&mut self) {
        if self.total == 0 {
            return;
        }
        let new_index = self.selected.map_or(0, |i| (i + 1).min(self.total - 1));
        self.select(Some(new_index));
    }

    pub fn move_to_top(&mut self) {
        if self.total > 0 {
            self.select(Some(0));
        }
    }

    pub fn move_to_bottom(&mut self) {
        if self.total > 0 {
            self.select(Some(self.total - 1));
        }
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}

fn compute_selection_after_total_change(selected: Option<usize>, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    match selected {
        Some(sel) if sel >= total => Some(total - 1),
        Some(sel) => Some(sel),
        None => Some(0),
    }
}

pub struct AccountTree<'a> {
    rows: &'a [Selection],
    block: Option<Block<'a>>,
    highlight_style: Style,
}

impl<'a> AccountTree<'a> {
    pub fn new(rows: &'a [Selection]) -> Self {
        Self {
            rows,
            block: None,
            highlight_style: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

fn build_row_spans(row: &Selection, base_style: Style) -> Vec<Span<'_>> {
    match row {
        Selection::Service(service) => vec![
            Span::styled("▾ ", base_style.fg(Color::Magenta)),
            Span::styled(service.as_str(), base_style.fg(Color::White).add_modifier(Modifier::BOLD)),
        ],
        Selection::Username { username, .. } => vec![
            Span::styled("   • ", base_style.fg(Renderer::hex_color(0x4C566A))),
            Span::styled(username.as_str(), base_style.fg(Color::Gray)),
        ],
    }
}

fn build_list_item<'a>(
    row: &'a Selection,
    index: usize,
    selected: Option<usize>,
    highlight_style: Style,
) -> ListItem<'a> {
    let is_selected = Some(index) == selected;
    let base_style = if is_selected { highlight_style } else { Style::default() };
    let mut item = ListItem::new(Line::from(build_row_spans(row, base_style)));

    if is_selected {
        item = item.style(highlight_style);
    }
    item
}

impl<'a> StatefulWidget for AccountTree<'a> {
    type State = TreeViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let selected = state.selected();

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| build_list_item(row, i, selected, self.highlight_style))
            .collect();

        let list = List::new(items);
        let list = match self.block {
            Some(block) => list.block(block),
            None => list,
        };

        StatefulWidget::render(list, area, buf, state.list_state_mut());
    }
}

pub struct EmptyState<'a> {
    message: &'a str,
    hint: Option<&'a str>,
}

impl<'a> EmptyState<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message, hint: None }
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }
}

fn center_x(area: &Rect, text_len: usize) -> u16 {
    area.x + (area.width.saturating_sub(text_len as u16)) / 2
}

impl<'a> Widget for EmptyState<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let center_y = area.y + area.height / 2;
        let msg_x = center_x(&area, self.message.len());
        buf.set_string(msg_x, center_y, self.message, Style::default().fg(Color::DarkGray));

        let Some(hint) = self.hint else { return };
        if center_y + 1 >= area.y + area.height {
            return;
        }
        let hint_x = center_x(&area, hint.len());
        let style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC);
        buf.set_string(hint_x, center_y + 1, hint, style);
    }
}
