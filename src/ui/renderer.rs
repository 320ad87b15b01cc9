//! Renderer
//!
//! Lays out the vault tree, the account pane and the status lines.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};

use super::components::{
    AccountTree, AccountView, EmptyState, FieldEdit, HelpBar, StatusLine, TreeViewState,
};
use crate::input::InputMode;
use crate::state::Selection;

pub struct UiState<'a> {
    pub mode: InputMode,
    pub rows: &'a [Selection],
    pub tree_state: &'a mut TreeViewState,
    pub service: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub password_visible: bool,
    pub edit: Option<FieldEdit<'a>>,
    pub command_buffer: Option<&'a str>,
    pub notification: &'a str,
    pub account_count: usize,
}

pub struct Renderer;

impl Renderer {
    pub fn hex_color(rgb: u32) -> Color {
        Color::Rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    pub fn render(frame: &mut Frame, state: &mut UiState) {
        let size = frame.area();
        let chunks = create_main_layout(size);

        render_content(frame, chunks[0], state);
        render_status_line(frame, chunks[1], state);
        frame.render_widget(HelpBar::for_mode(state.mode), chunks[2]);
    }
}

fn create_main_layout(size: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size)
}

fn render_content(frame: &mut Frame, area: Rect, state: &mut UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_tree(frame, chunks[0], state);
    render_account(frame, chunks[1], state);
}

fn render_tree(frame: &mut Frame, area: Rect, state: &mut UiState) {
    let focused = state.mode == InputMode::Normal;
    let block = create_block(" Vault ", if focused { Color::Magenta } else { Color::DarkGray });

    if state.rows.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(EmptyState::new("No accounts").hint("Fill in the fields and press 'w'"), inner);
        return;
    }

    let tree = AccountTree::new(state.rows).block(block);
    frame.render_stateful_widget(tree, area, state.tree_state);
}

fn render_account(frame: &mut Frame, area: Rect, state: &UiState) {
    let editing = state.edit.is_some();
    let block = create_block(" Account ", if editing { Color::Green } else { Color::DarkGray });

    let height = area.height.min(5);
    let area = Rect { height, ..area };

    let view = AccountView::new(state.service, state.username, state.password)
        .password_visible(state.password_visible)
        .edit(state.edit)
        .block(block);
    frame.render_widget(view, area);
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &UiState) {
    let mut status = StatusLine::new(state.mode).account_count(state.account_count);

    if let Some(buffer) = state.command_buffer {
        status = status.command_buffer(buffer);
    } else {
        status = status.message(state.notification);
    }

    frame.render_widget(status, area);
}

fn create_block(title: &'static str, border_color: Color) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
}
