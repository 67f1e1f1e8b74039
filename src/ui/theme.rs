use ratatui::prelude::*;

/// Styles for every screen, built once at startup.
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub title_indent: u16,
    pub item: Style,
    pub item_indent: u16,
    pub selected_item: Style,
    pub selected_indent: u16,
    pub pagination: Style,
    pub help: Style,
    pub notice: Style,
    pub status: Style,
    pub game_over: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default().fg(Color::White).bold(),
            title_indent: 2,
            item: Style::default().fg(Color::Gray),
            item_indent: 4,
            selected_item: Style::default().fg(Color::Indexed(170)),
            selected_indent: 2,
            pagination: Style::default().fg(Color::DarkGray),
            help: Style::default().fg(Color::DarkGray),
            notice: Style::default().fg(Color::Red).bold(),
            status: Style::default().fg(Color::Yellow),
            game_over: Style::default().fg(Color::Cyan).bold(),
        }
    }
}
