use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::Theme;

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, status: Option<Line<'_>>) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled("TRIVIA QUIZ", theme.game_over)),
        Line::from(""),
        Line::from(Span::styled("Press 's' To Start Quiz", theme.status)),
        Line::from(""),
    ];
    if let Some(status) = status {
        content.push(status);
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.help),
    );

    frame.render_widget(widget, chunks[1]);
}
