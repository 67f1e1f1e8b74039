use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph},
};

use super::Theme;

pub fn render(frame: &mut Frame, area: Rect, score: usize, asked: usize, theme: &Theme) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .margin(1)
    .split(area);

    let content = vec![
        Line::from(Span::styled(
            format!("Game Over! Your score is: {}", score),
            theme.game_over,
        )),
        Line::from(Span::styled(
            format!("{} questions asked", asked),
            theme.help,
        )),
    ];

    let widget = Paragraph::new(content).block(Block::default().padding(Padding::left(3)));
    frame.render_widget(widget, chunks[1]);
}
