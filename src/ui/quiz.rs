use ratatui::{
    prelude::*,
    widgets::{Block, Padding, Paragraph, Wrap},
};

use super::{ChoiceList, Theme};

const HELP: &str = "↑/k up • ↓/j down • ←/→ page • enter submit • r retry • q quit";

pub fn render(frame: &mut Frame, area: Rect, list: &ChoiceList, theme: &Theme, status: Option<Line<'_>>) {
    let title_width = area.width.saturating_sub(theme.title_indent);
    let title_height = wrapped_height(list.title(), title_width);
    let items_height = list.visible().count() as u16;

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(title_height),
        Constraint::Length(items_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    if list.is_empty() {
        if let Some(status) = status {
            render_status(frame, chunks[1], status, theme);
        }
        render_help(frame, chunks[6], theme);
        return;
    }

    render_title(frame, chunks[1], list.title(), theme);
    render_items(frame, chunks[2], list, theme);
    render_pagination(frame, chunks[3], list, theme);
    if let Some(status) = status {
        render_status(frame, chunks[4], status, theme);
    }
    render_help(frame, chunks[6], theme);
}

fn render_title(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let widget = Paragraph::new(title.to_string())
        .style(theme.title)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::left(theme.title_indent)));
    frame.render_widget(widget, area);
}

/// Rows `text` occupies when word-wrapped to `width` columns.
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines()
        .map(|line| {
            let mut rows = 1;
            let mut used = 0;
            for word in line.split_whitespace() {
                let len = word.chars().count();
                if used > 0 && used + 1 + len <= width {
                    used += 1 + len;
                    continue;
                }
                if used > 0 {
                    rows += 1;
                }
                let spans = len.div_ceil(width).max(1);
                rows += spans - 1;
                used = len - (spans - 1) * width;
            }
            rows
        })
        .sum();

    u16::try_from(rows).unwrap_or(u16::MAX).max(1)
}

fn render_items(frame: &mut Frame, area: Rect, list: &ChoiceList, theme: &Theme) {
    let lines: Vec<Line> = list
        .visible()
        .map(|(index, item)| {
            let text = format!("{}. {}", index + 1, item);
            if list.highlighted() == Some(index) {
                let indent = " ".repeat(theme.selected_indent as usize);
                Line::from(Span::styled(format!("{}> {}", indent, text), theme.selected_item))
            } else {
                let indent = " ".repeat(theme.item_indent as usize);
                Line::from(Span::styled(format!("{}{}", indent, text), theme.item))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_pagination(frame: &mut Frame, area: Rect, list: &ChoiceList, theme: &Theme) {
    let pages = list.page_count();
    if pages < 2 {
        return;
    }

    let dots: String = (0..pages)
        .map(|page| if page == list.page() { '•' } else { '○' })
        .collect();
    let widget = Paragraph::new(dots)
        .style(theme.pagination)
        .block(Block::default().padding(Padding::left(theme.item_indent)));
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, status: Line<'_>, theme: &Theme) {
    let widget = Paragraph::new(status)
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::left(theme.item_indent)));
    frame.render_widget(widget, area);
}

fn render_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let widget = Paragraph::new(HELP)
        .style(theme.help)
        .block(Block::default().padding(Padding::left(theme.item_indent)));
    frame.render_widget(widget, area);
}
