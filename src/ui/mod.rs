mod choices;
mod quiz;
mod result;
mod theme;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::Phase;

pub use choices::{ChoiceList, Navigation};
pub use theme::Theme;

pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.phase() {
        Phase::NotStarted => welcome::render(frame, area, theme, status_line(app, theme)),
        Phase::Active => quiz::render(frame, area, app.choices(), theme, status_line(app, theme)),
        Phase::Ended => result::render(frame, area, app.score(), app.total_asked(), theme),
    }
}

fn status_line(app: &App, theme: &Theme) -> Option<Line<'static>> {
    if app.is_fetching() {
        return Some(Line::from(Span::styled("Fetching questions...", theme.status)));
    }
    if let Some(notice) = app.notice() {
        return Some(Line::from(vec![
            Span::styled(notice.to_string(), theme.notice),
            Span::styled("  (press 'r' to retry)", theme.help),
        ]));
    }
    if app.phase() == Phase::Active && !app.has_question() {
        return Some(Line::from(Span::styled(
            "No questions available, press 'r' to retry",
            theme.status,
        )));
    }
    None
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::app::Event;
    use crate::models::{Difficulty, QuestionBatch, QuestionKind, QuestionRecord};

    fn draw(app: &App) -> String {
        draw_sized(app, 80, 24)
    }

    fn draw_sized(app: &App, width: u16, height: u16) -> String {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app, &theme)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_welcome_screen() {
        let app = App::with_seed(1);
        assert!(draw(&app).contains("Press 's' To Start Quiz"));
    }

    #[test]
    fn test_question_screen_shows_title_and_choices() {
        let mut app = App::with_seed(1);
        app.handle(Event::Start);
        app.handle(Event::BatchFetched(Ok(QuestionBatch {
            response_code: 0,
            results: vec![QuestionRecord {
                category: "Entertainment: Books".to_string(),
                kind: QuestionKind::Multiple,
                difficulty: Difficulty::Easy,
                question: "Who wrote &quot;1984&quot;?".to_string(),
                correct_answer: "George Orwell".to_string(),
                incorrect_answers: vec!["Aldous Huxley".to_string()],
            }],
        })));
        app.handle(Event::Navigate(Navigation::Down));

        let screen = draw(&app);
        assert!(screen.contains("Question #1 - Score:0"));
        assert!(screen.contains("Who wrote \"1984\"?"));
        assert!(screen.contains("George Orwell"));
        assert!(screen.contains("Aldous Huxley"));
        assert!(screen.contains("> 1. "));
    }

    fn long_question_app() -> App {
        let question = format!("{}ENDMARKER", "trivia ".repeat(42));
        assert!(question.len() > 300);

        let mut app = App::with_seed(1);
        app.handle(Event::Start);
        app.handle(Event::BatchFetched(Ok(QuestionBatch {
            response_code: 0,
            results: vec![QuestionRecord {
                category: "General Knowledge".to_string(),
                kind: QuestionKind::Boolean,
                difficulty: Difficulty::Hard,
                question,
                correct_answer: "True".to_string(),
                incorrect_answers: vec!["False".to_string()],
            }],
        })));
        app
    }

    #[test]
    fn test_long_question_is_drawn_in_full() {
        let app = long_question_app();

        let screen = draw_sized(&app, 80, 24);
        assert!(screen.contains("ENDMARKER"));
        assert!(screen.contains("False"));

        let narrow = draw_sized(&app, 40, 24);
        assert!(narrow.contains("ENDMARKER"));
        assert!(narrow.contains("False"));
    }

    #[test]
    fn test_game_over_screen() {
        let mut app = App::with_seed(1);
        app.handle(Event::Quit);
        assert!(draw(&app).contains("Game Over! Your score is: 0"));
    }

    #[test]
    fn test_fetching_status() {
        let mut app = App::with_seed(1);
        app.handle(Event::Start);
        assert!(draw(&app).contains("Fetching questions..."));
    }
}
