//! # trivia-quiz
//!
//! A terminal trivia game backed by the Open Trivia Database.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia_quiz::{Config, Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let score = Quiz::new(Config::default()).run().await?;
//!     println!("Final score: {}", score);
//!     Ok(())
//! }
//! ```

mod app;
mod choices;
pub mod config;
mod data;
pub mod logging;
mod models;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{Event as TermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use thiserror::Error;
use tokio::sync::mpsc;

pub use app::{App, Command, Event};
pub use choices::{build_choices, decode_text};
pub use config::Config;
pub use data::{decode_batch, FetchError, QuestionFetcher};
pub use models::{Difficulty, Phase, QuestionBatch, QuestionKind, QuestionRecord};
pub use ui::{ChoiceList, Navigation, Theme};

/// Errors that end the program.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("failed to set up logging: {0}")]
    Logging(String),
}

/// A quiz session bound to one question source.
pub struct Quiz {
    app: App,
    config: Config,
    theme: Theme,
}

impl Quiz {
    pub fn new(config: Config) -> Self {
        Self {
            app: App::new(),
            config,
            theme: Theme::default(),
        }
    }

    /// Run the quiz in the terminal and return the final score.
    ///
    /// This takes over the terminal until the player quits.
    pub async fn run(mut self) -> Result<usize, QuizError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let fetcher = QuestionFetcher::new(client, self.config.batch_url());

        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app, &fetcher, &self.theme).await;
        settle(result, terminal::restore())?;

        Ok(self.app.score())
    }

    pub fn app(&self) -> &App {
        &self.app
    }
}

/// Combine the event loop outcome with terminal teardown.
///
/// A loop error wins over a failed restore.
fn settle(result: Result<(), QuizError>, restored: io::Result<()>) -> Result<(), QuizError> {
    if let (Err(_), Err(restore_err)) = (&result, &restored) {
        tracing::warn!(error = %restore_err, "failed to restore terminal after loop error");
    }
    result?;
    restored?;
    Ok(())
}

async fn run_event_loop(
    terminal: &mut terminal::QuizTerminal,
    app: &mut App,
    fetcher: &QuestionFetcher,
    theme: &Theme,
) -> Result<(), QuizError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Event>();
    let input_task = tokio::spawn(forward_input(tx.clone()));

    let result = loop {
        if let Err(err) = terminal.draw(|frame| ui::render(frame, app, theme)) {
            break Err(err.into());
        }
        if app.phase() == Phase::Ended {
            break Ok(());
        }

        let Some(event) = rx.recv().await else {
            break Ok(());
        };
        if let Some(command) = app.handle(event) {
            dispatch(command, fetcher, &tx);
        }
    };

    input_task.abort();
    result
}

fn dispatch(command: Command, fetcher: &QuestionFetcher, tx: &mpsc::UnboundedSender<Event>) {
    match command {
        Command::FetchBatch => {
            let fetcher = fetcher.clone();
            let tx = tx.clone();
            tracing::debug!(url = fetcher.url(), "spawning batch fetch");
            tokio::spawn(async move {
                let result = fetcher.fetch().await;
                let _ = tx.send(Event::BatchFetched(result));
            });
        }
    }
}

/// Feed terminal input into the event queue until the stream ends.
async fn forward_input(tx: mpsc::UnboundedSender<Event>) {
    let mut events = EventStream::new();

    while let Some(next) = events.next().await {
        let event = match next {
            Ok(TermEvent::Key(key)) if key.kind == KeyEventKind::Press => map_key(key),
            Ok(TermEvent::Resize(width, height)) => {
                tracing::debug!(width, height, "terminal resized");
                Some(Event::Resize)
            }
            Ok(_) => None,
            Err(err) => {
                tracing::error!(error = %err, "failed to read terminal input");
                Some(Event::Quit)
            }
        };

        if let Some(event) = event {
            if tx.send(event).is_err() {
                return;
            }
        }
    }

    let _ = tx.send(Event::Quit);
}

/// Translate a key press into a session event.
fn map_key(key: KeyEvent) -> Option<Event> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Event::Quit);
    }

    let event = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Event::Quit,
        KeyCode::Char('s') => Event::Start,
        KeyCode::Char('r') => Event::Retry,
        KeyCode::Enter | KeyCode::Char(' ') => Event::Confirm,
        KeyCode::Up | KeyCode::Char('k') => Event::Navigate(Navigation::Up),
        KeyCode::Down | KeyCode::Char('j') => Event::Navigate(Navigation::Down),
        KeyCode::PageUp | KeyCode::Left | KeyCode::Char('h') => Event::Navigate(Navigation::PageUp),
        KeyCode::PageDown | KeyCode::Right | KeyCode::Char('l') => {
            Event::Navigate(Navigation::PageDown)
        }
        KeyCode::Home | KeyCode::Char('g') => Event::Navigate(Navigation::First),
        KeyCode::End | KeyCode::Char('G') => Event::Navigate(Navigation::Last),
        _ => return None,
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Option<Event> {
        map_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_session_keys() {
        assert!(matches!(press(KeyCode::Char('s')), Some(Event::Start)));
        assert!(matches!(press(KeyCode::Enter), Some(Event::Confirm)));
        assert!(matches!(press(KeyCode::Char('r')), Some(Event::Retry)));
        assert!(matches!(press(KeyCode::Char('q')), Some(Event::Quit)));
        assert!(matches!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Event::Quit)
        ));
    }

    #[test]
    fn test_navigation_keys() {
        assert!(matches!(
            press(KeyCode::Char('j')),
            Some(Event::Navigate(Navigation::Down))
        ));
        assert!(matches!(
            press(KeyCode::PageUp),
            Some(Event::Navigate(Navigation::PageUp))
        ));
        assert!(matches!(
            press(KeyCode::End),
            Some(Event::Navigate(Navigation::Last))
        ));
    }

    #[test]
    fn test_loop_error_wins_over_restore_error() {
        let err = settle(
            Err(QuizError::Io(io::Error::other("draw failed"))),
            Err(io::Error::other("restore failed")),
        )
        .unwrap_err();
        assert!(err.to_string().contains("draw failed"));

        let err = settle(Ok(()), Err(io::Error::other("restore failed"))).unwrap_err();
        assert!(err.to_string().contains("restore failed"));

        assert!(settle(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert!(press(KeyCode::Char('x')).is_none());
        assert!(press(KeyCode::Tab).is_none());
        assert!(map_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)).is_none());
    }
}
