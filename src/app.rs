use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::choices::{build_choices, decode_text};
use crate::data::FetchError;
use crate::models::{Phase, QuestionBatch};
use crate::ui::{ChoiceList, Navigation};

pub const LIST_HEIGHT: usize = 14;

/// Input to the session state machine.
#[derive(Debug)]
pub enum Event {
    Start,
    Confirm,
    Retry,
    Quit,
    Navigate(Navigation),
    /// The terminal changed size; only a redraw is needed.
    Resize,
    BatchFetched(Result<QuestionBatch, FetchError>),
}

/// Work the session asks the runtime to do on its behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FetchBatch,
}

pub struct App {
    phase: Phase,
    batch: QuestionBatch,
    cursor: usize,
    total_asked: usize,
    score: usize,
    pending_answer: Option<String>,
    fetch_in_flight: bool,
    notice: Option<String>,
    choices: ChoiceList,
    rng: StdRng,
}

impl App {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Session whose answer order is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            phase: Phase::NotStarted,
            batch: QuestionBatch::default(),
            cursor: 0,
            total_asked: 0,
            score: 0,
            pending_answer: None,
            fetch_in_flight: false,
            notice: None,
            choices: ChoiceList::new(LIST_HEIGHT),
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total_asked(&self) -> usize {
        self.total_asked
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn batch(&self) -> &QuestionBatch {
        &self.batch
    }

    pub fn pending_answer(&self) -> Option<&str> {
        self.pending_answer.as_deref()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch_in_flight
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn choices(&self) -> &ChoiceList {
        &self.choices
    }

    pub fn has_question(&self) -> bool {
        self.pending_answer.is_some()
    }

    /// Apply one event. Returns the command the runtime should run, if any.
    pub fn handle(&mut self, event: Event) -> Option<Command> {
        if self.phase == Phase::Ended {
            return None;
        }

        match event {
            Event::Start => self.start(),
            Event::Confirm => self.confirm(),
            Event::Retry => self.retry(),
            Event::Quit => {
                self.quit();
                None
            }
            Event::Navigate(navigation) => {
                if self.has_question() {
                    self.choices.navigate(navigation);
                }
                None
            }
            Event::Resize => None,
            Event::BatchFetched(result) => {
                self.install_batch(result);
                None
            }
        }
    }

    fn start(&mut self) -> Option<Command> {
        if self.phase != Phase::NotStarted {
            return None;
        }
        self.request_batch()
    }

    fn retry(&mut self) -> Option<Command> {
        if self.has_question() || (self.phase != Phase::Active && self.notice.is_none()) {
            return None;
        }
        self.request_batch()
    }

    fn request_batch(&mut self) -> Option<Command> {
        if self.fetch_in_flight {
            return None;
        }
        self.fetch_in_flight = true;
        tracing::info!(asked = self.total_asked, score = self.score, "requesting question batch");
        Some(Command::FetchBatch)
    }

    fn install_batch(&mut self, result: Result<QuestionBatch, FetchError>) {
        self.fetch_in_flight = false;

        let batch = match result {
            Ok(batch) => batch,
            Err(err) => {
                tracing::warn!(error = %err, "question batch fetch failed");
                self.notice = Some(err.to_string());
                return;
            }
        };

        if let Some(message) = batch.status_message() {
            tracing::warn!(code = batch.response_code, "trivia API reported an error");
            self.notice = Some(message);
            return;
        }

        if batch.is_empty() {
            tracing::debug!("received an empty question batch");
            return;
        }

        tracing::info!(questions = batch.len(), "installed question batch");
        self.batch = batch;
        self.cursor = 0;
        self.notice = None;
        self.phase = Phase::Active;
        self.build_question(0);
    }

    fn confirm(&mut self) -> Option<Command> {
        if self.phase != Phase::Active {
            return None;
        }
        let pending = self.pending_answer.take()?;

        if self.choices.current_selection() == Some(pending.as_str()) {
            self.score += 1;
        }

        if self.cursor < self.batch.len() {
            self.build_question(self.cursor);
            None
        } else {
            self.cursor = 0;
            self.choices.clear();
            self.request_batch()
        }
    }

    fn quit(&mut self) {
        tracing::info!(score = self.score, asked = self.total_asked, "session ended");
        self.phase = Phase::Ended;
        self.pending_answer = None;
        self.choices.clear();
    }

    fn build_question(&mut self, index: usize) {
        let Some(record) = self.batch.get(index) else {
            return;
        };

        let answer = decode_text(&record.correct_answer);
        let items = build_choices(record, &mut self.rng);
        self.total_asked += 1;
        let title = format!(
            "Question #{} - Score:{}\n{}",
            self.total_asked,
            self.score,
            decode_text(&record.question)
        );

        self.pending_answer = Some(answer);
        self.choices.render(title, items);
        self.cursor = index + 1;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
