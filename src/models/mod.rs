mod question;
mod state;

pub use question::{Difficulty, QuestionBatch, QuestionKind, QuestionRecord};
pub use state::Phase;
