//! Display order of a question's answers.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::QuestionRecord;

/// Decode HTML entities in text received from the trivia API.
pub fn decode_text(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Decoded answers of `record` in a uniformly random order.
///
/// The incorrect answers come first and the correct one last before the
/// shuffle, so nothing about its final position follows from input order.
pub fn build_choices<R: Rng + ?Sized>(record: &QuestionRecord, rng: &mut R) -> Vec<String> {
    let mut choices: Vec<String> = record
        .incorrect_answers
        .iter()
        .chain(std::iter::once(&record.correct_answer))
        .map(|answer| decode_text(answer))
        .collect();

    choices.shuffle(rng);
    choices
}
