use serde::Deserialize;

/// Kind of question as reported by the trivia API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Multiple,
    Boolean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One trivia question. Text fields are HTML-entity-encoded as received.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub difficulty: Difficulty,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

/// One fetched set of questions plus the API's response code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestionBatch {
    pub response_code: u8,
    pub results: Vec<QuestionRecord>,
}

impl QuestionBatch {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.results.get(index)
    }

    /// User-facing explanation of a non-zero response code.
    ///
    /// Returns `None` for a successful response.
    pub fn status_message(&self) -> Option<String> {
        let message = match self.response_code {
            0 => return None,
            1 => "Not enough questions available for this category".to_string(),
            2 => "The trivia API rejected the request parameters".to_string(),
            3 => "Session token not found".to_string(),
            4 => "Session token has returned every available question".to_string(),
            5 => "Too many requests, wait a few seconds and retry".to_string(),
            code => format!("Trivia API returned response code {}", code),
        };
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_api_field_names() {
        let json = r#"{
            "response_code": 0,
            "results": [{
                "category": "Entertainment: Film",
                "type": "boolean",
                "difficulty": "easy",
                "question": "Is &quot;Jaws&quot; a film?",
                "correct_answer": "True",
                "incorrect_answers": ["False"]
            }]
        }"#;

        let batch: QuestionBatch = serde_json::from_str(json).unwrap();
        assert_eq!(batch.len(), 1);

        let record = batch.get(0).unwrap();
        assert_eq!(record.kind, QuestionKind::Boolean);
        assert_eq!(record.difficulty, Difficulty::Easy);
        // Decoding happens later, at question-build time.
        assert_eq!(record.question, "Is &quot;Jaws&quot; a film?");
    }

    #[test]
    fn test_status_message() {
        let ok = QuestionBatch::default();
        assert!(ok.status_message().is_none());

        let rate_limited = QuestionBatch {
            response_code: 5,
            results: Vec::new(),
        };
        assert!(rate_limited.status_message().unwrap().contains("Too many requests"));

        let unknown = QuestionBatch {
            response_code: 42,
            results: Vec::new(),
        };
        assert_eq!(
            unknown.status_message().as_deref(),
            Some("Trivia API returned response code 42")
        );
    }
}
