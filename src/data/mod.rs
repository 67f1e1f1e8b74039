mod fetcher;

pub use fetcher::{decode_batch, FetchError, QuestionFetcher};
