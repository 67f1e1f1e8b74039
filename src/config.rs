//! Runtime configuration for a quiz session.

pub const DEFAULT_ENDPOINT: &str = "https://opentdb.com/api.php";
pub const DEFAULT_AMOUNT: u8 = 50;
pub const DEFAULT_CATEGORY: u32 = 11;

/// Where questions come from and how many to ask for per batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub amount: u8,
    pub category: u32,
}

impl Config {
    /// Full request URL for one batch.
    pub fn batch_url(&self) -> String {
        format!(
            "{}?amount={}&category={}",
            self.endpoint.trim_end_matches('/'),
            self.amount,
            self.category
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            amount: DEFAULT_AMOUNT,
            category: DEFAULT_CATEGORY,
        }
    }
}
