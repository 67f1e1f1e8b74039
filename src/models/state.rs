/// Coarse phase of a quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the start key, or for the first batch to arrive.
    #[default]
    NotStarted,
    /// Questions are being asked.
    Active,
    /// The player quit; score is frozen.
    Ended,
}
