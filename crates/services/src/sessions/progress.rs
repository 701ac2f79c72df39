/// Aggregated view of one answer track's progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}
