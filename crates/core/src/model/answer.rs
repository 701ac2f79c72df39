use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::model::question::QuestionText;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur when building a score.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("score {0} is outside the 1-5 range")]
    OutOfRange(i64),

    #[error("score input is not an integer: {0:?}")]
    NotNumeric(String),
}

//
// ─── SCORE ────────────────────────────────────────────────────────────────────
//

/// Agreement rating on the 1-5 scale used for every questionnaire answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    /// Lowest recordable score.
    pub const MIN: u8 = 1;
    /// Highest recordable score.
    pub const MAX: u8 = 5;

    /// Converts a numeric value to a `Score`.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` if the value is not in the range 1-5.
    pub fn from_u8(value: u8) -> Result<Self, ScoreError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoreError::OutOfRange(i64::from(value)))
        }
    }

    /// Parse raw view input as a score.
    ///
    /// The input is trimmed and must parse as an integer in the range 1-5.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::NotNumeric` when the input does not parse as an
    /// integer, and `ScoreError::OutOfRange` when it parses outside 1-5.
    pub fn parse(raw: &str) -> Result<Self, ScoreError> {
        let trimmed = raw.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ScoreError::NotNumeric(trimmed.to_string()))?;
        let value = u8::try_from(value).map_err(|_| ScoreError::OutOfRange(value))?;
        Self::from_u8(value)
    }

    /// Returns the underlying 1-5 value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── ANSWER ROLE ──────────────────────────────────────────────────────────────
//

/// Which answer track a score belongs to.
///
/// The creator and respondent tracks are structurally identical; one
/// `AnswerSet` type serves both, indexed by this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerRole {
    /// The person who assembled the questionnaire.
    Creator,
    /// The person answering the shared questionnaire.
    Respondent,
}

impl fmt::Display for AnswerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AnswerRole::Creator => "creator",
            AnswerRole::Respondent => "respondent",
        })
    }
}

//
// ─── ANSWER SET ───────────────────────────────────────────────────────────────
//

/// One role's answers, keyed by question text.
///
/// Keys appear lazily as answers are recorded; a question with no answer yet
/// is absent from the map, not stored as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    scores: HashMap<QuestionText, Score>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            scores: HashMap::new(),
        }
    }

    /// Record a score, overwriting any prior value for the question.
    pub fn record(&mut self, question: QuestionText, score: Score) {
        self.scores.insert(question, score);
    }

    #[must_use]
    pub fn get(&self, question: &QuestionText) -> Option<Score> {
        self.scores.get(question).copied()
    }

    /// Chart value for a question: the recorded score, or 0 when unanswered.
    #[must_use]
    pub fn score_or_zero(&self, question: &QuestionText) -> u8 {
        self.get(question).map_or(0, Score::value)
    }

    /// Number of distinct questions answered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bounds_are_enforced() {
        assert_eq!(Score::from_u8(1).unwrap().value(), 1);
        assert_eq!(Score::from_u8(5).unwrap().value(), 5);
        let err = Score::from_u8(0).unwrap_err();
        assert!(matches!(err, ScoreError::OutOfRange(0)));
        let err = Score::from_u8(6).unwrap_err();
        assert!(matches!(err, ScoreError::OutOfRange(6)));
    }

    #[test]
    fn parse_accepts_integers_in_range() {
        assert_eq!(Score::parse("3").unwrap().value(), 3);
        assert_eq!(Score::parse(" 4 ").unwrap().value(), 4);
    }

    #[test]
    fn parse_rejects_out_of_range_values() {
        assert!(matches!(
            Score::parse("7").unwrap_err(),
            ScoreError::OutOfRange(7)
        ));
        assert!(matches!(
            Score::parse("-1").unwrap_err(),
            ScoreError::OutOfRange(-1)
        ));
    }

    #[test]
    fn parse_rejects_non_numeric_input() {
        assert!(matches!(
            Score::parse("abc").unwrap_err(),
            ScoreError::NotNumeric(_)
        ));
        assert!(matches!(
            Score::parse("4.9").unwrap_err(),
            ScoreError::NotNumeric(_)
        ));
        assert!(matches!(
            Score::parse("").unwrap_err(),
            ScoreError::NotNumeric(_)
        ));
    }

    #[test]
    fn answer_set_records_and_overwrites() {
        let q = QuestionText::new("Q1").unwrap();
        let mut set = AnswerSet::new();
        assert!(set.is_empty());
        assert_eq!(set.get(&q), None);

        set.record(q.clone(), Score::from_u8(3).unwrap());
        assert_eq!(set.get(&q).unwrap().value(), 3);

        set.record(q.clone(), Score::from_u8(5).unwrap());
        assert_eq!(set.get(&q).unwrap().value(), 5);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn unanswered_question_surfaces_as_zero() {
        let q = QuestionText::new("Q1").unwrap();
        let set = AnswerSet::new();
        assert_eq!(set.score_or_zero(&q), 0);
    }
}
