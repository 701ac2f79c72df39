use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::answer::{AnswerRole, AnswerSet, Score};
use crate::model::ids::SessionId;
use crate::model::question::QuestionText;
use crate::model::share::ShareToken;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors emitted by session state transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("operation requires phase {expected} but session is in {found}")]
    InvalidPhase { expected: Phase, found: Phase },

    #[error("cannot publish a questionnaire with no questions")]
    NoQuestions,

    #[error("question is not part of this questionnaire: {0:?}")]
    UnknownQuestion(String),
}

//
// ─── PHASE ────────────────────────────────────────────────────────────────────
//

/// Lifecycle stage of a questionnaire session.
///
/// Progression is linear and forward-only:
/// `Creating → CreatorAnswering → RespondentAnswering → Results`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The creator is still assembling the question list.
    Creating,
    /// The questionnaire is published; the creator records their own answers.
    CreatorAnswering,
    /// The respondent records their answers.
    RespondentAnswering,
    /// Both tracks are submitted; the comparison report is available.
    Results,
}

impl Phase {
    /// The phase in which answers for the given role may be recorded.
    #[must_use]
    pub fn answering(role: AnswerRole) -> Self {
        match role {
            AnswerRole::Creator => Phase::CreatorAnswering,
            AnswerRole::Respondent => Phase::RespondentAnswering,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Creating => "creating",
            Phase::CreatorAnswering => "creator-answering",
            Phase::RespondentAnswering => "respondent-answering",
            Phase::Results => "results",
        })
    }
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// In-memory questionnaire session.
///
/// Owns the question list and both answer tracks and steps through the four
/// lifecycle phases. Every transition method checks the current phase and
/// rejects calls that are invalid for it, so the view layer is never the
/// only guard.
///
/// Timestamps are injected by the caller to keep the services-layer clock
/// the single time source.
pub struct Session {
    id: SessionId,
    phase: Phase,
    questions: Vec<QuestionText>,
    creator_answers: AnswerSet,
    respondent_answers: AnswerSet,
    share_token: Option<ShareToken>,
    started_at: DateTime<Utc>,
    published_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Create an empty session in the `Creating` phase.
    #[must_use]
    pub fn new(id: SessionId, started_at: DateTime<Utc>) -> Self {
        Self {
            id,
            phase: Phase::Creating,
            questions: Vec::new(),
            creator_answers: AnswerSet::new(),
            respondent_answers: AnswerSet::new(),
            share_token: None,
            started_at,
            published_at: None,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionText] {
        &self.questions
    }

    /// Total number of questions, duplicates included.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The share token, set once at publish time.
    #[must_use]
    pub fn share_token(&self) -> Option<&ShareToken> {
        self.share_token.as_ref()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// One role's answer track.
    #[must_use]
    pub fn answers(&self, role: AnswerRole) -> &AnswerSet {
        match role {
            AnswerRole::Creator => &self.creator_answers,
            AnswerRole::Respondent => &self.respondent_answers,
        }
    }

    /// The recorded score for a question on one track, if any.
    #[must_use]
    pub fn answer(&self, role: AnswerRole, question: &QuestionText) -> Option<Score> {
        self.answers(role).get(question)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Results
    }

    fn require_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidPhase {
                expected,
                found: self.phase,
            })
        }
    }

    fn answers_mut(&mut self, role: AnswerRole) -> &mut AnswerSet {
        match role {
            AnswerRole::Creator => &mut self.creator_answers,
            AnswerRole::Respondent => &mut self.respondent_answers,
        }
    }

    /// Append a question to the questionnaire.
    ///
    /// Duplicates are allowed and insertion order is preserved.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` once the session has left
    /// `Creating`.
    pub fn add_question(&mut self, question: QuestionText) -> Result<(), SessionError> {
        self.require_phase(Phase::Creating)?;
        self.questions.push(question);
        Ok(())
    }

    /// Publish the questionnaire and move to creator answering.
    ///
    /// The share token is set here exactly once and the question list is
    /// frozen from this point on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` outside `Creating` (publishing
    /// twice lands here) and `SessionError::NoQuestions` when the question
    /// list is empty.
    pub fn publish(
        &mut self,
        token: ShareToken,
        published_at: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.require_phase(Phase::Creating)?;
        if self.questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }

        self.share_token = Some(token);
        self.published_at = Some(published_at);
        self.phase = Phase::CreatorAnswering;
        Ok(())
    }

    /// Record an answer for one question on the given role's track.
    ///
    /// Overwrites any score previously recorded for the question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` unless the session is in the
    /// role's answering phase, and `SessionError::UnknownQuestion` when the
    /// question is not part of the questionnaire.
    pub fn record_answer(
        &mut self,
        role: AnswerRole,
        question: &QuestionText,
        score: Score,
    ) -> Result<(), SessionError> {
        self.require_phase(Phase::answering(role))?;
        if !self.questions.contains(question) {
            return Err(SessionError::UnknownQuestion(question.as_str().to_string()));
        }

        self.answers_mut(role).record(question.clone(), score);
        Ok(())
    }

    /// Submit the creator track and open the respondent track.
    ///
    /// No completeness check: unanswered questions stay absent and surface
    /// as zero in the comparison report.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` outside `CreatorAnswering`.
    pub fn submit_creator_answers(&mut self) -> Result<(), SessionError> {
        self.require_phase(Phase::CreatorAnswering)?;
        self.phase = Phase::RespondentAnswering;
        Ok(())
    }

    /// Submit the respondent track and enter the results phase.
    ///
    /// Partial answers are tolerated here as well.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` outside `RespondentAnswering`.
    pub fn submit_respondent_answers(
        &mut self,
        completed_at: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.require_phase(Phase::RespondentAnswering)?;
        self.completed_at = Some(completed_at);
        self.phase = Phase::Results;
        Ok(())
    }

    /// Build the per-question comparison of both answer tracks.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidPhase` before `Results`.
    pub fn comparison_report(&self) -> Result<ComparisonReport, SessionError> {
        self.require_phase(Phase::Results)?;
        Ok(ComparisonReport::from_answer_sets(
            &self.questions,
            &self.creator_answers,
            &self.respondent_answers,
        ))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("questions_len", &self.questions.len())
            .field("creator_answers_len", &self.creator_answers.len())
            .field("respondent_answers_len", &self.respondent_answers.len())
            .field("started_at", &self.started_at)
            .field("published_at", &self.published_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── COMPARISON REPORT ────────────────────────────────────────────────────────
//

/// One question's pairing of creator and respondent scores.
///
/// Scores are chart values: a recorded 1-5 score, or 0 when the track left
/// the question unanswered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonEntry {
    pub question: QuestionText,
    pub creator_score: u8,
    pub respondent_score: u8,
}

/// Per-question comparison of both answer tracks, in insertion order.
///
/// Always has exactly one entry per question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    entries: Vec<ComparisonEntry>,
}

impl ComparisonReport {
    pub(crate) fn from_answer_sets(
        questions: &[QuestionText],
        creator: &AnswerSet,
        respondent: &AnswerSet,
    ) -> Self {
        let entries = questions
            .iter()
            .map(|question| ComparisonEntry {
                question: question.clone(),
                creator_score: creator.score_or_zero(question),
                respondent_score: respondent.score_or_zero(question),
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
