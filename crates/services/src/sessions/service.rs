use chrono::{DateTime, Utc};
use tracing::{debug, info};

use quiz_core::Clock;
use quiz_core::model::{AnswerRole, QuestionText, Score, Session, SessionId, ShareLink};

use super::progress::AnswerProgress;
use super::view::ChartDataset;
use crate::error::SessionFlowError;
use crate::token::TokenGenerator;

//
// ─── INPUT OUTCOME ─────────────────────────────────────────────────────────────
//

/// Disposition of one piece of raw view input.
///
/// Malformed input is rejected silently: the session is untouched and no
/// error surfaces, but the caller can still observe the rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The input was valid and applied to the session.
    Accepted,
    /// The input was blank, non-numeric, or out of range; nothing changed.
    Ignored,
}

impl InputOutcome {
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, InputOutcome::Accepted)
    }
}

//
// ─── SESSION FLOW ──────────────────────────────────────────────────────────────
//

/// Drives a questionnaire session on behalf of the view collaborator.
///
/// Owns the time source and the share-token generator. Raw strings from the
/// view are validated here and silently dropped when malformed; phase
/// transitions run through the session's own guards and are logged.
#[derive(Debug, Clone, Default)]
pub struct SessionFlowService {
    clock: Clock,
    tokens: TokenGenerator,
}

impl SessionFlowService {
    #[must_use]
    pub fn new(clock: Clock, tokens: TokenGenerator) -> Self {
        Self { clock, tokens }
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Create an empty session in the `Creating` phase.
    #[must_use]
    pub fn start_session(&self) -> Session {
        let session = Session::new(SessionId::new(), self.clock.now());
        info!(session = %session.id(), "questionnaire session started");
        session
    }

    /// Add a question from raw view input.
    ///
    /// Blank or whitespace-only input is ignored without touching the
    /// session.
    ///
    /// # Errors
    ///
    /// Returns `SessionFlowError::Session` once the session has left the
    /// `Creating` phase.
    pub fn add_question_raw(
        &self,
        session: &mut Session,
        raw: &str,
    ) -> Result<InputOutcome, SessionFlowError> {
        let Ok(question) = QuestionText::new(raw) else {
            debug!(session = %session.id(), "ignoring blank question input");
            return Ok(InputOutcome::Ignored);
        };

        session.add_question(question)?;
        Ok(InputOutcome::Accepted)
    }

    /// Publish the questionnaire: generate the share token, freeze the
    /// question list, and move to creator answering.
    ///
    /// # Errors
    ///
    /// Returns `SessionFlowError::Session` when the session is not in
    /// `Creating` or has no questions, and `SessionFlowError::Share` if the
    /// share link cannot be built from the generated token.
    pub fn publish(&self, session: &mut Session) -> Result<ShareLink, SessionFlowError> {
        let token = self.tokens.generate()?;
        let link = ShareLink::for_token(&token)?;
        session.publish(token, self.clock.now())?;

        info!(session = %session.id(), phase = %session.phase(), "questionnaire published");
        Ok(link)
    }

    /// Record an answer from raw view input.
    ///
    /// Non-numeric or out-of-range values are ignored; the answer stays
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns `SessionFlowError::Session` when the phase does not match
    /// the role or the question is not part of the questionnaire.
    pub fn record_answer_raw(
        &self,
        session: &mut Session,
        role: AnswerRole,
        question: &QuestionText,
        raw: &str,
    ) -> Result<InputOutcome, SessionFlowError> {
        let score = match Score::parse(raw) {
            Ok(score) => score,
            Err(err) => {
                debug!(session = %session.id(), role = %role, %err, "ignoring invalid answer input");
                return Ok(InputOutcome::Ignored);
            }
        };

        session.record_answer(role, question, score)?;
        Ok(InputOutcome::Accepted)
    }

    /// Submit the creator track and open the respondent track.
    ///
    /// # Errors
    ///
    /// Returns `SessionFlowError::Session` outside `CreatorAnswering`.
    pub fn submit_creator_answers(&self, session: &mut Session) -> Result<(), SessionFlowError> {
        session.submit_creator_answers()?;
        info!(session = %session.id(), phase = %session.phase(), "creator answers submitted");
        Ok(())
    }

    /// Submit the respondent track and enter the results phase.
    ///
    /// # Errors
    ///
    /// Returns `SessionFlowError::Session` outside `RespondentAnswering`.
    pub fn submit_respondent_answers(
        &self,
        session: &mut Session,
    ) -> Result<(), SessionFlowError> {
        session.submit_respondent_answers(self.clock.now())?;
        info!(session = %session.id(), phase = %session.phase(), "respondent answers submitted");
        Ok(())
    }

    /// Progress of one answer track.
    ///
    /// Counts question slots, so a duplicated question with one recorded
    /// answer counts as answered in each slot.
    #[must_use]
    pub fn progress(&self, session: &Session, role: AnswerRole) -> AnswerProgress {
        let answers = session.answers(role);
        let total = session.question_count();
        let answered = session
            .questions()
            .iter()
            .filter(|question| answers.get(question).is_some())
            .count();

        AnswerProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete: answered == total,
        }
    }

    /// Chart dataset for the results phase.
    ///
    /// # Errors
    ///
    /// Returns `SessionFlowError::Session` before `Results`.
    pub fn chart_dataset(&self, session: &Session) -> Result<ChartDataset, SessionFlowError> {
        let report = session.comparison_report()?;
        Ok(ChartDataset::from_report(&report))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
