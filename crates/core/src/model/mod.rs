mod answer;
mod ids;
mod question;
mod session;
mod share;

pub use answer::{AnswerRole, AnswerSet, Score, ScoreError};
pub use ids::SessionId;
pub use question::{QuestionError, QuestionText};
pub use session::{ComparisonEntry, ComparisonReport, Phase, Session, SessionError};
pub use share::{ShareError, ShareLink, ShareToken};
