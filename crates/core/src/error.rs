use thiserror::Error;

use crate::model::{QuestionError, ScoreError, SessionError, ShareError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Share(#[from] ShareError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
