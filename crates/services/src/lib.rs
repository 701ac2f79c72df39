#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;
pub mod token;

pub use quiz_core::Clock;

pub use error::SessionFlowError;
pub use token::TokenGenerator;

pub use sessions::{AnswerProgress, ChartDataset, ChartPoint, InputOutcome, SessionFlowService};
