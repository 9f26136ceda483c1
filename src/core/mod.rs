pub mod client;
pub mod engine;
pub mod session;

pub use crate::domain::model::{AdvicePayload, AdviceResponse, AdviceView, SubmissionInput};
pub use crate::domain::ports::{AdviceGenerator, ConfigProvider};
pub use crate::utils::error::Result;
