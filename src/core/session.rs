use crate::core::engine::AdviceEngine;
use crate::domain::model::{AdviceView, SubmissionInput};
use crate::domain::ports::AdviceGenerator;
use crate::utils::error::{AdviceError, Result};
use chrono::NaiveDate;

pub const DEFAULT_FAVORITE_COLOR: &str = "#00ff88";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Editing,
    Submitting,
    Revealed(AdviceView),
    Failed,
}

/// One form session: the draft fields plus where the session is in the
/// submit flow. There is no global form state; callers own their session.
#[derive(Debug)]
pub struct FormSession {
    pub nickname: String,
    pub birthdate: Option<NaiveDate>,
    pub birthplace: String,
    pub favorite_color: String,
    state: SessionState,
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            nickname: String::new(),
            birthdate: None,
            birthplace: String::new(),
            favorite_color: DEFAULT_FAVORITE_COLOR.to_string(),
            state: SessionState::Editing,
        }
    }

    pub fn with_input(input: SubmissionInput) -> Self {
        Self {
            nickname: input.nickname,
            birthdate: Some(input.birthdate),
            birthplace: input.birthplace,
            favorite_color: input.favorite_color,
            state: SessionState::Editing,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SessionState::Submitting)
    }

    pub fn advice(&self) -> Option<&AdviceView> {
        match &self.state {
            SessionState::Revealed(view) => Some(view),
            _ => None,
        }
    }

    /// Runs one submission through the engine. Refuses while a previous
    /// submission is still in flight; a failed submission leaves the draft
    /// fields untouched so the user can resubmit as-is.
    pub async fn submit<G: AdviceGenerator>(
        &mut self,
        engine: &AdviceEngine<G>,
    ) -> Result<AdviceView> {
        if self.is_submitting() {
            return Err(AdviceError::SubmissionInFlight);
        }

        let input = self.to_input()?;
        self.state = SessionState::Submitting;

        match engine.submit(&input).await {
            Ok(view) => {
                self.state = SessionState::Revealed(view.clone());
                Ok(view)
            }
            Err(e) => {
                self.state = SessionState::Failed;
                Err(e)
            }
        }
    }

    /// Discards the draft and any result, restoring the defaults.
    pub fn reset(&mut self) {
        *self = FormSession::new();
    }

    fn to_input(&self) -> Result<SubmissionInput> {
        let birthdate = self.birthdate.ok_or_else(|| AdviceError::InvalidFieldError {
            field: "birthdate".to_string(),
            value: String::new(),
            reason: "Birth date is required".to_string(),
        })?;

        Ok(SubmissionInput {
            nickname: self.nickname.clone(),
            birthdate,
            birthplace: self.birthplace.clone(),
            favorite_color: self.favorite_color.clone(),
        })
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}
