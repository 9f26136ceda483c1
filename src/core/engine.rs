use crate::domain::model::{AdvicePayload, AdviceView, SubmissionInput};
use crate::domain::ports::AdviceGenerator;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub struct AdviceEngine<G: AdviceGenerator> {
    generator: G,
}

impl<G: AdviceGenerator> AdviceEngine<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub async fn submit(&self, input: &SubmissionInput) -> Result<AdviceView> {
        input.validate()?;

        let payload = AdvicePayload::from_submission(input);
        tracing::info!(
            "Resolved {} (born {}) to {}",
            payload.nickname,
            payload.birthdate,
            payload.zodiac_sign
        );

        tracing::info!("Requesting survival advice...");
        let advice = self.generator.generate(&payload).await?;
        tracing::info!("Received advice for {}", advice.nickname);

        Ok(advice)
    }
}
