use crate::domain::model::{AdvicePayload, AdviceView};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn advice_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}

#[async_trait]
pub trait AdviceGenerator: Send + Sync {
    async fn generate(&self, payload: &AdvicePayload) -> Result<AdviceView>;
}
