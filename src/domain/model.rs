use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::zodiac;

/// One form submission. Owned by the session, discarded on reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionInput {
    pub nickname: String,
    pub birthdate: NaiveDate,
    pub birthplace: String,
    pub favorite_color: String,
}

/// Body posted to the advice service: the submission plus the resolved sign.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvicePayload {
    pub nickname: String,
    pub birthdate: NaiveDate,
    pub birthplace: String,
    pub favorite_color: String,
    pub zodiac_sign: String,
    pub zodiac_traits: Vec<String>,
}

impl AdvicePayload {
    pub fn from_submission(input: &SubmissionInput) -> Self {
        let sign = zodiac::resolve(input.birthdate);

        Self {
            nickname: input.nickname.clone(),
            birthdate: input.birthdate,
            birthplace: input.birthplace.clone(),
            favorite_color: input.favorite_color.clone(),
            zodiac_sign: sign.name.to_string(),
            zodiac_traits: sign.traits.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Display fields produced by the advice service. All values are opaque
/// pass-through strings; nothing here is computed locally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceView {
    pub nickname: String,
    pub birthplace: String,
    pub favorite_color: String,
    pub zodiac_sign: String,
    pub personality: String,
    pub food: String,
    pub food_reason: String,
    pub weapon: String,
    pub clothing: String,
    pub song: String,
    pub song_reason: String,
}

#[derive(Debug, Deserialize)]
pub struct AdviceResponse {
    pub success: bool,
    #[serde(default)]
    pub advice: Option<AdviceView>,
    #[serde(default)]
    pub error: Option<String>,
}
