pub mod file;

use crate::domain::model::SubmissionInput;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "survival-advisor")]
#[command(about = "Generates a personalized alien-invasion survival protocol")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:5000/api/generate-advice")]
    pub advice_endpoint: String,

    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Read service settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "What should the aliens call you?")]
    pub nickname: String,

    #[arg(long, help = "Birth date as YYYY-MM-DD")]
    pub birthdate: NaiveDate,

    #[arg(long, help = "Where on Earth are you from?")]
    pub birthplace: String,

    #[arg(long, default_value = "#00ff88")]
    pub favorite_color: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn submission(&self) -> SubmissionInput {
        SubmissionInput {
            nickname: self.nickname.clone(),
            birthdate: self.birthdate,
            birthplace: self.birthplace.clone(),
            favorite_color: self.favorite_color.clone(),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn advice_endpoint(&self) -> &str {
        &self.advice_endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("advice_endpoint", &self.advice_endpoint)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        self.submission().validate()?;
        Ok(())
    }
}
