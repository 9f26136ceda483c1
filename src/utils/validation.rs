use crate::domain::model::SubmissionInput;
use crate::utils::error::{AdviceError, Result};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AdviceError::InvalidFieldError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AdviceError::InvalidFieldError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AdviceError::InvalidFieldError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AdviceError::InvalidFieldError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(AdviceError::InvalidFieldError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    static HEX_COLOR: OnceLock<Regex> = OnceLock::new();
    let pattern = HEX_COLOR.get_or_init(|| {
        Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex color pattern is a valid regex")
    });

    if !pattern.is_match(value) {
        return Err(AdviceError::InvalidFieldError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a color in #rrggbb form".to_string(),
        });
    }
    Ok(())
}

impl Validate for SubmissionInput {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("nickname", &self.nickname)?;
        validate_non_empty_string("birthplace", &self.birthplace)?;
        validate_hex_color("favorite_color", &self.favorite_color)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("advice_endpoint", "https://example.com").is_ok());
        assert!(validate_url("advice_endpoint", "http://example.com").is_ok());
        assert!(validate_url("advice_endpoint", "").is_err());
        assert!(validate_url("advice_endpoint", "invalid-url").is_err());
        assert!(validate_url("advice_endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("nickname", "Ava").is_ok());
        assert!(validate_non_empty_string("nickname", "").is_err());
        assert!(validate_non_empty_string("nickname", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout_seconds", 30u64, 1, 300).is_ok());
        assert!(validate_range("timeout_seconds", 0u64, 1, 300).is_err());
        assert!(validate_range("timeout_seconds", 301u64, 1, 300).is_err());
    }

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("favorite_color", "#00ff88").is_ok());
        assert!(validate_hex_color("favorite_color", "#AABBCC").is_ok());
        assert!(validate_hex_color("favorite_color", "00ff88").is_err());
        assert!(validate_hex_color("favorite_color", "#00ff8").is_err());
        assert!(validate_hex_color("favorite_color", "#00ff8g").is_err());
        assert!(validate_hex_color("favorite_color", "green").is_err());
    }

    #[test]
    fn test_validate_submission_input() {
        let input = SubmissionInput {
            nickname: "Ava".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1990, 7, 15).unwrap(),
            birthplace: "Lyon".to_string(),
            favorite_color: "#00ff88".to_string(),
        };
        assert!(input.validate().is_ok());

        let mut blank_nickname = input.clone();
        blank_nickname.nickname = "  ".to_string();
        assert!(blank_nickname.validate().is_err());

        let mut bad_color = input;
        bad_color.favorite_color = "chartreuse".to_string();
        assert!(bad_color.validate().is_err());
    }
}
