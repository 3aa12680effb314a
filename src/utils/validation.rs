use crate::utils::error::{FortuneError, Result};
use url::Url;

/// Minimum trimmed length of a dream description, in characters.
pub const MIN_DREAM_CHARS: usize = 5;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Gate applied before any network call is made for a submission.
pub fn validate_dream_text(dream: &str) -> Result<()> {
    let trimmed = dream.trim();
    if trimmed.chars().count() < MIN_DREAM_CHARS {
        return Err(FortuneError::ValidationError {
            message: format!(
                "dream text must be at least {} characters after trimming",
                MIN_DREAM_CHARS
            ),
        });
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FortuneError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FortuneError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FortuneError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FortuneError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(FortuneError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dream_text() {
        assert!(validate_dream_text("어제 돼지가 나를 쫓아오는 꿈을 꿨어").is_ok());
        assert!(validate_dream_text("hello").is_ok());
        assert!(validate_dream_text("  hello  ").is_ok());

        assert!(validate_dream_text("").is_err());
        assert!(validate_dream_text("    ").is_err());
        assert!(validate_dream_text("돼지꿈").is_err());
        assert!(validate_dream_text("  ab  ").is_err());
    }

    #[test]
    fn test_dream_length_counts_characters_not_bytes() {
        // Four Hangul characters are twelve UTF-8 bytes but still too short.
        assert!(validate_dream_text("돼지꿈꿈").is_err());
        assert!(validate_dream_text("돼지꿈을꿈").is_ok());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_base", "https://example.com").is_ok());
        assert!(validate_url("api_base", "http://example.com").is_ok());
        assert!(validate_url("api_base", "").is_err());
        assert!(validate_url("api_base", "invalid-url").is_err());
        assert!(validate_url("api_base", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("max_attempts", 5, 1).is_ok());
        assert!(validate_positive_number("max_attempts", 0, 1).is_err());
    }
}
