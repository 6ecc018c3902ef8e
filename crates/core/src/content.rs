//! News, article and FAQ content rules.

use crate::error::CoreError;

/// Maximum length of a title, question or slug.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Average reading speed used for the article reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time of `content` in whole minutes, rounded up.
pub fn reading_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE) as u32
}

/// Validate a news/article title or a FAQ question.
pub fn validate_title(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_TITLE_LENGTH} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate long-form body text (article content, FAQ answer).
pub fn validate_body(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_time(""), 0);
        assert_eq!(reading_time("one"), 1);
        assert_eq!(reading_time(&"word ".repeat(200)), 1);
        assert_eq!(reading_time(&"word ".repeat(201)), 2);
    }

    #[test]
    fn reading_time_ignores_extra_whitespace() {
        assert_eq!(reading_time("  a \n\n b\t c  "), 1);
    }

    #[test]
    fn title_rules() {
        assert!(validate_title("title", "Как выбрать щенка").is_ok());
        assert!(validate_title("title", " ").is_err());
        assert!(validate_title("title", &"a".repeat(MAX_TITLE_LENGTH + 1)).is_err());
    }

    #[test]
    fn body_must_not_be_blank() {
        assert!(validate_body("content", "text").is_ok());
        assert!(validate_body("content", "\n").is_err());
    }
}
