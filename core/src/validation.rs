//! Input rules for create and update payloads.
//!
//! Rules run on the raw request values, before any trimming. The blank-title
//! check always runs first so that a blank title is reported ahead of any
//! other problem with the request.

use thiserror::Error;

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Maximum description length in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title must not exceed {max} characters")]
    TitleTooLong { max: usize },

    #[error("Description must not exceed {max} characters")]
    DescriptionTooLong { max: usize },
}

/// Validate a title/description pair and return the title on success.
pub fn validate<'a>(
    title: Option<&'a str>,
    description: Option<&str>,
) -> Result<&'a str, ValidationError> {
    let title = match title {
        Some(title) if !title.trim().is_empty() => title,
        _ => return Err(ValidationError::TitleRequired),
    };
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(ValidationError::TitleTooLong {
            max: TITLE_MAX_CHARS,
        });
    }
    if let Some(description) = description {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(ValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX_CHARS,
            });
        }
    }
    Ok(title)
}
