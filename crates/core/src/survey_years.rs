// Survey period normalization for the `surveyYears` parameter

use crate::error::{ValidationError, ValidationResult};

/// Normalize a survey period to a form the upstream API accepts.
///
/// Accepted inputs (surrounding whitespace is ignored):
/// - `yyyy`
/// - `yyyymm` with a month of 01-12
/// - `yyyymm-yyyymm` with both months in 01-12
/// - `yyyy-yyyy`, rewritten to `yyyy01-yyyy12`
pub fn normalize_survey_years(input: &str) -> ValidationResult<String> {
    let cleaned = input.trim();

    if is_year(cleaned) || is_year_month(cleaned) {
        return Ok(cleaned.to_string());
    }

    if let Some((start, end)) = cleaned.split_once('-') {
        if is_year_month(start) && is_year_month(end) {
            return Ok(cleaned.to_string());
        }
        if is_year(start) && is_year(end) {
            return Ok(format!("{}01-{}12", start, end));
        }
    }

    Err(ValidationError::InvalidSurveyYears(input.to_string()))
}

fn all_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_year(s: &str) -> bool {
    all_digits(s, 4)
}

fn is_year_month(s: &str) -> bool {
    if !all_digits(s, 6) {
        return false;
    }
    matches!(s[4..].parse::<u8>(), Ok(1..=12))
}
