//! Readiness score calculation.

/// Starting score for every analysis.
pub const BASE_SCORE: u32 = 35;
/// Points per matched category.
pub const CATEGORY_POINTS: u32 = 5;
/// Ceiling for the category bonus.
pub const MAX_CATEGORY_BONUS: u32 = 30;
/// Bonus for a supplied company or role.
pub const METADATA_BONUS: u32 = 10;
/// Bonus for a long job description.
pub const LENGTH_BONUS: u32 = 10;
/// Length a description must exceed to earn [`LENGTH_BONUS`], counted in
/// UTF-16 code units.
pub const LENGTH_THRESHOLD: usize = 800;
/// Bonus for keyword density.
pub const DENSITY_BONUS: u32 = 5;
/// Keyword hits a description must exceed to earn [`DENSITY_BONUS`].
pub const DENSITY_THRESHOLD: usize = 5;
/// Upper bound for every score.
pub const MAX_SCORE: u8 = 100;
/// Score change applied by one confidence toggle.
pub const CONFIDENCE_DELTA: i16 = 2;

/// Inputs to the score formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInputs<'a> {
    /// Number of categories in the extracted skills map.
    pub category_count: usize,
    /// Number of keyword hits across all categories.
    pub total_matches: usize,
    /// Company name as entered.
    pub company: &'a str,
    /// Role as entered.
    pub role: &'a str,
    /// Raw job description.
    pub text: &'a str,
}

/// Computes the readiness score, clamped to [`MAX_SCORE`].
pub fn readiness_score(inputs: &ScoreInputs<'_>) -> u8 {
    let mut score = BASE_SCORE;
    score += inputs
        .category_count
        .saturating_mul(CATEGORY_POINTS as usize)
        .min(MAX_CATEGORY_BONUS as usize) as u32;

    if is_provided(inputs.company) {
        score += METADATA_BONUS;
    }
    if is_provided(inputs.role) {
        score += METADATA_BONUS;
    }
    if utf16_len(inputs.text) > LENGTH_THRESHOLD {
        score += LENGTH_BONUS;
    }
    if inputs.total_matches > DENSITY_THRESHOLD {
        score += DENSITY_BONUS;
    }

    score.min(u32::from(MAX_SCORE)) as u8
}

/// Applies a signed delta to a displayed score, clamping to [0, 100].
pub fn adjust(score: u8, delta: i16) -> u8 {
    (i16::from(score) + delta).clamp(0, i16::from(MAX_SCORE)) as u8
}

/// A metadata field only counts when its trimmed length exceeds one.
fn is_provided(value: &str) -> bool {
    utf16_len(value.trim()) > 1
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
