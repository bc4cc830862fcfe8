//! Keyword-based importance scoring and the card-count plan derived from it.

use std::fmt;

/// Topics that make a chunk worth more flashcards.
pub const KEYWORDS: &[&str] = &[
    "climate",
    "geopolitics",
    "conflict",
    "development",
    "population",
    "resources",
];

const BASE_SCORE: f64 = 0.3;
const KEYWORD_WEIGHT: f64 = 0.1;

/// Heuristic relevance of a chunk, always within `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ImportanceScore(f64);

impl ImportanceScore {
    /// Score a chunk by case-insensitive keyword containment.
    ///
    /// Each keyword counts once no matter how often it appears.
    pub fn of(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let matches = KEYWORDS.iter().filter(|k| lowered.contains(**k)).count();
        Self::from_matches(matches)
    }

    fn from_matches(matches: usize) -> Self {
        let matches = u32::try_from(matches).unwrap_or(u32::MAX);
        Self((BASE_SCORE + KEYWORD_WEIGHT * f64::from(matches)).min(1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for ImportanceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// How many flashcards to request for a chunk: 3, 4, 5 or 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FlashcardCount(u8);

impl FlashcardCount {
    pub const MIN: Self = Self(3);
    pub const MAX: Self = Self(6);

    /// Step function over the score with boundaries at 0.4, 0.6 and 0.8
    /// (each boundary belongs to the lower step).
    pub fn for_score(score: ImportanceScore) -> Self {
        let s = score.value();
        if s <= 0.4 {
            Self(3)
        } else if s <= 0.6 {
            Self(4)
        } else if s <= 0.8 {
            Self(5)
        } else {
            Self(6)
        }
    }

    pub fn get(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for FlashcardCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
