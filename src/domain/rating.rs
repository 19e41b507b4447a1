use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest selectable satisfaction score.
pub const MAX_RATING: u8 = 5;

const MOODS: [&str; MAX_RATING as usize] = ["😡", "😕", "😐", "🙂", "😍"];

/// Satisfaction score on a 1..=5 scale. `0` means nothing has been chosen yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

#[derive(Debug, Clone, Copy, Error, PartialEq)]
#[error("Rating must be between 1 and 5, got {0}")]
pub struct RatingOutOfRange(pub u8);

impl Rating {
    pub const UNSET: Rating = Rating(0);

    /// A chosen rating. Only 1..=5 can be chosen; `0` is reserved for "unset".
    pub fn chosen(score: u8) -> Result<Self, RatingOutOfRange> {
        if (1..=MAX_RATING).contains(&score) {
            Ok(Rating(score))
        } else {
            Err(RatingOutOfRange(score))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0 > 0
    }

    /// Emoji shown on the rating button for this score.
    pub fn mood(&self) -> Option<&'static str> {
        self.0.checked_sub(1).map(|i| MOODS[i as usize])
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingOutOfRange;

    fn try_from(score: u8) -> Result<Self, Self::Error> {
        if score <= MAX_RATING {
            Ok(Rating(score))
        } else {
            Err(RatingOutOfRange(score))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mood() {
            Some(mood) => write!(f, "{} {}", self.0, mood),
            None => f.write_str("-"),
        }
    }
}
