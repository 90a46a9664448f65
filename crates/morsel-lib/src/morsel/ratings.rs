//! Star ratings and comment logs
//!
//! Both logs are bounded: ratings keep the most recent 200 entries,
//! comments the newest 60. An empty rating log averages to `None`; the
//! "unrated" sentinel is distinct from a numeric zero and must stay so in
//! display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ratings retained per recipe (most recent kept)
pub const MAX_RATINGS: usize = 200;

/// Comments retained per recipe (newest kept)
pub const MAX_COMMENTS: usize = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("stars must be between 1 and 5, got {0}")]
    OutOfRange(u8),
}

/// Average of a rating sequence, or `None` when unrated
pub fn average(stars: &[u8]) -> Option<f64> {
    if stars.is_empty() {
        return None;
    }
    let sum: u32 = stars.iter().map(|s| u32::from(*s)).sum();
    Some(f64::from(sum) / stars.len() as f64)
}

/// Bounded, ordered star ratings for one recipe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingLog {
    stars: Vec<u8>,
}

impl RatingLog {
    /// Append a rating, dropping the oldest past [`MAX_RATINGS`]
    pub fn record(&mut self, stars: u8) -> Result<(), RatingError> {
        if !(1..=5).contains(&stars) {
            return Err(RatingError::OutOfRange(stars));
        }
        self.stars.push(stars);
        if self.stars.len() > MAX_RATINGS {
            let excess = self.stars.len() - MAX_RATINGS;
            self.stars.drain(..excess);
        }
        Ok(())
    }

    pub fn average(&self) -> Option<f64> {
        average(&self.stars)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

/// One posted comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    pub posted_at: DateTime<Utc>,
}

/// Bounded, newest-first comment log for one recipe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentLog {
    comments: Vec<Comment>,
}

impl CommentLog {
    /// Prepend a comment, dropping the oldest past [`MAX_COMMENTS`]
    ///
    /// Blank text is ignored, mirroring the empty-input guard on every
    /// other free-text entry point.
    pub fn post(&mut self, text: &str) -> bool {
        self.post_at(text, Utc::now())
    }

    pub fn post_at(&mut self, text: &str, posted_at: DateTime<Utc>) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.comments.insert(
            0,
            Comment {
                text: text.to_string(),
                posted_at,
            },
        );
        self.comments.truncate(MAX_COMMENTS);
        true
    }

    /// Newest first
    pub fn iter(&self) -> impl Iterator<Item = &Comment> {
        self.comments.iter()
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    include!("ratings.test.rs");
}
