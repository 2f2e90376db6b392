//! Ranking configuration.
//!
//! The collaborator that owns user preferences hands this over once; the
//! retainer's `limit` comes from `max_results`.
//!
//! ## Example
//!
//! ```json
//! {
//!   "max_results": 12,
//!   "scorer": "frecency",
//!   "recency_decay_days": 7.0
//! }
//! ```

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::retainer::{RankedRetainer, RetainerError};
use crate::selection::ranking::{DEFAULT_RECENCY_DECAY_DAYS, DEFAULT_RECENCY_MAX_BOOST};
use crate::selection::{FrecencyScorer, RankedSelector, Scorer, TermMatchScorer, VisitCountScorer};

pub const DEFAULT_MAX_RESULTS: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("max_results must be at least 1")]
    InvalidMaxResults,
    #[error("recency_max_boost must be at least 1.0, got {0}")]
    InvalidRecencyBoost(f64),
    #[error("recency_decay_days must be positive, got {0}")]
    InvalidRecencyDecay(f64),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerKind {
    #[default]
    VisitCount,
    TermMatch,
    Frecency,
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct RankingConfig {
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default)]
    pub scorer: ScorerKind,
    #[serde(default = "default_recency_max_boost")]
    pub recency_max_boost: f64,
    #[serde(default = "default_recency_decay_days")]
    pub recency_decay_days: f64,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

fn default_recency_max_boost() -> f64 {
    DEFAULT_RECENCY_MAX_BOOST
}

fn default_recency_decay_days() -> f64 {
    DEFAULT_RECENCY_DECAY_DAYS
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self::v0()
    }
}

impl RankingConfig {
    pub fn v0() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            scorer: ScorerKind::VisitCount,
            recency_max_boost: DEFAULT_RECENCY_MAX_BOOST,
            recency_decay_days: DEFAULT_RECENCY_DECAY_DAYS,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RankingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        debug!(
            path = %path.display(),
            max_results = config.max_results,
            scorer = ?config.scorer,
            "loaded ranking config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_results == 0 {
            return Err(ConfigError::InvalidMaxResults);
        }
        if self.recency_max_boost.is_nan() || self.recency_max_boost < 1.0 {
            return Err(ConfigError::InvalidRecencyBoost(self.recency_max_boost));
        }
        if self.recency_decay_days.is_nan() || self.recency_decay_days <= 0.0 {
            return Err(ConfigError::InvalidRecencyDecay(self.recency_decay_days));
        }
        Ok(())
    }

    /// An empty retainer sized by `max_results`.
    pub fn retainer<T>(&self) -> Result<RankedRetainer<T>, RetainerError> {
        RankedRetainer::new(self.max_results)
    }

    /// A selector using the configured scorer. `now` anchors recency decay.
    pub fn selector(&self, now: DateTime<Utc>) -> RankedSelector<Box<dyn Scorer>> {
        let scorer: Box<dyn Scorer> = match self.scorer {
            ScorerKind::VisitCount => Box::new(VisitCountScorer),
            ScorerKind::TermMatch => Box::new(TermMatchScorer),
            ScorerKind::Frecency => Box::new(FrecencyScorer::with_decay(
                now,
                self.recency_max_boost,
                self.recency_decay_days,
            )),
        };
        RankedSelector::new(scorer)
    }
}
