use serde::{Deserialize, Serialize};

use crate::errors::{LeagueError, LeagueResult};

/// Environment variable holding the highlight segment threshold
pub const HIGHLIGHT_THRESHOLD_VAR: &str = "LEAGUE_HIGHLIGHT_THRESHOLD";

/// Configuration for [`crate::services::LeagueService`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueConfig {
    /// A player qualifies for the highlight segment with strictly more
    /// goals than this
    pub highlight_threshold: u32,
}

impl LeagueConfig {
    /// Loads the configuration from the environment
    ///
    /// A `.env` file in the working directory is honoured. An unset
    /// variable falls back to the default threshold.
    pub fn from_env() -> LeagueResult<Self> {
        dotenv::dotenv().ok();

        Self::from_value(std::env::var(HIGHLIGHT_THRESHOLD_VAR).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> LeagueResult<Self> {
        let Some(raw) = value else {
            tracing::warn!("{} not set, using default", HIGHLIGHT_THRESHOLD_VAR);
            return Ok(Self::default());
        };

        let highlight_threshold = raw.trim().parse::<u32>().map_err(|e| {
            LeagueError::Config(format!("{HIGHLIGHT_THRESHOLD_VAR}={raw:?}: {e}"))
        })?;

        Ok(Self {
            highlight_threshold,
        })
    }
}
