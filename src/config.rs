//! Gameplay constants and DOM hooks.
//!
//! `GameConfig::default()` reproduces the classic tuning. With the `serde`
//! feature the struct can be (partially) deserialized; missing fields fall back
//! to the defaults.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GameConfig {
    // --- Physics ---
    pub gravity: f64,
    pub jump_strength: f64,
    // --- Player ---
    pub player_x: f64,
    pub player_size: f64,
    pub ground_height: f64,
    // --- Level curve ---
    pub base_speed: f64,
    pub base_spawn_interval: u64,
    pub spawn_interval_step: u64,
    pub min_spawn_interval: u64,
    pub base_level_distance: f64,
    pub level_distance_increase: f64,
    // --- Obstacles ---
    pub obstacle_min_height: f64,
    pub obstacle_height_range: f64,
    pub obstacle_min_width: f64,
    pub obstacle_width_range: f64,
    /// Vertical offset of floating obstacles above the ground-level slot.
    pub elevated_gap: f64,
    // --- Colors (any CSS color) ---
    pub player_color: String,
    pub obstacle_color: String,
    pub ground_color: String,
    // --- DOM element ids ---
    pub canvas_id: String,
    pub score_id: String,
    pub progress_id: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_strength: 12.0,
            player_x: 50.0,
            player_size: 30.0,
            ground_height: 20.0,
            base_speed: 6.0,
            base_spawn_interval: 100,
            spawn_interval_step: 10,
            min_spawn_interval: 10,
            base_level_distance: 3000.0,
            level_distance_increase: 200.0,
            obstacle_min_height: 20.0,
            obstacle_height_range: 30.0,
            obstacle_min_width: 20.0,
            obstacle_width_range: 20.0,
            elevated_gap: 60.0,
            player_color: "cyan".into(),
            obstacle_color: "limegreen".into(),
            ground_color: "white".into(),
            canvas_id: "gameCanvas".into(),
            score_id: "score".into(),
            progress_id: "progressBar".into(),
        }
    }
}

/// Why a [`GameConfig`] was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must be positive")]
    NotPositive { field: &'static str },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("min_spawn_interval must be at least 1")]
    ZeroSpawnInterval,

    #[cfg(feature = "serde_json")]
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl GameConfig {
    fn numeric_fields(&self) -> [(&'static str, f64); 13] {
        [
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
            ("player_x", self.player_x),
            ("player_size", self.player_size),
            ("ground_height", self.ground_height),
            ("base_speed", self.base_speed),
            ("base_level_distance", self.base_level_distance),
            ("level_distance_increase", self.level_distance_increase),
            ("obstacle_min_height", self.obstacle_min_height),
            ("obstacle_height_range", self.obstacle_height_range),
            ("obstacle_min_width", self.obstacle_min_width),
            ("obstacle_width_range", self.obstacle_width_range),
            ("elevated_gap", self.elevated_gap),
        ]
    }

    /// Reject tunings the simulation cannot run with: non-finite numbers, a
    /// stalled or reversed scroll, a zero spawn interval, a degenerate player.
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
        }
        for (field, value) in [
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
            ("player_size", self.player_size),
            // obstacles must be able to scroll out of view
            ("base_speed", self.base_speed),
            ("base_level_distance", self.base_level_distance),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field });
            }
        }
        for (field, value) in [
            ("level_distance_increase", self.level_distance_increase),
            ("ground_height", self.ground_height),
            ("obstacle_min_height", self.obstacle_min_height),
            ("obstacle_height_range", self.obstacle_height_range),
            ("obstacle_min_width", self.obstacle_min_width),
            ("obstacle_width_range", self.obstacle_width_range),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { field });
            }
        }
        if self.min_spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        Ok(())
    }

    /// Parse a JSON configuration; absent keys keep their default values.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let cfg: GameConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
