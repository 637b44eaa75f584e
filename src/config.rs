use serde::Deserialize;

use crate::animation::DEFAULT_SPEED;
use crate::error::ConfigError;

/// Page wiring and tuning. Every field has a default matching the stock page,
/// so JS only passes the keys it wants to change.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub endpoint: String,
    pub canvas_id: String,
    pub play_button_id: String,
    pub all_in_button_id: String,
    pub bet_input_id: String,
    pub balance_id: String,
    pub result_id: String,
    pub peg_sound_id: String,
    pub slot_sound_id: String,
    pub speed: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/drop_ball".into(),
            canvas_id: "plinko-canvas".into(),
            play_button_id: "play-btn".into(),
            all_in_button_id: "all-in-btn".into(),
            bet_input_id: "bet".into(),
            balance_id: "balance".into(),
            result_id: "result".into(),
            peg_sound_id: "peg-sound".into(),
            slot_sound_id: "slot-sound".into(),
            speed: DEFAULT_SPEED,
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_speed(self.speed).map(drop)
    }
}

/// Per-frame progress must lie in `(0, 1]`: 0 (or NaN) never finishes a
/// segment, anything above 1 skips pegs.
pub fn validate_speed(speed: f64) -> Result<f64, ConfigError> {
    if speed > 0.0 && speed <= 1.0 {
        Ok(speed)
    } else {
        Err(ConfigError::Speed(speed))
    }
}
