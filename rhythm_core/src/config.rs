use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gameplay::judge::Judgment;

/// Half-widths of the judgment windows, in milliseconds of remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeWindows {
    pub cool_ms: f64,
    pub good_ms: f64,
    pub safe_ms: f64,
    pub bad_ms: f64,

    /// Inputs arriving earlier than this are not judged at all.
    pub start_ms: f64,
    /// Unhit notes start expiring once remaining time drops below this.
    pub miss_ms: f64,
}

impl Default for JudgeWindows {
    fn default() -> Self {
        Self {
            cool_ms: 30.0,
            good_ms: 70.0,
            safe_ms: 100.0,
            bad_ms: 130.0,
            start_ms: 130.0,
            miss_ms: -130.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierAward {
    pub correct: u32,
    pub wrong: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTable {
    pub cool: TierAward,
    pub good: TierAward,
    pub safe: TierAward,
    pub bad: TierAward,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            cool: TierAward { correct: 500, wrong: 250 },
            good: TierAward { correct: 300, wrong: 150 },
            safe: TierAward { correct: 100, wrong: 50 },
            bad: TierAward { correct: 50, wrong: 30 },
        }
    }
}

impl ScoreTable {
    pub fn award(&self, judgment: Judgment, wrong: bool) -> u32 {
        let tier = match judgment {
            Judgment::Cool => self.cool,
            Judgment::Good => self.good,
            Judgment::Safe => self.safe,
            Judgment::Bad => self.bad,
            Judgment::Miss => return 0,
        };
        if wrong {
            tier.wrong
        } else {
            tier.correct
        }
    }

    fn tiers(&self) -> [(&'static str, TierAward); 4] {
        [
            ("cool", self.cool),
            ("good", self.good),
            ("safe", self.safe),
            ("bad", self.bad),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoldBonusConfig {
    pub cool_multiplier: u32,
    pub good_multiplier: u32,
    pub base: u32,
    /// Length of one bonus step while holding.
    pub tick_ms: f64,
}

impl Default for HoldBonusConfig {
    fn default() -> Self {
        Self {
            cool_multiplier: 20,
            good_multiplier: 10,
            base: 10,
            tick_ms: 100.0,
        }
    }
}

impl HoldBonusConfig {
    /// Per-step multiplier earned by the hit that started the hold.
    pub fn multiplier(&self, judgment: Option<Judgment>, wrong: bool) -> u32 {
        if wrong {
            return 0;
        }
        match judgment {
            Some(Judgment::Cool) => self.cool_multiplier,
            Some(Judgment::Good) => self.good_multiplier,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    pub windows: JudgeWindows,
    pub scores: ScoreTable,
    pub double_bonus: u32,
    pub hold_bonus: HoldBonusConfig,
    /// Notes are pruned once they are this far past their hit instant.
    pub remove_after_s: f64,
    /// Flight time used when the chart has no applicable change.
    pub default_flight_time_s: f64,
    pub sample_rate: u32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            windows: JudgeWindows::default(),
            scores: ScoreTable::default(),
            double_bonus: 200,
            hold_bonus: HoldBonusConfig::default(),
            remove_after_s: 1.0,
            default_flight_time_s: 60.0 / 120.0 * 4.0,
            sample_rate: 44_100,
        }
    }
}

impl GameplayConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameplayConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.windows;
        let ordered = [w.cool_ms, w.good_ms, w.safe_ms, w.bad_ms];
        if ordered.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::Windows(format!("{ordered:?} must be finite and non-negative")));
        }
        if ordered.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::Windows(format!(
                "cool <= good <= safe <= bad required, got {ordered:?}"
            )));
        }
        if !w.start_ms.is_finite() || !w.miss_ms.is_finite() || w.miss_ms >= 0.0 {
            return Err(ConfigError::Windows(format!(
                "start {} must be finite and miss {} must be negative",
                w.start_ms, w.miss_ms
            )));
        }

        for (tier, award) in self.scores.tiers() {
            if award.wrong >= award.correct {
                return Err(ConfigError::ScoreTable {
                    tier,
                    correct: award.correct,
                    wrong: award.wrong,
                });
            }
        }

        let positive = [
            ("hold_bonus.tick_ms", self.hold_bonus.tick_ms),
            ("remove_after_s", self.remove_after_s),
            ("default_flight_time_s", self.default_flight_time_s),
            ("sample_rate", self.sample_rate as f64),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}
