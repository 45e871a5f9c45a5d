use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentCounts {
    pub cool: u32,
    pub good: u32,
    pub safe: u32,
    pub bad: u32,
    pub miss: u32,
    /// Hits that struck the wrong shape, counted on top of their tier.
    pub wrong: u32,
}

impl JudgmentCounts {
    pub fn total(&self) -> u32 {
        self.cool + self.good + self.safe + self.bad + self.miss
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayResult {
    pub chart_title: String,
    pub score: u32,
    pub max_combo: u32,
    pub counts: JudgmentCounts,
    pub finished_at: u64,
}
