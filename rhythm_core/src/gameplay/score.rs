use chart_schema::{JudgmentCounts, PlayResult};

use crate::config::ScoreTable;
use crate::gameplay::judge::Judgment;

/// Running totals of one play session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub combo: u32,
    pub max_combo: u32,
    pub counts: JudgmentCounts,
}

impl ScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Books one judgment and returns the points it awarded.
    pub fn apply(&mut self, judgment: Judgment, wrong: bool, table: &ScoreTable) -> u32 {
        let awarded = table.award(judgment, wrong);
        self.score = self.score.saturating_add(awarded);

        if judgment.keeps_combo() && !wrong {
            self.combo += 1;
        } else {
            self.combo = 0;
        }
        self.max_combo = self.max_combo.max(self.combo);

        self.count(judgment);
        if wrong {
            self.counts.wrong += 1;
        }
        awarded
    }

    /// A note ran out of time without being judged.
    pub fn expire(&mut self) {
        self.combo = 0;
        self.count(Judgment::Miss);
    }

    pub fn add_bonus(&mut self, bonus: u32) {
        self.score = self.score.saturating_add(bonus);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_result(&self, chart_title: &str, finished_at: u64) -> PlayResult {
        PlayResult {
            chart_title: chart_title.to_string(),
            score: self.score,
            max_combo: self.max_combo,
            counts: self.counts,
            finished_at,
        }
    }

    fn count(&mut self, judgment: Judgment) {
        let slot = match judgment {
            Judgment::Cool => &mut self.counts.cool,
            Judgment::Good => &mut self.counts.good,
            Judgment::Safe => &mut self.counts.safe,
            Judgment::Bad => &mut self.counts.bad,
            Judgment::Miss => &mut self.counts.miss,
        };
        *slot += 1;
    }
}
