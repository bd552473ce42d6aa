//! KDSQ questionnaire state.
//!
//! Fifteen self-report items, each answered on the ordinal scale
//! 0 (never) / 1 (sometimes) / 2 (often). The raw score is the plain
//! sum, range 0..=30.

use anyhow::{anyhow, Result};

pub const KDSQ_ITEM_COUNT: usize = 15;
pub const MAX_ITEM_ANSWER: u8 = 2;

/// Mutable answer sheet for the 15-item questionnaire. Items are
/// addressed 1-based, matching how the questions are numbered on
/// screen.
#[derive(Debug, Clone, Default)]
pub struct QuestionnaireResponse {
    answers: [Option<u8>; KDSQ_ITEM_COUNT],
}

impl QuestionnaireResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the answer for one item. Overwrites any earlier answer
    /// for the same item.
    pub fn set_answer(&mut self, item: usize, answer: u8) -> Result<()> {
        if item == 0 || item > KDSQ_ITEM_COUNT {
            return Err(anyhow!(
                "questionnaire item {item} out of range 1..={KDSQ_ITEM_COUNT}"
            ));
        }
        if answer > MAX_ITEM_ANSWER {
            return Err(anyhow!(
                "answer {answer} for item {item} out of range 0..={MAX_ITEM_ANSWER}"
            ));
        }
        self.answers[item - 1] = Some(answer);
        Ok(())
    }

    pub fn answer(&self, item: usize) -> Option<u8> {
        self.answers.get(item.wrapping_sub(1)).copied().flatten()
    }

    /// 1-based item numbers still waiting for an answer.
    pub fn missing_items(&self) -> Vec<usize> {
        self.answers
            .iter()
            .enumerate()
            .filter(|(_, answer)| answer.is_none())
            .map(|(idx, _)| idx + 1)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(|answer| answer.is_some())
    }

    /// Raw KDSQ score: sum of all answered items. Unanswered items
    /// contribute nothing; callers validate completeness first.
    pub fn total_score(&self) -> u32 {
        self.answers
            .iter()
            .flatten()
            .map(|answer| u32::from(*answer))
            .sum()
    }
}
