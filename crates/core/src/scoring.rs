//! Scoring module - line-clear points and level progression
//!
//! Rules:
//! - Placing a block is worth nothing by itself; only cleared lines score.
//! - A clear of `n` simultaneous lines (rows and columns counted separately)
//!   scores `base × multiplier(n) × level`.
//! - The multiplier table rewards multi-line clears super-linearly
//!   (1, 3, 6, 10, then 15 for five or more).
//! - Level is `lines_total / lines_per_level + 1`.

use crate::config::Rules;

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub lines: u32,
    pub multiplier: u32,
    /// Level used for this clear (the level before the clear is applied)
    pub level: u32,
    pub total: u32,
}

/// Multiplier for `lines` simultaneous lines
pub fn line_multiplier(rules: &Rules, lines: usize) -> u32 {
    match rules.line_multipliers.get(lines) {
        Some(&m) => m,
        None => rules.line_multiplier_max,
    }
}

/// Calculate the score for clearing `lines` lines at `level` (1-based)
pub fn calculate_line_score(rules: &Rules, lines: usize, level: u32) -> ScoreResult {
    let multiplier = line_multiplier(rules, lines);
    let total = rules
        .base_line_score
        .saturating_mul(multiplier)
        .saturating_mul(level);
    ScoreResult {
        lines: lines as u32,
        multiplier,
        level,
        total,
    }
}

/// Level management
/// Level increases every `lines_per_level` lines, starting at 1
pub fn calculate_level(rules: &Rules, total_lines: u32) -> u32 {
    total_lines / rules.lines_per_level.max(1) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_table() {
        let rules = Rules::default();
        assert_eq!(line_multiplier(&rules, 0), 0);
        assert_eq!(line_multiplier(&rules, 1), 1);
        assert_eq!(line_multiplier(&rules, 2), 3);
        assert_eq!(line_multiplier(&rules, 3), 6);
        assert_eq!(line_multiplier(&rules, 4), 10);
        assert_eq!(line_multiplier(&rules, 5), 15);
        assert_eq!(line_multiplier(&rules, 16), 15);
    }

    #[test]
    fn test_line_scores() {
        let rules = Rules::default();

        // Level 1
        assert_eq!(calculate_line_score(&rules, 0, 1).total, 0);
        assert_eq!(calculate_line_score(&rules, 1, 1).total, 100);
        assert_eq!(calculate_line_score(&rules, 2, 1).total, 300);
        assert_eq!(calculate_line_score(&rules, 3, 1).total, 600);
        assert_eq!(calculate_line_score(&rules, 4, 1).total, 1000);
        assert_eq!(calculate_line_score(&rules, 6, 1).total, 1500);

        // Level 3
        assert_eq!(calculate_line_score(&rules, 1, 3).total, 300);
        assert_eq!(calculate_line_score(&rules, 2, 3).total, 900);
    }

    #[test]
    fn test_custom_base_score() {
        let rules = Rules::default().with_base_line_score(10);
        assert_eq!(calculate_line_score(&rules, 2, 2).total, 60);
    }

    #[test]
    fn test_score_saturates() {
        let rules = Rules::default().with_base_line_score(u32::MAX);
        assert_eq!(calculate_line_score(&rules, 4, 9).total, u32::MAX);
    }

    #[test]
    fn test_level_calculation() {
        let rules = Rules::default();
        assert_eq!(calculate_level(&rules, 0), 1);
        assert_eq!(calculate_level(&rules, 9), 1);
        assert_eq!(calculate_level(&rules, 10), 2);
        assert_eq!(calculate_level(&rules, 29), 3);
        assert_eq!(calculate_level(&rules, 100), 11);
    }
}
