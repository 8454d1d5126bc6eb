//! Score aggregation for check verdicts

use crate::types::{CheckVerdict, ScoreSummary};

/// Number of glyphs in the score bar
pub const BAR_WIDTH: usize = 20;
const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '-';

/// Count passing verdicts and derive the truncated percentage score and bar
pub fn score_verdicts(verdicts: &[CheckVerdict]) -> ScoreSummary {
    let total_count = verdicts.len();
    let passed_count = verdicts.iter().filter(|v| v.passed).count();
    let score = calculate_score(passed_count, total_count);

    ScoreSummary {
        passed_count,
        total_count,
        score,
        bar: render_bar(score),
    }
}

/// Integer percentage, always truncated. An empty pipeline scores 0.
pub fn calculate_score(passed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (passed.min(total) * 100 / total) as u8
}

/// One filled glyph per 5 points, padded to [`BAR_WIDTH`]
pub fn render_bar(score: u8) -> String {
    let filled = (score.min(100) / 5) as usize;
    let mut bar = String::with_capacity(BAR_WIDTH * BAR_FILLED.len_utf8());
    bar.extend(std::iter::repeat(BAR_FILLED).take(filled));
    bar.extend(std::iter::repeat(BAR_EMPTY).take(BAR_WIDTH - filled));
    bar
}
