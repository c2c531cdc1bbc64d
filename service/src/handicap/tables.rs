//! Rule tables used by the stroke adjustment engine.
//!
//! Both tables are season data. A new season gets a new [`RuleTables`] value
//! next to [`RuleTables::CURRENT`]; the engine code never changes for it.

use schemars::JsonSchema;
use serde::Serialize;

pub const BRACKET_COUNT: usize = 6;
pub const PLACEMENT_ROWS: usize = 5;
pub const PERFORMANCE_COLUMNS: usize = 30;

/// Net score a player of any handicap is expected to shoot.
pub const REFERENCE_SCORE: i32 = 68;

/// Highest performance index the engine will look up. Column 29 of the
/// performance table is never reached.
pub const MAX_PERFORMANCE_INDEX: i32 = 28;

/// Inclusive upper handicap bound of brackets 0 to 4. Anything above the last
/// bound is bracket 5.
const BRACKET_UPPER_BOUNDS: [i32; BRACKET_COUNT - 1] = [9, 15, 21, 26, 32];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema)]
pub struct Bracket(usize);

impl Bracket {
    pub fn index(self) -> usize {
        self.0
    }
}

pub fn classify(handicap: i32) -> Bracket {
    let index = BRACKET_UPPER_BOUNDS
        .iter()
        .position(|&bound| handicap <= bound)
        .unwrap_or(BRACKET_UPPER_BOUNDS.len());
    Bracket(index)
}

/// How far under the handicap-adjusted reference score a round finished,
/// clamped into the range the performance table is looked up with.
pub fn performance_index(total_score: i32, handicap: i32) -> usize {
    raw_performance(total_score, handicap).clamp(0, MAX_PERFORMANCE_INDEX) as usize
}

pub fn raw_performance(total_score: i32, handicap: i32) -> i32 {
    REFERENCE_SCORE
        .saturating_add(handicap)
        .saturating_sub(total_score)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTables {
    pub season: &'static str,
    /// Row is the finishing place in the net-stroke ranking (0 = 1st), column
    /// the handicap bracket.
    pub placement: [[i32; BRACKET_COUNT]; PLACEMENT_ROWS],
    /// Row is the handicap bracket, column the performance index.
    pub performance: [[i32; PERFORMANCE_COLUMNS]; BRACKET_COUNT],
}

impl RuleTables {
    pub const CURRENT: RuleTables = RuleTables {
        season: "2025",
        placement: [
            [1, 2, 3, 4, 5, 6],
            [0, 1, 2, 3, 4, 5],
            [0, 0, 1, 2, 3, 4],
            [0, 0, 0, 1, 2, 3],
            [0, 0, 0, 0, 1, 2],
        ],
        performance: [
            [0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 6, 6, 6, 6, 7, 7, 7, 7],
            [0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10],
            [0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 12, 12, 13, 13, 14, 14, 15],
            [0, 1, 2, 2, 3, 4, 4, 5, 6, 6, 7, 8, 8, 9, 10, 10, 11, 12, 12, 13, 14, 14, 15, 16, 16, 17, 18, 18, 19, 20],
            [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29],
            [0, 1, 2, 3, 5, 6, 7, 8, 9, 10, 12, 13, 14, 16, 17, 18, 19, 20, 21, 22, 24, 25, 26, 28, 29, 30, 31, 32, 33, 35],
        ],
    };

    /// Zero when the place is outside the table.
    pub fn placement_deduction(&self, place_index: usize, bracket: Bracket) -> i32 {
        self.placement
            .get(place_index)
            .and_then(|row| row.get(bracket.index()))
            .copied()
            .unwrap_or(0)
    }

    pub fn performance_deduction(&self, bracket: Bracket, performance_index: usize) -> i32 {
        self.performance
            .get(bracket.index())
            .and_then(|row| row.get(performance_index))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_boundaries_belong_to_lower_bracket() {
        assert_eq!(classify(-18).index(), 0);
        assert_eq!(classify(9).index(), 0);
        assert_eq!(classify(10).index(), 1);
        assert_eq!(classify(15).index(), 1);
        assert_eq!(classify(16).index(), 2);
        assert_eq!(classify(21).index(), 2);
        assert_eq!(classify(22).index(), 3);
        assert_eq!(classify(26).index(), 3);
        assert_eq!(classify(27).index(), 4);
        assert_eq!(classify(32).index(), 4);
        assert_eq!(classify(33).index(), 5);
        assert_eq!(classify(45).index(), 5);
    }

    #[test]
    fn classify_is_monotonic() {
        let brackets: Vec<usize> = (-18..=60).map(|h| classify(h).index()).collect();
        assert!(brackets.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(brackets.first(), Some(&0));
        assert_eq!(brackets.last(), Some(&5));
    }

    #[test]
    fn performance_rows_never_decrease() {
        for row in RuleTables::CURRENT.performance.iter() {
            assert!(row.windows(2).all(|w| w[0] <= w[1]), "{row:?}");
        }
    }

    #[test]
    fn placement_favours_higher_places_and_brackets() {
        let placement = RuleTables::CURRENT.placement;
        for row in placement.iter() {
            assert!(row.windows(2).all(|w| w[0] <= w[1]));
        }
        for col in 0..BRACKET_COUNT {
            assert!((1..PLACEMENT_ROWS).all(|r| placement[r][col] <= placement[r - 1][col]));
        }
    }

    #[test]
    fn performance_index_is_clamped() {
        assert_eq!(performance_index(83, 18), 3);
        assert_eq!(performance_index(120, 18), 0);
        assert_eq!(performance_index(60, 40), 28);
        assert_eq!(raw_performance(60, 40), 48);
        assert_eq!(performance_index(i32::MIN, i32::MAX), 28);
        assert_eq!(performance_index(i32::MAX, i32::MIN), 0);
    }

    #[test]
    fn out_of_range_lookups_are_zero() {
        let tables = RuleTables::CURRENT;
        assert_eq!(tables.placement_deduction(5, classify(40)), 0);
        assert_eq!(tables.performance_deduction(classify(40), 30), 0);
        assert_eq!(tables.placement_deduction(0, classify(40)), 6);
        assert_eq!(tables.performance_deduction(classify(40), 29), 35);
    }
}
