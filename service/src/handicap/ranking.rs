use std::cmp::Ordering;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{CompletedRound, ResolvedEvent, Sex};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LeaderboardEntry {
    /// 1 for the leader.
    pub position: usize,
    #[serde(flatten)]
    pub round: CompletedRound,
    pub net_score: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rankings {
    pub men_gross: Vec<LeaderboardEntry>,
    pub women_gross: Vec<LeaderboardEntry>,
    pub men_net: Vec<LeaderboardEntry>,
    pub women_net: Vec<LeaderboardEntry>,
}

/// Lowest total first. Ties go to the higher handicap, then the lower front nine.
pub fn gross_order(a: &CompletedRound, b: &CompletedRound) -> Ordering {
    a.total_score
        .cmp(&b.total_score)
        .then_with(|| b.handicap.cmp(&a.handicap))
        .then_with(|| a.front_9.cmp(&b.front_9))
}

/// Lowest net first. Ties go to the lower handicap, then the lower back nine,
/// then the lower front nine.
pub fn net_order(a: &CompletedRound, b: &CompletedRound) -> Ordering {
    a.net_score()
        .cmp(&b.net_score())
        .then_with(|| a.handicap.cmp(&b.handicap))
        .then_with(|| a.back_9.cmp(&b.back_9))
        .then_with(|| a.front_9.cmp(&b.front_9))
}

fn leaderboard<F>(rounds: &[CompletedRound], sex: Sex, net: bool, order: F) -> Vec<LeaderboardEntry>
where
    F: Fn(&CompletedRound, &CompletedRound) -> Ordering,
{
    let mut rounds: Vec<&CompletedRound> = rounds
        .iter()
        .filter(|round| round.member.sex == sex)
        .filter(|round| !net || round.handicap.is_some())
        .collect();
    rounds.sort_by(|a, b| order(a, b));
    rounds
        .into_iter()
        .enumerate()
        .map(|(i, round)| LeaderboardEntry {
            position: i + 1,
            round: round.clone(),
            net_score: round.net_score(),
        })
        .collect()
}

pub fn rank(rounds: &[CompletedRound]) -> Rankings {
    Rankings {
        men_gross: leaderboard(rounds, Sex::Male, false, gross_order),
        women_gross: leaderboard(rounds, Sex::Female, false, gross_order),
        men_net: leaderboard(rounds, Sex::Male, true, net_order),
        women_net: leaderboard(rounds, Sex::Female, true, net_order),
    }
}

pub fn rank_rounds(event: &ResolvedEvent) -> Rankings {
    rank(&event.completed_rounds())
}
