//! Stroke adjustment engine.
//!
//! Everything in here works on an already resolved [`ResolvedEvent`] and never
//! touches the database. Missing scores, handicaps or winners degrade to
//! `None` fields instead of errors.

mod adjustment;
mod awards;
mod ranking;
pub mod tables;

pub use adjustment::*;
pub use awards::*;
pub use ranking::*;
pub use tables::{classify, Bracket, RuleTables};

use chrono::{NaiveDate, NaiveTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// A member as seen from a round or an award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MemberRef {
    /// Storage key. Rounds and award winners are matched on this.
    pub key: i32,
    pub club_id: i32,
    pub name: String,
    pub eng_name: Option<String>,
    pub sex: Sex,
    pub handicap: Vec<i32>,
    pub is_new: bool,
}

impl MemberRef {
    pub fn current_handicap(&self) -> Option<i32> {
        self.handicap.last().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RoundEntry {
    pub round_id: i32,
    pub member: MemberRef,
    pub front_9: Option<i32>,
    pub back_9: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TeeGroupEntry {
    pub group_id: i32,
    pub date: NaiveDate,
    pub tee_time: NaiveTime,
    pub rounds: Vec<RoundEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResolvedEvent {
    pub event_id: i32,
    pub date: NaiveDate,
    pub is_tourn: bool,
    pub groups: Vec<TeeGroupEntry>,
    pub awards: Awards,
}

/// A round with both nines recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompletedRound {
    pub round_id: i32,
    pub member: MemberRef,
    pub front_9: i32,
    pub back_9: i32,
    pub total_score: i32,
    pub handicap: Option<i32>,
}

impl CompletedRound {
    pub fn net_score(&self) -> Option<i32> {
        self.handicap
            .and_then(|handicap| self.total_score.checked_sub(handicap))
    }
}

impl ResolvedEvent {
    /// Completed rounds in group order, then round order within a group.
    /// A round whose total does not fit is left out.
    pub fn completed_rounds(&self) -> Vec<CompletedRound> {
        self.groups
            .iter()
            .flat_map(|group| group.rounds.iter())
            .filter_map(|round| {
                let (front_9, back_9) = (round.front_9?, round.back_9?);
                Some(CompletedRound {
                    round_id: round.round_id,
                    member: round.member.clone(),
                    front_9,
                    back_9,
                    total_score: front_9.checked_add(back_9)?,
                    handicap: round.member.current_handicap(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn member(key: i32, sex: Sex, handicap: &[i32]) -> MemberRef {
        MemberRef {
            key,
            club_id: 1000 + key,
            name: format!("Member {key}"),
            eng_name: None,
            sex,
            handicap: handicap.to_vec(),
            is_new: false,
        }
    }

    pub fn new_member(key: i32, sex: Sex, handicap: &[i32]) -> MemberRef {
        MemberRef {
            is_new: true,
            ..member(key, sex, handicap)
        }
    }

    pub fn round(member: MemberRef, front_9: Option<i32>, back_9: Option<i32>) -> RoundEntry {
        RoundEntry {
            round_id: member.key * 10,
            member,
            front_9,
            back_9,
        }
    }

    pub fn event(rounds: Vec<RoundEntry>, awards: Awards) -> ResolvedEvent {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let tee_time = NaiveTime::from_hms_opt(7, 30, 0).unwrap();
        let groups = rounds
            .chunks(4)
            .enumerate()
            .map(|(i, rounds)| TeeGroupEntry {
                group_id: i as i32 + 1,
                date,
                tee_time,
                rounds: rounds.to_vec(),
            })
            .collect();
        ResolvedEvent {
            event_id: 1,
            date,
            is_tourn: true,
            groups,
            awards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn incomplete_rounds_are_not_flattened() {
        let event = event(
            vec![
                round(member(1, Sex::Male, &[18]), Some(40), Some(43)),
                round(member(2, Sex::Male, &[10]), Some(38), None),
                round(member(3, Sex::Female, &[]), Some(50), Some(49)),
            ],
            Awards::default(),
        );
        let rounds = event.completed_rounds();
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].total_score, 83);
        assert_eq!(rounds[0].net_score(), Some(65));
        assert_eq!(rounds[1].handicap, None);
        assert_eq!(rounds[1].net_score(), None);
    }

    #[test]
    fn overflowing_totals_are_not_flattened() {
        let event = event(
            vec![
                round(member(1, Sex::Male, &[18]), Some(i32::MAX), Some(1)),
                round(member(2, Sex::Male, &[10]), Some(40), Some(41)),
            ],
            Awards::default(),
        );
        let rounds = event.completed_rounds();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].member.key, 2);

        let rankings = rank_rounds(&event);
        assert_eq!(rankings.men_gross.len(), 1);
        assert_eq!(rankings.men_gross[0].round.total_score, 81);
    }
}
