use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::tables::{classify, performance_index, raw_performance, RuleTables};
use super::{AwardCategory, Awards, CompletedRound, MemberRef, ResolvedEvent};

/// Strokes taken off a total-stroke champion.
pub const CHAMPION_DEDUCTION: i32 = 1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GrossAdjustment {
    pub member: Option<MemberRef>,
    pub handicap: Option<i32>,
    pub adjusted: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NetAdjustment {
    pub category: AwardCategory,
    pub member: Option<MemberRef>,
    pub handicap: Option<i32>,
    pub placement_deduction: Option<i32>,
    pub performance_deduction: Option<i32>,
    pub adjusted: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NewMemberAdjustment {
    pub member: MemberRef,
    pub handicap: Option<i32>,
    pub performance_deduction: Option<i32>,
    pub adjusted: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StrokeAdjustments {
    pub men_gross: GrossAdjustment,
    pub women_gross: GrossAdjustment,
    pub men_net: Vec<NetAdjustment>,
    pub women_net: Vec<NetAdjustment>,
    pub new_members: Vec<NewMemberAdjustment>,
}

pub struct StrokeEngine<'a> {
    tables: &'a RuleTables,
    rounds: Vec<CompletedRound>,
}

impl<'a> StrokeEngine<'a> {
    pub fn new(event: &ResolvedEvent, tables: &'a RuleTables) -> Self {
        Self {
            tables,
            rounds: event.completed_rounds(),
        }
    }

    pub fn completed_rounds(&self) -> &[CompletedRound] {
        &self.rounds
    }

    fn total_score_of(&self, member: &MemberRef) -> Option<i32> {
        self.rounds
            .iter()
            .find(|round| round.member.key == member.key)
            .map(|round| round.total_score)
    }

    pub fn gross_adjustment(&self, member: Option<&MemberRef>) -> GrossAdjustment {
        let handicap = member.and_then(MemberRef::current_handicap);
        GrossAdjustment {
            member: member.cloned(),
            handicap,
            adjusted: handicap.map(|handicap| handicap - CHAMPION_DEDUCTION),
        }
    }

    /// `place_index` is zero based: 0 for the champion.
    pub fn net_adjustment(
        &self,
        category: AwardCategory,
        member: Option<&MemberRef>,
        place_index: usize,
    ) -> NetAdjustment {
        let mut adjustment = NetAdjustment {
            category,
            member: member.cloned(),
            handicap: member.and_then(MemberRef::current_handicap),
            placement_deduction: None,
            performance_deduction: None,
            adjusted: None,
        };
        let (Some(member), Some(handicap)) = (member, adjustment.handicap) else {
            return adjustment;
        };
        let Some(total_score) = self.total_score_of(member) else {
            return adjustment;
        };

        let bracket = classify(handicap);
        let placement = self.tables.placement_deduction(place_index, bracket);
        let performance = self
            .tables
            .performance_deduction(bracket, performance_index(total_score, handicap));

        adjustment.placement_deduction = Some(placement);
        adjustment.performance_deduction = Some(performance);
        adjustment.adjusted = Some(handicap - placement - performance);
        adjustment
    }

    pub fn new_member_adjustment(&self, round: &CompletedRound) -> NewMemberAdjustment {
        let Some(handicap) = round.handicap else {
            return NewMemberAdjustment {
                member: round.member.clone(),
                handicap: None,
                performance_deduction: None,
                adjusted: None,
            };
        };
        let total_score = self
            .total_score_of(&round.member)
            .unwrap_or(round.total_score);

        let deduction = if raw_performance(total_score, handicap) > 0 {
            self.tables.performance_deduction(
                classify(handicap),
                performance_index(total_score, handicap),
            )
        } else {
            0
        };

        NewMemberAdjustment {
            member: round.member.clone(),
            handicap: Some(handicap),
            performance_deduction: Some(deduction),
            adjusted: Some(handicap - deduction),
        }
    }

    pub fn adjustments(&self, awards: &Awards) -> StrokeAdjustments {
        let net = |categories: &[AwardCategory]| -> Vec<NetAdjustment> {
            categories
                .iter()
                .enumerate()
                .map(|(place, &category)| {
                    self.net_adjustment(category, awards.winner(category), place)
                })
                .collect()
        };

        StrokeAdjustments {
            men_gross: self.gross_adjustment(awards.winner(AwardCategory::MenTotalStroke)),
            women_gross: self.gross_adjustment(awards.winner(AwardCategory::WomenTotalStroke)),
            men_net: net(&AwardCategory::MEN_NET),
            women_net: net(&AwardCategory::WOMEN_NET),
            new_members: self
                .rounds
                .iter()
                .filter(|round| round.member.is_new)
                .map(|round| self.new_member_adjustment(round))
                .collect(),
        }
    }
}

/// Adjustments for the award winners and new members of `event`, using the
/// current season's rule tables.
pub fn calculate_strokes(event: &ResolvedEvent) -> StrokeAdjustments {
    StrokeEngine::new(event, &RuleTables::CURRENT).adjustments(&event.awards)
}
