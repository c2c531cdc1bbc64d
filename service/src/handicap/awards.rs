use std::collections::BTreeMap;

use itertools::Itertools;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use super::MemberRef;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    EnumIter,
    Display,
)]
pub enum AwardCategory {
    MenTotalStroke,
    WomenTotalStroke,
    MenNetStroke1,
    MenNetStroke2,
    MenNetStroke3,
    MenNetStroke4,
    MenNetStroke5,
    WomenNetStroke1,
    WomenNetStroke2,
    MenLongDrive,
    WomenLongDrive,
    CloseToCenter,
    MenClosePin2,
    MenClosePin7,
    MenClosePin12,
    MenClosePin16,
    WomenClosePin7,
    WomenClosePin12,
    MenBb,
    WomenBb,
    Birdie,
    Eagle,
    Albatross,
}

impl AwardCategory {
    /// Net-stroke places for men, champion first.
    pub const MEN_NET: [AwardCategory; 5] = [
        AwardCategory::MenNetStroke1,
        AwardCategory::MenNetStroke2,
        AwardCategory::MenNetStroke3,
        AwardCategory::MenNetStroke4,
        AwardCategory::MenNetStroke5,
    ];
    pub const WOMEN_NET: [AwardCategory; 2] =
        [AwardCategory::WomenNetStroke1, AwardCategory::WomenNetStroke2];

    /// Whether one event can hold several entries (including the same member
    /// more than once) for this category.
    pub fn is_repeatable(self) -> bool {
        matches!(
            self,
            AwardCategory::Birdie | AwardCategory::Eagle | AwardCategory::Albatross
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AwardCount {
    pub member: MemberRef,
    pub count: usize,
}

/// Award winners of one event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Awards(BTreeMap<AwardCategory, Vec<MemberRef>>);

impl Awards {
    /// Repeatable categories collect every entry, the others keep only the
    /// latest one.
    pub fn insert(&mut self, category: AwardCategory, member: MemberRef) {
        let entries = self.0.entry(category).or_default();
        if !category.is_repeatable() {
            entries.clear();
        }
        entries.push(member);
    }

    pub fn winner(&self, category: AwardCategory) -> Option<&MemberRef> {
        self.0.get(&category).and_then(|entries| entries.first())
    }

    pub fn entries(&self, category: AwardCategory) -> &[MemberRef] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AwardCategory, &MemberRef)> {
        self.0
            .iter()
            .flat_map(|(category, entries)| entries.iter().map(move |member| (*category, member)))
    }

    /// Entries of a category grouped by member, in order of first appearance.
    pub fn occurrence_counts(&self, category: AwardCategory) -> Vec<AwardCount> {
        let entries = self.entries(category);
        let counts = entries.iter().counts_by(|member| member.club_id);
        entries
            .iter()
            .unique_by(|member| member.club_id)
            .map(|member| AwardCount {
                member: member.clone(),
                count: counts.get(&member.club_id).copied().unwrap_or_default(),
            })
            .collect()
    }
}

impl FromIterator<(AwardCategory, MemberRef)> for Awards {
    fn from_iter<T: IntoIterator<Item = (AwardCategory, MemberRef)>>(iter: T) -> Self {
        let mut awards = Awards::default();
        for (category, member) in iter {
            awards.insert(category, member);
        }
        awards
    }
}
