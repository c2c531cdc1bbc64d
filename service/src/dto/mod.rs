mod mutation;
mod query;
pub mod score;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use entity::sea_orm_active_enums as stored;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{GenericError, MemberError};
pub use crate::handicap::{AwardCategory, AwardCount, Awards, MemberRef, Sex};

pub const MIN_HANDICAP: i32 = -18;
pub const MAX_HANDICAP: i32 = 45;

macro_rules! mirror_stored_enum {
    ($local:ty, $stored:ty, [$($variant:ident),+ $(,)?]) => {
        impl From<$stored> for $local {
            fn from(value: $stored) -> Self {
                type Stored = $stored;
                match value {
                    $(Stored::$variant => Self::$variant,)+
                }
            }
        }

        impl From<$local> for $stored {
            fn from(value: $local) -> Self {
                type Local = $local;
                match value {
                    $(Local::$variant => Self::$variant,)+
                }
            }
        }
    };
}

mirror_stored_enum!(Sex, stored::Sex, [Male, Female, Other]);
mirror_stored_enum!(
    AwardCategory,
    stored::AwardCategory,
    [
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
    ]
);

pub(crate) fn check_handicap(handicap: i32) -> Result<i32, GenericError> {
    if (MIN_HANDICAP..=MAX_HANDICAP).contains(&handicap) {
        Ok(handicap)
    } else {
        Err(MemberError::InvalidHandicap("Handicap must be a number between -18 and 45").into())
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct Member {
    /// Club-assigned member number.
    pub id: i32,
    pub name: String,
    pub eng_name: Option<String>,
    pub sex: Sex,
    pub handicap: Vec<i32>,
    pub is_new: bool,
}

#[derive(Deserialize, JsonSchema, Debug, Clone)]
pub struct CreateMember {
    pub id: i32,
    pub name: String,
    pub eng_name: Option<String>,
    pub sex: Sex,
    pub handicap: i32,
    pub is_new: bool,
}

/// Full replacement of a member, created when the club id is unknown.
#[derive(Deserialize, JsonSchema, Debug, Clone)]
pub struct UpdateMember {
    pub id: i32,
    pub name: String,
    pub eng_name: Option<String>,
    pub sex: Sex,
    pub handicap: Vec<i32>,
    pub is_new: bool,
}

#[derive(Deserialize, JsonSchema, Debug, Clone)]
pub struct CreateEvent {
    pub date: NaiveDate,
    /// First tee time, `HH:MM`.
    pub time: String,
    /// Club ids of the players.
    pub players: Vec<i32>,
    /// Minutes between two tee groups.
    pub tee_time_interval: u32,
    pub is_tourn: bool,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct EventSummary {
    pub id: i32,
    pub date: NaiveDate,
    pub is_tourn: bool,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct DeletedEvents {
    pub events: u64,
    pub groups: u64,
    pub rounds: u64,
}

#[derive(Deserialize, JsonSchema, Debug, Clone)]
pub struct AddRound {
    /// Club id of the member.
    pub member_id: i32,
}

#[derive(Deserialize, JsonSchema, Debug, Clone)]
pub struct MoveRound {
    pub current_group_id: i32,
    pub new_group_id: i32,
}

#[derive(Deserialize, JsonSchema, Debug, Clone)]
pub struct RoundScores {
    pub id: i32,
    #[serde(default, deserialize_with = "score::lenient_score")]
    pub front_9: Option<i32>,
    #[serde(default, deserialize_with = "score::lenient_score")]
    pub back_9: Option<i32>,
}

#[derive(Deserialize, JsonSchema, Debug, Clone)]
pub struct UpdateGroup {
    pub date: NaiveDate,
    /// Tee time, `HH:MM`.
    pub time: String,
    #[serde(default)]
    pub rounds: Vec<RoundScores>,
}

#[derive(Deserialize, JsonSchema, Debug, Clone)]
pub struct AwardAssignment {
    pub category: AwardCategory,
    /// Club ids. Repeatable categories may list a member more than once.
    pub members: Vec<i32>,
}

#[derive(Deserialize, JsonSchema, Debug, Clone)]
pub struct UpdateAwards {
    pub awards: Vec<AwardAssignment>,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct AwardsSummary {
    pub awards: Awards,
    pub birdies: Vec<AwardCount>,
    pub eagles: Vec<AwardCount>,
    pub albatrosses: Vec<AwardCount>,
}

impl From<&Awards> for AwardsSummary {
    fn from(awards: &Awards) -> Self {
        Self {
            awards: awards.clone(),
            birdies: awards.occurrence_counts(AwardCategory::Birdie),
            eagles: awards.occurrence_counts(AwardCategory::Eagle),
            albatrosses: awards.occurrence_counts(AwardCategory::Albatross),
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: i32,
    pub message: String,
    pub event_date: Option<NaiveDate>,
    pub created_at: DateTime<FixedOffset>,
}

#[derive(Deserialize, JsonSchema, Debug, Clone)]
pub struct RegisterAdmin {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, JsonSchema, Debug, Clone)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

pub(crate) fn parse_tee_time(time: &str) -> Result<NaiveTime, GenericError> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time.trim(), "%H:%M:%S"))
        .map_err(|_| GenericError::BadRequest("Time must be formatted as HH:MM"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tee_time_formats() {
        assert_eq!(
            parse_tee_time("07:30").ok(),
            NaiveTime::from_hms_opt(7, 30, 0)
        );
        assert_eq!(
            parse_tee_time(" 13:05:00").ok(),
            NaiveTime::from_hms_opt(13, 5, 0)
        );
        assert!(parse_tee_time("7.30").is_err());
    }

    #[test]
    fn handicap_range() {
        assert!(check_handicap(-18).is_ok());
        assert!(check_handicap(45).is_ok());
        assert!(check_handicap(46).is_err());
        assert!(check_handicap(-19).is_err());
    }

    #[test]
    fn stored_enums_round_trip() {
        use strum::IntoEnumIterator;
        for category in AwardCategory::iter() {
            let stored: stored::AwardCategory = category.into();
            assert_eq!(AwardCategory::from(stored), category);
        }
        assert_eq!(stored::Sex::from(Sex::Other), stored::Sex::Other);
    }

    #[test]
    fn awards_summary_counts_repeatables() {
        use crate::handicap::fixtures::member;
        let birdie = member(3, Sex::Male, &[10]);
        let awards: Awards = [
            (AwardCategory::Birdie, birdie.clone()),
            (AwardCategory::Birdie, birdie),
            (AwardCategory::MenBb, member(4, Sex::Male, &[12])),
        ]
        .into_iter()
        .collect();
        let summary = AwardsSummary::from(&awards);
        assert_eq!(summary.birdies.len(), 1);
        assert_eq!(summary.birdies[0].count, 2);
        assert!(summary.eagles.is_empty());
    }
}
