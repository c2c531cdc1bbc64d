use std::collections::HashMap;

use bcrypt::{hash, DEFAULT_COST};
use entity::prelude::{Event, EventAward, Member as MemberEntity, Round, TeeGroup};
use entity::{event, event_award, member, round, tee_group};
use itertools::Itertools;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, TransactionTrait,
};

use crate::error::EventError;
use crate::scheduling::{arrange_players, tee_times};

use super::*;

impl CreateMember {
    pub async fn insert<C>(self, db: &C) -> Result<Member, GenericError>
    where
        C: ConnectionTrait,
    {
        let taken = MemberEntity::find()
            .filter(member::Column::ClubId.eq(self.id))
            .count(db)
            .await?;
        if taken > 0 {
            return Err(MemberError::IdConflict("A member with that id already exists").into());
        }
        let member = self.into_active_model()?.insert(db).await?;
        info!("Created member {} ({})", member.club_id, member.name);
        Ok(member.into())
    }
}

impl UpdateMember {
    pub async fn upsert<C>(self, db: &C) -> Result<Member, GenericError>
    where
        C: ConnectionTrait,
    {
        let existing = MemberEntity::find()
            .filter(member::Column::ClubId.eq(self.id))
            .one(db)
            .await?;
        let active = self.into_active_model(existing)?;
        let member = if active.id.is_not_set() {
            active.insert(db).await?
        } else {
            active.update(db).await?
        };
        Ok(member.into())
    }
}

impl RegisterAdmin {
    pub async fn insert<C>(&self, db: &C) -> Result<(), GenericError>
    where
        C: ConnectionTrait,
    {
        if self.username.trim().is_empty() || self.email.trim().is_empty() {
            return Err(GenericError::BadRequest("Username and email are required"));
        }
        if self.password.is_empty() {
            return Err(GenericError::BadRequest("Password is required"));
        }
        let hashed_password = hash(&self.password, DEFAULT_COST).map_err(|e| {
            error!("Unable to hash password: {e}");
            GenericError::UnknownError("Unable to hash password")
        })?;
        self.active_admin(hashed_password).insert(db).await?;
        info!("Registered admin {}", self.username.trim());
        Ok(())
    }
}

impl CreateEvent {
    pub async fn insert(self, db: &DatabaseConnection) -> Result<EventSummary, GenericError> {
        let first_tee = parse_tee_time(&self.time)?;
        let club_ids = self.players.iter().copied().unique().collect_vec();
        if club_ids.is_empty() {
            return Err(GenericError::BadRequest("At least one player is required"));
        }

        let txn = db.begin().await?;
        let taken = Event::find()
            .filter(event::Column::Date.eq(self.date))
            .count(&txn)
            .await?;
        if taken > 0 {
            return Err(EventError::DateTaken("An event is already scheduled on that date").into());
        }

        let players = MemberEntity::find()
            .filter(member::Column::ClubId.is_in(club_ids.clone()))
            .all(&txn)
            .await?;
        if players.len() != club_ids.len() {
            return Err(MemberError::NotFound("Unknown member id in players").into());
        }
        let (women, men): (Vec<member::Model>, Vec<member::Model>) = players
            .into_iter()
            .partition(|player| player.sex == stored::Sex::Female);
        let groups = arrange_players(
            men.into_iter().map(|m| m.id).collect(),
            women.into_iter().map(|m| m.id).collect(),
            &mut StdRng::from_entropy(),
        );

        let event = event::ActiveModel {
            id: NotSet,
            date: Set(self.date),
            is_tourn: Set(self.is_tourn),
        }
        .insert(&txn)
        .await?;

        let times = tee_times(first_tee, self.tee_time_interval, groups.len());
        for (players, tee_time) in groups.iter().zip(times) {
            let group = tee_group::ActiveModel {
                id: NotSet,
                event_id: Set(event.id),
                date: Set(self.date),
                tee_time: Set(tee_time),
            }
            .insert(&txn)
            .await?;
            Round::insert_many(players.iter().map(|&member_id| round::ActiveModel {
                id: NotSet,
                group_id: Set(group.id),
                member_id: Set(member_id),
                front_9: Set(None),
                back_9: Set(None),
            }))
            .exec(&txn)
            .await?;
        }
        txn.commit().await?;

        info!(
            "Scheduled event on {} with {} players in {} groups",
            event.date,
            club_ids.len(),
            groups.len()
        );
        Ok(event.into())
    }
}

impl UpdateGroup {
    pub async fn apply(self, db: &DatabaseConnection, group_id: i32) -> Result<(), GenericError> {
        let tee_time = parse_tee_time(&self.time)?;
        let txn = db.begin().await?;

        let group = TeeGroup::find_by_id(group_id)
            .one(&txn)
            .await?
            .ok_or(EventError::GroupNotFound("Group not found"))?;
        let mut group: tee_group::ActiveModel = group.into();
        group.date = Set(self.date);
        group.tee_time = Set(tee_time);
        group.update(&txn).await?;

        for scores in self.rounds {
            let round = Round::find_by_id(scores.id)
                .filter(round::Column::GroupId.eq(group_id))
                .one(&txn)
                .await?
                .ok_or(EventError::RoundNotInGroup("Round not found in group"))?;
            let mut round: round::ActiveModel = round.into();
            if let Some(front_9) = scores.front_9 {
                round.front_9 = Set(Some(front_9));
            }
            if let Some(back_9) = scores.back_9 {
                round.back_9 = Set(Some(back_9));
            }
            if round.is_changed() {
                round.update(&txn).await?;
            }
        }
        txn.commit().await?;
        Ok(())
    }
}

impl UpdateAwards {
    fn check_winner_counts(&self) -> Result<(), GenericError> {
        let counts = self
            .awards
            .iter()
            .flat_map(|a| a.members.iter().map(move |_| a.category))
            .counts();
        if counts
            .iter()
            .any(|(category, count)| !category.is_repeatable() && *count > 1)
        {
            return Err(EventError::TooManyWinners("Only one winner allowed for that award").into());
        }
        Ok(())
    }

    /// Replaces every award row of the event.
    pub async fn replace(self, db: &DatabaseConnection, event_id: i32) -> Result<Awards, GenericError> {
        self.check_winner_counts()?;
        let txn = db.begin().await?;
        Event::find_by_id(event_id)
            .one(&txn)
            .await?
            .ok_or(EventError::NotFound("Event not found"))?;

        let club_ids = self
            .awards
            .iter()
            .flat_map(|a| a.members.iter().copied())
            .unique()
            .collect_vec();
        let members: HashMap<i32, member::Model> = MemberEntity::find()
            .filter(member::Column::ClubId.is_in(club_ids.clone()))
            .all(&txn)
            .await?
            .into_iter()
            .map(|m| (m.club_id, m))
            .collect();
        if members.len() != club_ids.len() {
            return Err(MemberError::NotFound("Unknown member id in awards").into());
        }

        EventAward::delete_many()
            .filter(event_award::Column::EventId.eq(event_id))
            .exec(&txn)
            .await?;

        let mut awards = Awards::default();
        let mut rows = Vec::new();
        for assignment in self.awards {
            for club_id in assignment.members {
                let member = members
                    .get(&club_id)
                    .ok_or(MemberError::NotFound("Unknown member id in awards"))?;
                rows.push(event_award::ActiveModel {
                    id: NotSet,
                    event_id: Set(event_id),
                    category: Set(assignment.category.into()),
                    member_id: Set(member.id),
                });
                awards.insert(assignment.category, member.clone().into());
            }
        }
        if !rows.is_empty() {
            EventAward::insert_many(rows).exec(&txn).await?;
        }
        txn.commit().await?;
        Ok(awards)
    }
}
