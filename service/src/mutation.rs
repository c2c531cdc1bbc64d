use chrono::NaiveDate;
use entity::prelude::*;
use entity::*;
use itertools::Itertools;
use log::info;
use rocket::http::{Cookie, CookieJar};
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{NotSet, TransactionTrait};
use uuid::Uuid;

use crate::dto::{self, DeletedEvents};
use crate::error::{EventError, GenericError, MemberError};
use crate::query::member_by_club_id;

pub const SESSION_COOKIE: &str = "auth";

/// Opens a new session for the admin and hands its token out as a private cookie.
pub async fn generate_cookie(
    db: &impl ConnectionTrait,
    admin_id: i32,
    cookies: &CookieJar<'_>,
) -> Result<(), GenericError> {
    let token = Uuid::new_v4().to_string();
    admin_session::ActiveModel {
        token: Set(token.clone()),
        admin_id: Set(admin_id),
        created_at: Set(chrono::Utc::now().fixed_offset()),
    }
    .insert(db)
    .await?;
    cookies.add_private(Cookie::new(SESSION_COOKIE, token));
    Ok(())
}

pub async fn remove_session(
    db: &impl ConnectionTrait,
    token: &str,
    cookies: &CookieJar<'_>,
) -> Result<(), GenericError> {
    AdminSession::delete_by_id(token.to_owned()).exec(db).await?;
    cookies.remove_private(SESSION_COOKIE);
    Ok(())
}

pub async fn delete_member(
    db: &impl ConnectionTrait,
    club_id: i32,
) -> Result<dto::Member, GenericError> {
    let member = member_by_club_id(db, club_id).await?;
    member.clone().delete(db).await?;
    info!("Deleted member {} ({})", member.club_id, member.name);
    Ok(member.into())
}

/// Removes every event on `date` together with its groups, rounds and awards.
pub async fn delete_events_on(
    db: &DatabaseConnection,
    date: NaiveDate,
) -> Result<DeletedEvents, GenericError> {
    let txn = db.begin().await?;
    let event_ids = Event::find()
        .filter(event::Column::Date.eq(date))
        .all(&txn)
        .await?
        .into_iter()
        .map(|e| e.id)
        .collect_vec();
    if event_ids.is_empty() {
        return Err(EventError::NotFound("No event on that date").into());
    }
    let group_ids = TeeGroup::find()
        .filter(tee_group::Column::EventId.is_in(event_ids.clone()))
        .all(&txn)
        .await?
        .into_iter()
        .map(|g| g.id)
        .collect_vec();

    let rounds = Round::delete_many()
        .filter(round::Column::GroupId.is_in(group_ids.clone()))
        .exec(&txn)
        .await?
        .rows_affected;
    let groups = TeeGroup::delete_many()
        .filter(tee_group::Column::Id.is_in(group_ids))
        .exec(&txn)
        .await?
        .rows_affected;
    EventAward::delete_many()
        .filter(event_award::Column::EventId.is_in(event_ids.clone()))
        .exec(&txn)
        .await?;
    let events = Event::delete_many()
        .filter(event::Column::Id.is_in(event_ids))
        .exec(&txn)
        .await?
        .rows_affected;
    txn.commit().await?;

    info!("Deleted {events} event(s) on {date}: {groups} groups, {rounds} rounds");
    Ok(DeletedEvents {
        events,
        groups,
        rounds,
    })
}

pub async fn add_round(
    db: &impl ConnectionTrait,
    group_id: i32,
    club_id: i32,
) -> Result<i32, GenericError> {
    TeeGroup::find_by_id(group_id)
        .one(db)
        .await?
        .ok_or(EventError::GroupNotFound("Group not found"))?;
    let member = member_by_club_id(db, club_id).await?;
    let round = round::ActiveModel {
        id: NotSet,
        group_id: Set(group_id),
        member_id: Set(member.id),
        front_9: Set(None),
        back_9: Set(None),
    }
    .insert(db)
    .await?;
    Ok(round.id)
}

pub async fn move_round(
    db: &impl ConnectionTrait,
    round_id: i32,
    from_group: i32,
    to_group: i32,
) -> Result<(), GenericError> {
    let round = Round::find_by_id(round_id)
        .filter(round::Column::GroupId.eq(from_group))
        .one(db)
        .await?
        .ok_or(EventError::RoundNotInGroup("Round not found in the current group"))?;
    TeeGroup::find_by_id(to_group)
        .one(db)
        .await?
        .ok_or(EventError::GroupNotFound("Target group not found"))?;

    let mut round: round::ActiveModel = round.into();
    round.group_id = Set(to_group);
    round.update(db).await?;
    Ok(())
}

pub async fn delete_round(
    db: &impl ConnectionTrait,
    group_id: i32,
    round_id: i32,
) -> Result<(), GenericError> {
    let deleted = Round::delete_many()
        .filter(round::Column::Id.eq(round_id))
        .filter(round::Column::GroupId.eq(group_id))
        .exec(db)
        .await?
        .rows_affected;
    if deleted == 0 {
        return Err(EventError::RoundNotInGroup("Round not found in group").into());
    }
    Ok(())
}

/// Appends `handicap` to the member's history. Clears the new-member flag
/// when asked to.
pub async fn append_handicap(
    db: &impl ConnectionTrait,
    member_key: i32,
    handicap: i32,
    graduate: bool,
) -> Result<(), GenericError> {
    let member = Member::find_by_id(member_key)
        .one(db)
        .await?
        .ok_or(MemberError::NotFound("Member not found"))?;
    let mut history = member.handicap.clone();
    history.push(handicap);
    let mut member: member::ActiveModel = member.into();
    member.handicap = Set(history);
    if graduate {
        member.is_new = Set(false);
    }
    member.update(db).await?;
    Ok(())
}
