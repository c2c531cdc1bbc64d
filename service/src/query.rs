use std::collections::HashMap;

use bcrypt::verify;
use chrono::{Duration, NaiveDate};
use entity::prelude::*;
use entity::*;
use itertools::Itertools;
use log::warn;
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, QueryOrder, QuerySelect};

use crate::dto::{self, EventSummary, LogEntry};
use crate::error::{EventError, GenericError, MemberError};
use crate::handicap::{AwardCategory, Awards, MemberRef, ResolvedEvent, RoundEntry, TeeGroupEntry};

pub async fn authenticate(
    db: &impl ConnectionTrait,
    username: &str,
    password: &str,
) -> Result<Option<admin::Model>, GenericError> {
    let admin = Admin::find()
        .filter(admin::Column::Username.eq(username.trim()))
        .one(db)
        .await?;
    Ok(admin.filter(|admin| verify(password, &admin.hashed_password).unwrap_or(false)))
}

pub async fn admin_count(db: &impl ConnectionTrait) -> Result<u64, GenericError> {
    Ok(Admin::find().count(db).await?)
}

pub async fn find_session(
    db: &impl ConnectionTrait,
    token: &str,
) -> Result<Option<admin_session::Model>, GenericError> {
    Ok(AdminSession::find_by_id(token.to_owned()).one(db).await?)
}

pub async fn list_members(db: &impl ConnectionTrait) -> Result<Vec<dto::Member>, GenericError> {
    Ok(Member::find()
        .order_by_asc(member::Column::ClubId)
        .all(db)
        .await?
        .into_iter()
        .map(dto::Member::from)
        .collect())
}

pub async fn member_by_club_id(
    db: &impl ConnectionTrait,
    club_id: i32,
) -> Result<member::Model, GenericError> {
    Member::find()
        .filter(member::Column::ClubId.eq(club_id))
        .one(db)
        .await?
        .ok_or(MemberError::NotFound("Member not found").into())
}

/// The nearest event that is not over yet. Yesterday still counts so that
/// scores can be entered the morning after.
pub async fn current_event(
    db: &impl ConnectionTrait,
    today: NaiveDate,
) -> Result<ResolvedEvent, GenericError> {
    let since = today - Duration::days(1);
    let event = Event::find()
        .filter(event::Column::Date.gte(since))
        .order_by_asc(event::Column::Date)
        .one(db)
        .await?
        .ok_or(EventError::NotFound("No upcoming event"))?;
    resolve_event(db, event).await
}

pub async fn past_events(
    db: &impl ConnectionTrait,
    today: NaiveDate,
) -> Result<Vec<EventSummary>, GenericError> {
    Ok(Event::find()
        .filter(event::Column::Date.lt(today))
        .order_by_desc(event::Column::Date)
        .all(db)
        .await?
        .into_iter()
        .map(EventSummary::from)
        .collect())
}

pub async fn event_by_id(
    db: &impl ConnectionTrait,
    event_id: i32,
) -> Result<ResolvedEvent, GenericError> {
    let event = Event::find_by_id(event_id)
        .one(db)
        .await?
        .ok_or(EventError::NotFound("Event not found"))?;
    resolve_event(db, event).await
}

pub async fn event_by_date(
    db: &impl ConnectionTrait,
    date: NaiveDate,
) -> Result<ResolvedEvent, GenericError> {
    let event = Event::find()
        .filter(event::Column::Date.eq(date))
        .one(db)
        .await?
        .ok_or(EventError::NotFound("No event on that date"))?;
    resolve_event(db, event).await
}

async fn members_by_key(
    db: &impl ConnectionTrait,
    keys: Vec<i32>,
) -> Result<HashMap<i32, MemberRef>, GenericError> {
    Ok(Member::find()
        .filter(member::Column::Id.is_in(keys))
        .all(db)
        .await?
        .into_iter()
        .map(|m| (m.id, MemberRef::from(m)))
        .collect())
}

fn round_entries(rounds: Vec<round::Model>, members: &HashMap<i32, MemberRef>) -> Vec<RoundEntry> {
    rounds
        .into_iter()
        .filter_map(|round| match members.get(&round.member_id) {
            Some(member) => Some(RoundEntry {
                round_id: round.id,
                member: member.clone(),
                front_9: round.front_9,
                back_9: round.back_9,
            }),
            None => {
                warn!("Round {} references missing member {}", round.id, round.member_id);
                None
            }
        })
        .collect()
}

/// Loads groups, rounds, award rows and every member they reference.
///
/// Queries run in that order: groups, rounds, awards, members.
pub async fn resolve_event(
    db: &impl ConnectionTrait,
    event: event::Model,
) -> Result<ResolvedEvent, GenericError> {
    let groups = TeeGroup::find()
        .filter(tee_group::Column::EventId.eq(event.id))
        .order_by_asc(tee_group::Column::TeeTime)
        .order_by_asc(tee_group::Column::Id)
        .all(db)
        .await?;
    let rounds = Round::find()
        .filter(round::Column::GroupId.is_in(groups.iter().map(|g| g.id).collect_vec()))
        .order_by_asc(round::Column::Id)
        .all(db)
        .await?;
    let award_rows = EventAward::find()
        .filter(event_award::Column::EventId.eq(event.id))
        .order_by_asc(event_award::Column::Id)
        .all(db)
        .await?;

    let keys = rounds
        .iter()
        .map(|r| r.member_id)
        .chain(award_rows.iter().map(|a| a.member_id))
        .unique()
        .collect_vec();
    let members = members_by_key(db, keys).await?;

    let mut rounds_by_group = rounds.into_iter().into_group_map_by(|r| r.group_id);
    let groups = groups
        .into_iter()
        .map(|group| TeeGroupEntry {
            group_id: group.id,
            date: group.date,
            tee_time: group.tee_time,
            rounds: round_entries(rounds_by_group.remove(&group.id).unwrap_or_default(), &members),
        })
        .collect();
    let awards: Awards = award_rows
        .into_iter()
        .filter_map(|row| {
            members
                .get(&row.member_id)
                .map(|member| (AwardCategory::from(row.category), member.clone()))
        })
        .collect();

    Ok(ResolvedEvent {
        event_id: event.id,
        date: event.date,
        is_tourn: event.is_tourn,
        groups,
        awards,
    })
}

/// Queries: group, rounds, members.
pub async fn group_by_id(
    db: &impl ConnectionTrait,
    group_id: i32,
) -> Result<TeeGroupEntry, GenericError> {
    let group = TeeGroup::find_by_id(group_id)
        .one(db)
        .await?
        .ok_or(EventError::GroupNotFound("Group not found"))?;
    let rounds = Round::find()
        .filter(round::Column::GroupId.eq(group.id))
        .order_by_asc(round::Column::Id)
        .all(db)
        .await?;
    let members = members_by_key(db, rounds.iter().map(|r| r.member_id).unique().collect()).await?;
    Ok(TeeGroupEntry {
        group_id: group.id,
        date: group.date,
        tee_time: group.tee_time,
        rounds: round_entries(rounds, &members),
    })
}

/// Tournaments on or before `cutoff` without a log row for their date.
pub async fn unlogged_tournaments(
    db: &impl ConnectionTrait,
    cutoff: NaiveDate,
) -> Result<Vec<event::Model>, GenericError> {
    let logged: Vec<Option<NaiveDate>> = TournamentLog::find()
        .select_only()
        .column(tournament_log::Column::EventDate)
        .filter(tournament_log::Column::EventDate.is_not_null())
        .into_tuple()
        .all(db)
        .await?;
    let logged = logged.into_iter().flatten().collect_vec();

    Ok(Event::find()
        .filter(event::Column::IsTourn.eq(true))
        .filter(event::Column::Date.lte(cutoff))
        .filter(event::Column::Date.is_not_in(logged))
        .order_by_asc(event::Column::Date)
        .all(db)
        .await?)
}

pub async fn tournament_logs(db: &impl ConnectionTrait) -> Result<Vec<LogEntry>, GenericError> {
    Ok(TournamentLog::find()
        .order_by_desc(tournament_log::Column::CreatedAt)
        .order_by_desc(tournament_log::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(LogEntry::from)
        .collect())
}
