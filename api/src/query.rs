use chrono::{NaiveDate, Utc};
use chrono_tz::America::Los_Angeles;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use sea_orm::DatabaseConnection;
use service::dto::{AwardsSummary, EventSummary, LogEntry, Member};
use service::error::GenericError;
use service::handicap::{
    calculate_strokes, rank_rounds, Rankings, ResolvedEvent, StrokeAdjustments, TeeGroupEntry,
};

pub(crate) fn club_today() -> NaiveDate {
    Utc::now().with_timezone(&Los_Angeles).date_naive()
}

pub(crate) fn parse_date(date: &str) -> Result<NaiveDate, GenericError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| GenericError::BadRequest("Date must be formatted as YYYY-MM-DD"))
}

#[openapi(tag = "Member")]
#[get("/members")]
pub(crate) async fn list_members(
    db: &State<DatabaseConnection>,
) -> Result<Json<Vec<Member>>, GenericError> {
    Ok(Json(service::list_members(db.inner()).await?))
}

/// # Member by club id
#[openapi(tag = "Member")]
#[get("/members/<id>")]
pub(crate) async fn get_member(
    db: &State<DatabaseConnection>,
    id: i32,
) -> Result<Json<Member>, GenericError> {
    let member = service::member_by_club_id(db.inner(), id).await?;
    Ok(Json(member.into()))
}

/// # Current event
///
/// The closest event dated yesterday or later, with groups, rounds and winners.
#[openapi(tag = "Event")]
#[get("/events/current")]
pub(crate) async fn current_event(
    db: &State<DatabaseConnection>,
) -> Result<Json<ResolvedEvent>, GenericError> {
    Ok(Json(service::current_event(db.inner(), club_today()).await?))
}

#[openapi(tag = "Event")]
#[get("/events/past")]
pub(crate) async fn past_events(
    db: &State<DatabaseConnection>,
) -> Result<Json<Vec<EventSummary>>, GenericError> {
    Ok(Json(service::past_events(db.inner(), club_today()).await?))
}

/// # Event on a date
///
/// `date` is formatted as `YYYY-MM-DD`.
#[openapi(tag = "Event")]
#[get("/events/date/<date>", rank = 1)]
pub(crate) async fn event_by_date(
    db: &State<DatabaseConnection>,
    date: &str,
) -> Result<Json<ResolvedEvent>, GenericError> {
    let date = parse_date(date)?;
    Ok(Json(service::event_by_date(db.inner(), date).await?))
}

/// # Gross and net leaderboards
#[openapi(tag = "Event")]
#[get("/events/<id>/rankings")]
pub(crate) async fn event_rankings(
    db: &State<DatabaseConnection>,
    id: i32,
) -> Result<Json<Rankings>, GenericError> {
    let event = service::event_by_id(db.inner(), id).await?;
    Ok(Json(rank_rounds(&event)))
}

/// # Stroke adjustments
///
/// What the tournament log job would append to the winners' handicaps.
#[openapi(tag = "Event")]
#[get("/events/<id>/adjustments")]
pub(crate) async fn event_adjustments(
    db: &State<DatabaseConnection>,
    id: i32,
) -> Result<Json<StrokeAdjustments>, GenericError> {
    let event = service::event_by_id(db.inner(), id).await?;
    Ok(Json(calculate_strokes(&event)))
}

#[openapi(tag = "Event")]
#[get("/events/<id>/awards")]
pub(crate) async fn event_awards(
    db: &State<DatabaseConnection>,
    id: i32,
) -> Result<Json<AwardsSummary>, GenericError> {
    let event = service::event_by_id(db.inner(), id).await?;
    Ok(Json(AwardsSummary::from(&event.awards)))
}

#[openapi(tag = "Group")]
#[get("/groups/<id>")]
pub(crate) async fn get_group(
    db: &State<DatabaseConnection>,
    id: i32,
) -> Result<Json<TeeGroupEntry>, GenericError> {
    Ok(Json(service::group_by_id(db.inner(), id).await?))
}

/// # Handicap history
///
/// Tournament log entries, newest first.
#[openapi(tag = "Handicap")]
#[get("/handicap-history")]
pub(crate) async fn handicap_history(
    db: &State<DatabaseConnection>,
) -> Result<Json<Vec<LogEntry>>, GenericError> {
    Ok(Json(service::tournament_logs(db.inner()).await?))
}
