use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;
use sea_orm::DatabaseConnection;
use service::dto::{
    AddRound, Awards, CreateEvent, CreateMember, DeletedEvents, EventSummary, Member, MoveRound,
    UpdateAwards, UpdateGroup, UpdateMember,
};
use service::error::GenericError;
use service::tournament_log::{run_tournament_log_job, JobOutcome};

use crate::authenticate::AdminAuthentication;
use crate::query::parse_date;

/// # Create a member
///
/// `handicap` is the starting handicap, between -18 and 45.
///
/// # Errors
///
/// - `MemberError::IdConflict` - The club id is taken
///
/// - `MemberError::InvalidHandicap` - The handicap is out of range
#[openapi(tag = "Member")]
#[post("/members", format = "json", data = "<member>")]
pub(crate) async fn create_member(
    member: Json<CreateMember>,
    db: &State<DatabaseConnection>,
    _admin: AdminAuthentication,
) -> Result<Json<Member>, GenericError> {
    Ok(Json(member.into_inner().insert(db.inner()).await?))
}

/// # Update or create a member
///
/// Replaces the whole member, handicap history included.
#[openapi(tag = "Member")]
#[put("/members", format = "json", data = "<member>")]
pub(crate) async fn update_member(
    member: Json<UpdateMember>,
    db: &State<DatabaseConnection>,
    _admin: AdminAuthentication,
) -> Result<Json<Member>, GenericError> {
    Ok(Json(member.into_inner().upsert(db.inner()).await?))
}

#[openapi(tag = "Member")]
#[delete("/members/<id>")]
pub(crate) async fn delete_member(
    id: i32,
    db: &State<DatabaseConnection>,
    _admin: AdminAuthentication,
) -> Result<Json<Member>, GenericError> {
    Ok(Json(service::delete_member(db.inner(), id).await?))
}

/// # Schedule an event
///
/// Players are shuffled into groups of four, women kept together, and each
/// group tees off `tee_time_interval` minutes after the previous one.
#[openapi(tag = "Event")]
#[post("/events", format = "json", data = "<event>")]
pub(crate) async fn create_event(
    event: Json<CreateEvent>,
    db: &State<DatabaseConnection>,
    _admin: AdminAuthentication,
) -> Result<Json<EventSummary>, GenericError> {
    Ok(Json(event.into_inner().insert(db.inner()).await?))
}

#[openapi(tag = "Event")]
#[delete("/events/date/<date>")]
pub(crate) async fn delete_event(
    date: &str,
    db: &State<DatabaseConnection>,
    _admin: AdminAuthentication,
) -> Result<Json<DeletedEvents>, GenericError> {
    let date = parse_date(date)?;
    Ok(Json(service::delete_events_on(db.inner(), date).await?))
}

#[openapi(tag = "Event")]
#[put("/events/<id>/awards", format = "json", data = "<awards>")]
pub(crate) async fn update_awards(
    id: i32,
    awards: Json<UpdateAwards>,
    db: &State<DatabaseConnection>,
    _admin: AdminAuthentication,
) -> Result<Json<Awards>, GenericError> {
    Ok(Json(awards.into_inner().replace(db.inner(), id).await?))
}

/// # Update a group
///
/// Sets the tee date and time. Scores that are missing or not numeric keep
/// their stored value.
#[openapi(tag = "Group")]
#[put("/groups/<id>", format = "json", data = "<group>")]
pub(crate) async fn update_group(
    id: i32,
    group: Json<UpdateGroup>,
    db: &State<DatabaseConnection>,
    _admin: AdminAuthentication,
) -> Result<&'static str, GenericError> {
    group.into_inner().apply(db.inner(), id).await?;
    Ok("Group updated")
}

/// Returns the id of the new round.
#[openapi(tag = "Group")]
#[post("/groups/<id>/rounds", format = "json", data = "<round>")]
pub(crate) async fn add_round(
    id: i32,
    round: Json<AddRound>,
    db: &State<DatabaseConnection>,
    _admin: AdminAuthentication,
) -> Result<Json<i32>, GenericError> {
    Ok(Json(
        service::add_round(db.inner(), id, round.into_inner().member_id).await?,
    ))
}

#[openapi(tag = "Group")]
#[put("/rounds/<id>/move", format = "json", data = "<target>")]
pub(crate) async fn move_round(
    id: i32,
    target: Json<MoveRound>,
    db: &State<DatabaseConnection>,
    _admin: AdminAuthentication,
) -> Result<&'static str, GenericError> {
    let target = target.into_inner();
    service::move_round(db.inner(), id, target.current_group_id, target.new_group_id).await?;
    Ok("Round moved")
}

#[openapi(tag = "Group")]
#[delete("/groups/<group_id>/rounds/<round_id>")]
pub(crate) async fn delete_round(
    group_id: i32,
    round_id: i32,
    db: &State<DatabaseConnection>,
    _admin: AdminAuthentication,
) -> Result<&'static str, GenericError> {
    service::delete_round(db.inner(), group_id, round_id).await?;
    Ok("Round deleted")
}

/// # Run the tournament log job now
#[openapi(tag = "Handicap")]
#[post("/jobs/tournament-log")]
pub(crate) async fn run_tournament_log(
    db: &State<DatabaseConnection>,
    _admin: AdminAuthentication,
) -> Result<String, GenericError> {
    match run_tournament_log_job(db.inner()).await? {
        JobOutcome::Skipped => Ok("Tournament log job already running".to_string()),
        JobOutcome::Finished { logged, failed } => Ok(format!(
            "Logged {logged} tournament(s), {failed} failed"
        )),
    }
}
