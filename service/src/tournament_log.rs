//! Scheduled job that records the stroke adjustments of every finished
//! tournament and appends the adjusted handicaps to the members.

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::America::Los_Angeles;
use entity::prelude::{JobLock, TournamentLog};
use entity::{event, job_lock, tournament_log};
use log::{error, info, warn};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    NotSet, QueryFilter, TransactionTrait,
};

use crate::error::GenericError;
use crate::handicap::{
    calculate_strokes, GrossAdjustment, NetAdjustment, StrokeAdjustments, CHAMPION_DEDUCTION,
};
use crate::mutation::append_handicap;
use crate::query::{resolve_event, unlogged_tournaments};

pub const JOB_NAME: &str = "log-tourn-job";

/// A lock held longer than this belongs to a run that died.
pub const STALE_LOCK_HOURS: i64 = 6;

const NET_PLACE_NAMES: [&str; 5] = ["Champion", "Runner-up", "Third", "Fourth", "Fifth"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// Another run holds the lock.
    Skipped,
    Finished { logged: usize, failed: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandicapUpdate {
    pub member_key: i32,
    pub handicap: i32,
    pub graduate: bool,
}

/// Last calendar day that is over at the club.
pub fn last_finished_day(now: DateTime<Utc>) -> NaiveDate {
    let today = now.with_timezone(&Los_Angeles).date_naive();
    today.pred_opt().unwrap_or(today)
}

fn show(value: Option<i32>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

fn gross_line(label: &str, adjustment: &GrossAdjustment) -> String {
    match &adjustment.member {
        Some(member) => format!(
            "{label}: {} ({}) - {CHAMPION_DEDUCTION} = ({})",
            member.name,
            show(adjustment.handicap),
            show(adjustment.adjusted)
        ),
        None => format!("{label}: No winner"),
    }
}

fn net_line(label: &str, adjustment: &NetAdjustment) -> String {
    match &adjustment.member {
        Some(member) => format!(
            "{label}: {} ({}) - {} - {} = ({})",
            member.name,
            show(adjustment.handicap),
            show(adjustment.placement_deduction),
            show(adjustment.performance_deduction),
            show(adjustment.adjusted)
        ),
        None => format!("{label}: No winner"),
    }
}

pub fn render_report(date: NaiveDate, adjustments: &StrokeAdjustments) -> String {
    let mut lines = vec![
        format!("Tournament date: {}", date.format("%Y-%m-%d")),
        String::new(),
        "Gross stroke adjustments:".to_string(),
        gross_line("Champion (men)", &adjustments.men_gross),
        gross_line("Champion (women)", &adjustments.women_gross),
        String::new(),
        "Net stroke adjustments:".to_string(),
    ];
    for (sex, placers) in [("men", &adjustments.men_net), ("women", &adjustments.women_net)] {
        lines.extend(
            NET_PLACE_NAMES
                .iter()
                .zip(placers)
                .map(|(place, adjustment)| net_line(&format!("{place} ({sex})"), adjustment)),
        );
    }

    lines.push(String::new());
    lines.push("New member adjustments:".to_string());
    if adjustments.new_members.is_empty() {
        lines.push("None".to_string());
    }
    lines.extend(adjustments.new_members.iter().map(|adjustment| {
        format!(
            "{} ({}) - {} = ({})",
            adjustment.member.name,
            show(adjustment.handicap),
            show(adjustment.performance_deduction),
            show(adjustment.adjusted)
        )
    }));
    lines.join("\n")
}

/// One update per member, taken from the first adjustment in report order.
pub fn handicap_updates(adjustments: &StrokeAdjustments) -> Vec<HandicapUpdate> {
    let graduates: HashSet<i32> = adjustments
        .new_members
        .iter()
        .filter(|a| a.adjusted.is_some())
        .map(|a| a.member.key)
        .collect();

    let gross = [&adjustments.men_gross, &adjustments.women_gross]
        .into_iter()
        .map(|a| (a.member.as_ref(), a.adjusted));
    let net = adjustments
        .men_net
        .iter()
        .chain(&adjustments.women_net)
        .map(|a| (a.member.as_ref(), a.adjusted));
    let new_members = adjustments
        .new_members
        .iter()
        .map(|a| (Some(&a.member), a.adjusted));

    let mut seen = HashSet::new();
    gross
        .chain(net)
        .chain(new_members)
        .filter_map(|(member, adjusted)| Some((member?, adjusted?)))
        .filter(|(member, _)| seen.insert(member.key))
        .map(|(member, handicap)| HandicapUpdate {
            member_key: member.key,
            handicap,
            graduate: graduates.contains(&member.key),
        })
        .collect()
}

async fn acquire_lock(db: &impl ConnectionTrait) -> Result<bool, GenericError> {
    let now = Utc::now().fixed_offset();
    JobLock::insert(job_lock::ActiveModel {
        job_name: Set(JOB_NAME.to_string()),
        is_running: Set(false),
        updated_at: Set(now),
    })
    .on_conflict(
        OnConflict::column(job_lock::Column::JobName)
            .do_nothing()
            .to_owned(),
    )
    .exec_without_returning(db)
    .await?;

    let claimed = JobLock::update_many()
        .col_expr(job_lock::Column::IsRunning, Expr::value(true))
        .col_expr(job_lock::Column::UpdatedAt, Expr::value(now))
        .filter(job_lock::Column::JobName.eq(JOB_NAME))
        .filter(
            Condition::any()
                .add(job_lock::Column::IsRunning.eq(false))
                .add(job_lock::Column::UpdatedAt.lt(now - Duration::hours(STALE_LOCK_HOURS))),
        )
        .exec(db)
        .await?;
    Ok(claimed.rows_affected == 1)
}

async fn release_lock(db: &impl ConnectionTrait) -> Result<(), GenericError> {
    JobLock::update_many()
        .col_expr(job_lock::Column::IsRunning, Expr::value(false))
        .col_expr(job_lock::Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()))
        .filter(job_lock::Column::JobName.eq(JOB_NAME))
        .exec(db)
        .await?;
    Ok(())
}

fn log_row(message: String, event_date: Option<NaiveDate>) -> tournament_log::ActiveModel {
    tournament_log::ActiveModel {
        id: NotSet,
        message: Set(message),
        event_date: Set(event_date),
        created_at: Set(Utc::now().fixed_offset()),
    }
}

async fn log_tournament(db: &DatabaseConnection, event: event::Model) -> Result<(), GenericError> {
    let date = event.date;
    let resolved = resolve_event(db, event).await?;
    let adjustments = calculate_strokes(&resolved);
    let report = render_report(date, &adjustments);

    let txn = db.begin().await?;
    for update in handicap_updates(&adjustments) {
        append_handicap(&txn, update.member_key, update.handicap, update.graduate).await?;
    }
    log_row(report, Some(date)).insert(&txn).await?;
    txn.commit().await?;
    Ok(())
}

async fn log_unlogged(db: &DatabaseConnection) -> Result<JobOutcome, GenericError> {
    let tournaments = unlogged_tournaments(db, last_finished_day(Utc::now())).await?;
    let (mut logged, mut failed) = (0, 0);
    for event in tournaments {
        let date = event.date;
        match log_tournament(db, event).await {
            Ok(()) => {
                info!("Logged tournament of {date}");
                logged += 1;
            }
            Err(e) => {
                warn!("Failed to log tournament of {date}: {:?}", e);
                failed += 1;
                let message = format!("Failed to log tournament on {date}");
                TournamentLog::insert(log_row(message, Some(date)))
                    .exec(db)
                    .await?;
            }
        }
    }
    Ok(JobOutcome::Finished { logged, failed })
}

/// Runs the job unless another run holds the lock. The lock is released
/// whatever the outcome.
pub async fn run_tournament_log_job(db: &DatabaseConnection) -> Result<JobOutcome, GenericError> {
    info!("Tournament log job triggered");
    if !acquire_lock(db).await? {
        info!("Tournament log job already running");
        return Ok(JobOutcome::Skipped);
    }

    let outcome = log_unlogged(db).await;
    if let Err(e) = release_lock(db).await {
        error!("Unable to release {JOB_NAME} lock: {:?}", e);
    }
    if let Ok(JobOutcome::Finished { logged, failed }) = &outcome {
        info!("Tournament log job finished: {logged} logged, {failed} failed");
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handicap::fixtures::*;
    use crate::handicap::{AwardCategory, Awards, Sex};
    use chrono::TimeZone;

    fn adjustments() -> StrokeAdjustments {
        let champion = member(1, Sex::Male, &[12]);
        let runner_up = member(2, Sex::Male, &[20, 18]);
        let rookie = new_member(3, Sex::Female, &[34]);
        let awards: Awards = [
            (AwardCategory::MenTotalStroke, champion.clone()),
            (AwardCategory::MenNetStroke1, champion.clone()),
            (AwardCategory::MenNetStroke2, runner_up.clone()),
            (AwardCategory::WomenNetStroke1, rookie.clone()),
        ]
        .into_iter()
        .collect();
        calculate_strokes(&event(
            vec![
                round(champion, Some(38), Some(39)),
                round(runner_up, Some(41), Some(42)),
                round(rookie, Some(45), Some(47)),
            ],
            awards,
        ))
    }

    #[test]
    fn report_lists_every_place() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 12).unwrap();
        let report = render_report(date, &adjustments());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Tournament date: 2025-04-12");
        assert!(lines.contains(&"Champion (men): Member 1 (12) - 1 = (11)"));
        assert!(lines.contains(&"Champion (women): No winner"));
        assert!(lines.contains(&"Runner-up (men): Member 2 (18) - 2 - 2 = (14)"));
        assert!(lines.contains(&"Fifth (men): No winner"));
        assert!(lines.contains(&"Runner-up (women): No winner"));
        assert!(lines.contains(&"Member 3 (34) - 12 = (22)"));
    }

    #[test]
    fn first_adjustment_wins_per_member() {
        let updates = handicap_updates(&adjustments());
        assert_eq!(
            updates,
            vec![
                HandicapUpdate {
                    member_key: 1,
                    handicap: 11,
                    graduate: false
                },
                HandicapUpdate {
                    member_key: 2,
                    handicap: 14,
                    graduate: false
                },
                HandicapUpdate {
                    member_key: 3,
                    handicap: 34 - 6 - 12,
                    graduate: true
                },
            ]
        );
    }

    #[test]
    fn missing_values_render_as_not_available() {
        let incomplete = member(4, Sex::Male, &[]);
        let awards: Awards = [(AwardCategory::MenNetStroke3, incomplete.clone())]
            .into_iter()
            .collect();
        let adjustments = calculate_strokes(&event(vec![round(incomplete, Some(40), None)], awards));
        let report = render_report(NaiveDate::from_ymd_opt(2025, 5, 3).unwrap(), &adjustments);

        assert!(report.contains("Third (men): Member 4 (N/A) - N/A - N/A = (N/A)"));
        assert!(report.ends_with("New member adjustments:\nNone"));
        assert!(handicap_updates(&adjustments).is_empty());
    }

    #[test]
    fn cutoff_follows_los_angeles_calendar() {
        // 2025-04-13 05:00 UTC is still the evening of the 12th in Los Angeles.
        let now = Utc.with_ymd_and_hms(2025, 4, 13, 5, 0, 0).unwrap();
        assert_eq!(last_finished_day(now), NaiveDate::from_ymd_opt(2025, 4, 11).unwrap());
        let later = Utc.with_ymd_and_hms(2025, 4, 13, 8, 0, 0).unwrap();
        assert_eq!(last_finished_day(later), NaiveDate::from_ymd_opt(2025, 4, 12).unwrap());
    }

    use chrono::NaiveTime;
    use entity::sea_orm_active_enums::{AwardCategory as StoredCategory, Sex as StoredSex};
    use entity::{event_award, member, round, tee_group};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    fn executed(db: DatabaseConnection) -> Vec<String> {
        db.into_transaction_log()
            .iter()
            .map(|txn| format!("{txn:?}").replace('\\', ""))
            .collect()
    }

    fn tournament_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 12).unwrap()
    }

    fn stored_event() -> event::Model {
        event::Model {
            id: 1,
            date: tournament_day(),
            is_tourn: true,
        }
    }

    fn stored_member(handicap: Vec<i32>) -> member::Model {
        member::Model {
            id: 1,
            club_id: 101,
            name: "Player 1".to_string(),
            eng_name: None,
            sex: StoredSex::Male,
            handicap,
            is_new: false,
        }
    }

    fn log_model(message: &str) -> tournament_log::Model {
        tournament_log::Model {
            id: 1,
            message: message.to_string(),
            event_date: Some(tournament_day()),
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn held_lock_skips_the_run() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0), exec(0)])
            .into_connection();

        let outcome = run_tournament_log_job(&db).await.unwrap();
        assert_eq!(outcome, JobOutcome::Skipped);

        let executed = executed(db);
        assert_eq!(executed.len(), 2);
        assert!(executed[0].contains(r#"INSERT INTO "job_lock""#));
        assert!(executed[1].contains(r#"UPDATE "job_lock""#));
        assert!(executed[1].contains(r#""updated_at" <"#));
    }

    #[tokio::test]
    async fn claimed_lock_logs_tournament_in_one_transaction() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(1), exec(1)])
            .append_query_results([Vec::<tournament_log::Model>::new()])
            .append_query_results([vec![stored_event()]])
            .append_query_results([vec![tee_group::Model {
                id: 5,
                event_id: 1,
                date: tournament_day(),
                tee_time: NaiveTime::from_hms_opt(7, 30, 0).unwrap(),
            }]])
            .append_query_results([vec![round::Model {
                id: 50,
                group_id: 5,
                member_id: 1,
                front_9: Some(38),
                back_9: Some(39),
            }]])
            .append_query_results([vec![event_award::Model {
                id: 1,
                event_id: 1,
                category: StoredCategory::MenTotalStroke,
                member_id: 1,
            }]])
            .append_query_results([
                vec![stored_member(vec![12])],
                vec![stored_member(vec![12])],
                vec![stored_member(vec![12, 11])],
            ])
            .append_query_results([vec![log_model("Tournament date: 2025-04-12")]])
            .into_connection();

        let outcome = run_tournament_log_job(&db).await.unwrap();
        assert_eq!(outcome, JobOutcome::Finished { logged: 1, failed: 0 });

        let executed = executed(db);
        let txn = executed
            .iter()
            .find(|txn| txn.contains(r#"INSERT INTO "tournament_log""#))
            .unwrap();
        assert!(txn.contains(r#"UPDATE "member""#));
        assert!(txn.contains("Champion (men): Player 1 (12) - 1 = (11)"));
        assert!(executed.last().unwrap().contains(r#"UPDATE "job_lock""#));
    }

    #[tokio::test]
    async fn failed_tournament_writes_failure_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(1), exec(1)])
            .append_query_results([Vec::<tournament_log::Model>::new()])
            .append_query_results([vec![stored_event()]])
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .append_query_results([vec![log_model("Failed to log tournament on 2025-04-12")]])
            .into_connection();

        let outcome = run_tournament_log_job(&db).await.unwrap();
        assert_eq!(outcome, JobOutcome::Finished { logged: 0, failed: 1 });

        let executed = executed(db);
        assert!(executed
            .iter()
            .any(|txn| txn.contains(r#"INSERT INTO "tournament_log""#)
                && txn.contains("Failed to log tournament on 2025-04-12")));
        assert!(!executed.iter().any(|txn| txn.contains(r#"UPDATE "member""#)));
        assert!(executed.last().unwrap().contains(r#"UPDATE "job_lock""#));
    }

    #[tokio::test]
    async fn lock_is_released_when_the_run_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(1), exec(1)])
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        assert!(run_tournament_log_job(&db).await.is_err());

        let executed = executed(db);
        let lock_updates = executed
            .iter()
            .filter(|txn| txn.contains(r#"UPDATE "job_lock""#))
            .count();
        assert_eq!(lock_updates, 2);
        assert!(executed.last().unwrap().contains(r#""is_running" = "#));
    }
}
