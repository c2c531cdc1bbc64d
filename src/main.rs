use std::time::Duration;

use log::{error, info};
use service::tournament_log::{run_tournament_log_job, JobOutcome};

const DEFAULT_LOG_INTERVAL_SECS: u64 = 24 * 60 * 60;

fn log_job_interval() -> Duration {
    let secs = std::env::var("TOURNAMENT_LOG_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_LOG_INTERVAL_SECS);
    Duration::from_secs(secs)
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    dotenvy::dotenv().ok();
    let db = api::connect().await;

    let job_db = db.clone();
    let period = log_job_interval();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            match run_tournament_log_job(&job_db).await {
                Ok(JobOutcome::Skipped) => info!("Scheduled tournament log skipped"),
                Ok(JobOutcome::Finished { logged, failed }) => {
                    info!("Scheduled tournament log: {logged} logged, {failed} failed")
                }
                Err(e) => error!("Scheduled tournament log failed: {:?}", e),
            }
        }
    });

    let shutdown_db = db.clone();
    api::build(db).launch().await?;
    if let Err(e) = shutdown_db.close().await {
        error!("Unable to close database pool: {e}");
    }
    Ok(())
}
