extern crate rocket;
use rocket::async_test;

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{NaiveDate, NaiveTime, Utc};
    use entity::sea_orm_active_enums::{AwardCategory, Sex};
    use entity::{admin, admin_session, event, event_award, member, round, tee_group};
    use migration::MigratorTrait;
    use rocket::figment::Profile;
    use rocket::http::{ContentType, Status};
    use rocket::local::asynchronous::Client;
    use rocket::Config;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::{json, Value};

    async fn client(db: MockDatabase) -> Client {
        let config = Config {
            profile: Profile::Global,
            log_level: rocket::config::LogLevel::Critical,
            secret_key: rocket::config::SecretKey::from(&[1u8; 64]),
            ..Default::default()
        };
        let rocket = api::build(db.into_connection()).configure(config);
        Client::tracked(rocket).await.expect("valid rocket instance")
    }

    fn stored_member(id: i32, sex: Sex, handicap: Vec<i32>, is_new: bool) -> member::Model {
        member::Model {
            id,
            club_id: 2000 + id,
            name: format!("Golfer {id}"),
            eng_name: None,
            sex,
            handicap,
            is_new,
        }
    }

    fn saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 12).unwrap()
    }

    /// Rows for one tournament, in the order the event is resolved.
    fn tournament_db() -> MockDatabase {
        let round = |id, member_id, front_9, back_9| round::Model {
            id,
            group_id: 3,
            member_id,
            front_9,
            back_9,
        };
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![event::Model {
                id: 1,
                date: saturday(),
                is_tourn: true,
            }]])
            .append_query_results([vec![tee_group::Model {
                id: 3,
                event_id: 1,
                date: saturday(),
                tee_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            }]])
            .append_query_results([vec![
                round(30, 1, Some(41), Some(42)),
                round(31, 2, Some(38), Some(39)),
                round(32, 3, Some(46), Some(46)),
                round(33, 4, Some(50), None),
            ]])
            .append_query_results([vec![
                event_award::Model {
                    id: 1,
                    event_id: 1,
                    category: AwardCategory::MenNetStroke2,
                    member_id: 1,
                },
                event_award::Model {
                    id: 2,
                    event_id: 1,
                    category: AwardCategory::Birdie,
                    member_id: 2,
                },
                event_award::Model {
                    id: 3,
                    event_id: 1,
                    category: AwardCategory::Birdie,
                    member_id: 2,
                },
            ]])
            .append_query_results([vec![
                stored_member(1, Sex::Male, vec![20, 18], false),
                stored_member(2, Sex::Male, vec![12], false),
                stored_member(3, Sex::Female, vec![34], true),
                stored_member(4, Sex::Female, vec![22], false),
            ]])
    }

    #[async_test]
    async fn migrations_are_registered() {
        assert_eq!(migration::Migrator::migrations().len(), 3);
    }

    #[async_test]
    async fn lists_members() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
            stored_member(1, Sex::Male, vec![18], false),
            stored_member(2, Sex::Female, vec![25, 24], true),
        ]]);
        let client = client(db).await;

        let response = client.get("/api/members").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body[0]["id"], json!(2001));
        assert_eq!(body[1]["sex"], json!("Female"));
        assert_eq!(body[1]["handicap"], json!([25, 24]));
    }

    #[async_test]
    async fn unknown_member_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<member::Model>::new()]);
        let client = client(db).await;

        let response = client.get("/api/members/404").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
    }

    #[async_test]
    async fn creating_a_member_needs_an_admin() {
        let client = client(MockDatabase::new(DatabaseBackend::Postgres)).await;

        let response = client
            .post("/api/members")
            .header(ContentType::JSON)
            .body(
                json!({
                    "id": 3001,
                    "name": "New Golfer",
                    "sex": "Male",
                    "handicap": 20,
                    "is_new": true
                })
                .to_string(),
            )
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Unauthorized);
    }

    #[async_test]
    async fn login_opens_a_session() {
        let hashed_password = bcrypt::hash("fairway", 4).unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![admin::Model {
                id: 1,
                username: "starter".to_string(),
                email: "starter@club.test".to_string(),
                hashed_password,
            }]])
            .append_query_results([vec![admin_session::Model {
                token: "session".to_string(),
                admin_id: 1,
                created_at: Utc::now().fixed_offset(),
            }]])
            .append_query_results([vec![admin_session::Model {
                token: "session".to_string(),
                admin_id: 1,
                created_at: Utc::now().fixed_offset(),
            }]]);
        let client = client(db).await;

        let response = client.get("/api/admin/check-cookie").dispatch().await;
        assert_eq!(response.status(), Status::Unauthorized);

        let response = client
            .post("/api/admin/login")
            .header(ContentType::JSON)
            .body(json!({ "username": "starter", "password": "fairway" }).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let response = client.get("/api/admin/check-cookie").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
    }

    #[async_test]
    async fn wrong_password_is_rejected() {
        let hashed_password = bcrypt::hash("fairway", 4).unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![
            admin::Model {
                id: 1,
                username: "starter".to_string(),
                email: "starter@club.test".to_string(),
                hashed_password,
            },
        ]]);
        let client = client(db).await;

        let response = client
            .post("/api/admin/login")
            .header(ContentType::JSON)
            .body(json!({ "username": "starter", "password": "bunker" }).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Forbidden);
    }

    #[async_test]
    async fn event_rankings() {
        let client = client(tournament_db()).await;

        let response = client.get("/api/events/1/rankings").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.unwrap();

        let men_gross = body["men_gross"].as_array().unwrap();
        assert_eq!(men_gross.len(), 2);
        assert_eq!(men_gross[0]["member"]["club_id"], json!(2002));
        assert_eq!(men_gross[0]["total_score"], json!(77));
        assert_eq!(men_gross[0]["position"], json!(1));

        let women_gross = body["women_gross"].as_array().unwrap();
        assert_eq!(women_gross.len(), 1);
        assert_eq!(women_gross[0]["net_score"], json!(58));
    }

    #[async_test]
    async fn event_adjustments() {
        let client = client(tournament_db()).await;

        let response = client.get("/api/events/1/adjustments").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.unwrap();

        assert_eq!(body["men_net"][1]["adjusted"], json!(14));
        assert_eq!(body["men_net"][0]["member"], Value::Null);
        assert_eq!(body["men_gross"]["member"], Value::Null);
        assert_eq!(body["new_members"][0]["adjusted"], json!(22));
    }

    #[async_test]
    async fn event_awards_count_birdies() {
        let client = client(tournament_db()).await;

        let response = client.get("/api/events/1/awards").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.unwrap();

        assert_eq!(body["birdies"][0]["count"], json!(2));
        assert_eq!(body["birdies"][0]["member"]["club_id"], json!(2002));
        assert_eq!(body["awards"]["Birdie"].as_array().map(Vec::len), Some(2));
    }

    #[async_test]
    async fn malformed_date_is_a_bad_request() {
        let client = client(MockDatabase::new(DatabaseBackend::Postgres)).await;

        let response = client.get("/api/events/date/12-04-2025").dispatch().await;
        assert_eq!(response.status(), Status::BadRequest);
    }
}
