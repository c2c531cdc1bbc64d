mod authenticate;
mod mutation;
mod query;

use rocket_okapi::openapi_get_routes;

#[macro_use]
extern crate rocket;

use authenticate::*;
use dotenvy::dotenv;
use mutation::*;
use query::*;
use rocket::{Build, Rocket, Route};
use sea_orm::DatabaseConnection;

use rocket_okapi::rapidoc::{make_rapidoc, GeneralConfig, HideShowConfig, RapiDocConfig};
use rocket_okapi::settings::UrlObject;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};

pub use authenticate::AdminAuthentication;

#[catch(404)]
fn general_not_found() -> &'static str {
    "Api endpoint not found"
}

pub fn routes() -> Vec<Route> {
    openapi_get_routes![
        register,
        login,
        logout,
        check_cookie,
        list_members,
        get_member,
        create_member,
        update_member,
        delete_member,
        current_event,
        past_events,
        event_by_date,
        event_rankings,
        event_adjustments,
        event_awards,
        create_event,
        delete_event,
        update_awards,
        get_group,
        update_group,
        add_round,
        move_round,
        delete_round,
        handicap_history,
        run_tournament_log,
    ]
}

/// Connects to `DATABASE_URL`. Panics when it is missing or unreachable,
/// there is nothing to serve without it.
pub async fn connect() -> DatabaseConnection {
    dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL not set");
    sea_orm::Database::connect(url)
        .await
        .expect("Unable to connect to DATABASE_URL")
}

pub fn build(db: DatabaseConnection) -> Rocket<Build> {
    rocket::build()
        .manage(db)
        .mount("/api", routes())
        .mount(
            "/api/swagger",
            make_swagger_ui(&SwaggerUIConfig {
                url: "../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .mount(
            "/api/",
            make_rapidoc(&RapiDocConfig {
                general: GeneralConfig {
                    spec_urls: vec![UrlObject::new("General", "./openapi.json")],
                    ..Default::default()
                },
                hide_show: HideShowConfig {
                    allow_spec_url_load: false,
                    allow_spec_file_load: false,
                    ..Default::default()
                },
                ..Default::default()
            }),
        )
        .register("/api", catchers![general_not_found])
}

pub async fn launch() -> Rocket<Build> {
    build(connect().await)
}
