use log::error;
use rocket::response::Responder;
use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::okapi::openapi3::Responses;
use rocket_okapi::response::OpenApiResponderInner;
use schemars::{JsonSchema, Map};
use sea_orm::{DbErr, SqlErr};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Serialize, Deserialize, JsonSchema, Debug, Responder)]
pub enum GenericError {
    #[response(status = 500)]
    UnknownError(&'static str),
    AuthError(AuthError),
    MemberError(MemberError),
    EventError(EventError),
    #[response(status = 403)]
    ViolatesForeignKey(&'static str),
    #[response(status = 409)]
    UniqueError(&'static str),
    #[response(status = 422)]
    CheckError(&'static str),
    #[response(status = 404)]
    NotFound(&'static str),
    #[response(status = 409)]
    Conflict(&'static str),
    #[response(status = 400)]
    BadRequest(&'static str),
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Responder)]
pub enum MemberError {
    #[response(status = 404)]
    NotFound(&'static str),
    #[response(status = 400)]
    InvalidHandicap(&'static str),
    #[response(status = 409)]
    IdConflict(&'static str),
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Responder)]
pub enum EventError {
    #[response(status = 404)]
    NotFound(&'static str),
    #[response(status = 409)]
    DateTaken(&'static str),
    #[response(status = 404)]
    GroupNotFound(&'static str),
    #[response(status = 404)]
    RoundNotInGroup(&'static str),
    #[response(status = 400)]
    TooManyWinners(&'static str),
}

#[derive(Debug, JsonSchema, Deserialize, Serialize, Responder)]
pub enum AuthError {
    #[response(status = 401)]
    Missing(&'static str),
    #[response(status = 403)]
    Invalid(&'static str),
    #[response(status = 403)]
    WrongPassword(&'static str),
    #[response(status = 500)]
    UnknownError(&'static str),
}

impl From<AuthError> for GenericError {
    fn from(e: AuthError) -> Self {
        Self::AuthError(e)
    }
}

impl From<MemberError> for GenericError {
    fn from(e: MemberError) -> Self {
        Self::MemberError(e)
    }
}

impl From<EventError> for GenericError {
    fn from(e: EventError) -> Self {
        Self::EventError(e)
    }
}

impl From<DbErr> for GenericError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(constraint)) => {
                error!("Unique constraint violated: {constraint}");
                Self::UniqueError("Resource already exists")
            }
            Some(SqlErr::ForeignKeyConstraintViolation(constraint)) => {
                error!("Foreign key constraint violated: {constraint}");
                Self::ViolatesForeignKey("Resource is referenced by or references a missing row")
            }
            _ => {
                error!("Database error: {:#?}", e);
                Self::UnknownError("Unknown database error")
            }
        }
    }
}

impl OpenApiResponderInner for GenericError {
    fn responses(_: &mut OpenApiGenerator) -> rocket_okapi::Result<Responses> {
        use rocket_okapi::okapi::openapi3::{RefOr, Response as OpenApiResponse};

        let mut responses = Map::new();
        responses.insert(
            "400".to_string(),
            RefOr::Object(OpenApiResponse {
                description: "\
                # [400 Bad Request](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/400)\n\
                The request given is wrongly formatted or data asked could not be fulfilled. \
                "
                .to_string(),
                ..Default::default()
            }),
        );
        responses.insert(
            "401".to_string(),
            RefOr::Object(OpenApiResponse {
                description: "\
                # [401 Unauthorized](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/401)\n\
                The request needs an admin session and no `auth` cookie was sent. \
                "
                .to_string(),
                ..Default::default()
            }),
        );
        responses.insert(
            "403".to_string(),
            RefOr::Object(OpenApiResponse {
                description: "\
                # [403 Forbidden](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/403)\n\
                The session or credentials are invalid, or the change would break a reference between records. \
                "
                .to_string(),
                ..Default::default()
            }),
        );
        responses.insert(
            "404".to_string(),
            RefOr::Object(OpenApiResponse {
                description: "\
                # [404 Not Found](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/404)\n\
                This response is given when you request a page that does not exists.\
                "
                .to_string(),
                ..Default::default()
            }),
        );
        responses.insert(
            "409".to_string(),
            RefOr::Object(OpenApiResponse {
                description: "\
                # [409 Conflict](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/409)\n\
                This response is given when you try to create a resource that already exists. \
                "
                .to_string(),
                ..Default::default()
            }),
        );
        responses.insert(
            "422".to_string(),
            RefOr::Object(OpenApiResponse {
                description: "\
                # [422 Unprocessable Entity](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/422)\n\
                This response is given when you request body is not correctly formatted. \
                ".to_string(),
                ..Default::default()
            }),
        );
        responses.insert(
            "500".to_string(),
            RefOr::Object(OpenApiResponse {
                description: "\
                # [500 Internal Server Error](https://developer.mozilla.org/en-US/docs/Web/HTTP/Status/500)\n\
                This response is given when something went wrong on the server. \
                ".to_string(),
                ..Default::default()
            }),
        );
        Ok(Responses {
            responses,
            ..Default::default()
        })
    }
}
