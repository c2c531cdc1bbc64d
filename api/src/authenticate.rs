use rocket::http::{CookieJar, Status};
use rocket::outcome::{IntoOutcome, Outcome};
use rocket::serde::json::Json;
use rocket::{
    request::{self, FromRequest},
    Request, State,
};
use rocket_okapi::{openapi, request::OpenApiFromRequest};
use sea_orm::DatabaseConnection;
use service::dto::{LoginInput, RegisterAdmin};
use service::error::{AuthError, GenericError};
use service::SESSION_COOKIE;

/// Holds the session token of a logged in admin.
#[derive(OpenApiFromRequest, Debug)]
pub struct AdminAuthentication(String);

impl AdminAuthentication {
    pub async fn new_checked(token: String, db: &DatabaseConnection) -> Option<Self> {
        match service::find_session(db, &token).await {
            Ok(Some(_)) => Some(Self(token)),
            _ => None,
        }
    }

    pub async fn remove_session(
        self,
        db: &DatabaseConnection,
        cookies: &CookieJar<'_>,
    ) -> Result<(), GenericError> {
        service::remove_session(db, &self.0, cookies).await
    }
}

#[rocket::async_trait]
impl<'a> FromRequest<'a> for AdminAuthentication {
    type Error = Json<AuthError>;
    async fn from_request(request: &'a Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(db) = request.rocket().state::<DatabaseConnection>() else {
            return None.or_error((
                Status::InternalServerError,
                AuthError::UnknownError("Database not available").into(),
            ));
        };

        let Some(cookie) = request.cookies().get_private(SESSION_COOKIE) else {
            return None.or_error((
                Status::Unauthorized,
                AuthError::Missing("No cookie found").into(),
            ));
        };

        AdminAuthentication::new_checked(cookie.value().to_string(), db)
            .await
            .or_error((
                Status::Forbidden,
                AuthError::Invalid("You do not have permission to do that").into(),
            ))
    }
}

/// An admin session when the request carries a valid one. Never rejects.
#[derive(OpenApiFromRequest, Debug)]
pub struct MaybeAdmin(Option<AdminAuthentication>);

impl MaybeAdmin {
    pub fn is_admin(&self) -> bool {
        self.0.is_some()
    }
}

#[rocket::async_trait]
impl<'a> FromRequest<'a> for MaybeAdmin {
    type Error = ();
    async fn from_request(request: &'a Request<'_>) -> request::Outcome<Self, Self::Error> {
        Outcome::Success(Self(request.guard::<AdminAuthentication>().await.succeeded()))
    }
}

#[openapi(tag = "Admin")]
#[get("/admin/check-cookie")]
pub async fn check_cookie(_admin: AdminAuthentication) -> &'static str {
    "Authenticated"
}

/// # Register an admin
///
/// The first admin can register freely. After that only a logged in admin
/// can add another one.
#[openapi(tag = "Admin")]
#[post("/admin/register", format = "json", data = "<register_data>")]
pub(crate) async fn register(
    register_data: Json<RegisterAdmin>,
    db: &State<DatabaseConnection>,
    admin: MaybeAdmin,
) -> Result<&'static str, GenericError> {
    if !admin.is_admin() && service::admin_count(db.inner()).await? > 0 {
        return Err(AuthError::Missing("Only an admin can register another admin").into());
    }
    register_data.into_inner().insert(db.inner()).await?;
    Ok("Successfully registered")
}

/// # Login
///
/// # Parameters
///
/// - `username` - The username of the admin
///
/// - `password` - The password of the admin
///
/// # Returns
///
/// A private `auth` cookie holding a new session
#[openapi(tag = "Admin")]
#[post("/admin/login", format = "json", data = "<login_data>")]
pub(crate) async fn login(
    login_data: Json<LoginInput>,
    db: &State<DatabaseConnection>,
    cookies: &CookieJar<'_>,
) -> Result<&'static str, GenericError> {
    let login_data = login_data.into_inner();
    match service::authenticate(db.inner(), &login_data.username, &login_data.password).await? {
        Some(admin) => {
            service::generate_cookie(db.inner(), admin.id, cookies).await?;
            Ok("Successfully logged in")
        }
        None => Err(AuthError::WrongPassword("Wrong username or password").into()),
    }
}

#[openapi(tag = "Admin")]
#[post("/admin/logout")]
pub(crate) async fn logout(
    db: &State<DatabaseConnection>,
    cookies: &CookieJar<'_>,
    admin: AdminAuthentication,
) -> Result<&'static str, GenericError> {
    admin.remove_session(db.inner(), cookies).await?;
    Ok("Successfully logged out")
}
