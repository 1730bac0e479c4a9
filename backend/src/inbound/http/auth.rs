//! Bearer-token authentication for HTTP handlers.
//!
//! Handlers declare an [`AuthenticatedUser`] parameter and receive an
//! already-validated user id; token parsing and resolution happen here,
//! before the handler body runs. The domain never sees raw tokens.

use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;

use crate::domain::ports::AccessTokenError;
use crate::domain::{Error, UserId};
use crate::inbound::http::state::HttpState;

/// Extract the token from an `Authorization: Bearer <token>` header value.
///
/// Rejects non-bearer schemes and empty tokens.
fn bearer_token(header: &str) -> Result<&str, Error> {
    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| Error::unauthorized("expected a bearer token"))?;
    if token.is_empty() {
        return Err(Error::unauthorized("empty bearer token"));
    }
    Ok(token)
}

fn map_token_error(error: AccessTokenError) -> Error {
    match error {
        AccessTokenError::Connection { message } | AccessTokenError::Query { message } => {
            Error::generic(message)
        }
    }
}

/// The authenticated caller, resolved from the request's bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    /// Validated user id owning the presented token.
    pub user_id: UserId,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned);

        Box::pin(async move {
            let state =
                state.ok_or_else(|| Error::internal("http state is not configured"))?;
            let header = header.ok_or_else(|| Error::unauthorized("missing bearer token"))?;
            let token = bearer_token(&header)?;

            let user_id = state
                .access_tokens
                .verify(token)
                .await
                .map_err(map_token_error)?
                .ok_or_else(|| Error::unauthorized("invalid bearer token"))?;

            Ok(Self { user_id })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::FixtureAccessTokenVerifier;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test, web};
    use rstest::rstest;
    use std::sync::Arc;

    #[rstest]
    #[case("Basic dXNlcjpwYXNz")]
    #[case("bearer lowercase-scheme")]
    #[case("Bearer ")]
    fn malformed_headers_are_unauthorised(#[case] header: &str) {
        let err = bearer_token(header).expect_err("malformed header");
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[test]
    fn well_formed_header_yields_token() {
        let token = bearer_token("Bearer abc123").expect("valid header");
        assert_eq!(token, "abc123");
    }

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState {
            hotels: Arc::new(crate::domain::ports::FixtureHotelsQuery),
            access_tokens: Arc::new(FixtureAccessTokenVerifier),
        };
        App::new().app_data(web::Data::new(state)).route(
            "/whoami",
            web::get().to(|user: AuthenticatedUser| async move {
                HttpResponse::Ok().body(user.user_id.to_string())
            }),
        )
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorised() {
        let app = actix_test::init_service(test_app()).await;
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/whoami").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn unknown_token_is_unauthorised() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/whoami")
                .insert_header((AUTHORIZATION, "Bearer XXXXXX"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn known_token_resolves_the_user() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/whoami")
                .insert_header((
                    AUTHORIZATION,
                    format!("Bearer {}", FixtureAccessTokenVerifier::TOKEN),
                ))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = actix_test::read_body(res).await;
        assert_eq!(body, FixtureAccessTokenVerifier::USER_ID.to_string().as_bytes());
    }
}
