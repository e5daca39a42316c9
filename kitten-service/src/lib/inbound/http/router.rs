use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use auth::Claims;
use auth::JwtError;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::errors::handle_panic;
use super::errors::not_found;
use super::handlers::create_kitten::create_kitten;
use super::handlers::delete_kitten::delete_kitten;
use super::handlers::get_kitten::get_kitten;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::welcome::welcome;
use super::middleware::authenticate;
use crate::domain::kitten::ports::KittenServicePort;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub kitten_service: Arc<dyn KittenServicePort>,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_hours: Option<i64>,
}

impl AppState {
    /// Token payload issued to `user` on register and login.
    pub fn claims_for(&self, user: &User) -> Result<Claims, JwtError> {
        let claims = Claims::for_user(user.id, user.username.as_str());
        match self.jwt_expiration_hours {
            Some(hours) => claims.expiring_in_hours(hours),
            None => Ok(claims),
        }
    }
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    kitten_service: Arc<dyn KittenServicePort>,
    authenticator: Arc<Authenticator>,
    jwt_expiration_hours: Option<i64>,
) -> Router {
    let state = AppState {
        user_service,
        kitten_service,
        authenticator: Arc::clone(&authenticator),
        jwt_expiration_hours,
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // The gate wraps the whole router, fallback included.
    Router::new()
        .route("/", get(welcome))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/kittens", post(create_kitten))
        .route("/kittens/:id", get(get_kitten).delete(delete_kitten))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(authenticator, authenticate))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::header;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    use super::*;
    use crate::domain::kitten::service::KittenService;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::Username;
    use crate::domain::user::service::UserService;
    use crate::outbound::repositories::InMemoryKittenRepository;
    use crate::outbound::repositories::InMemoryUserRepository;

    const SECRET: &[u8] = b"router-test-secret-at-least-32-bytes!!";

    fn state(expiration: Option<i64>) -> AppState {
        let authenticator = Arc::new(Authenticator::new(SECRET));
        AppState {
            user_service: Arc::new(UserService::new(
                Arc::new(InMemoryUserRepository::new()),
                Arc::clone(&authenticator),
            )),
            kitten_service: Arc::new(KittenService::new(Arc::new(
                InMemoryKittenRepository::new(),
            ))),
            authenticator,
            jwt_expiration_hours: expiration,
        }
    }

    fn app() -> Router {
        let state = state(Some(1));
        create_router(
            state.user_service,
            state.kitten_service,
            state.authenticator,
            state.jwt_expiration_hours,
        )
    }

    fn user() -> User {
        User {
            id: UserId(9),
            username: Username::new("alice".to_string()).unwrap(),
            password_hash: "hash".to_string(),
        }
    }

    #[test]
    fn test_claims_for_user() {
        let claims = state(None).claims_for(&user()).unwrap();
        assert_eq!(claims.sub, "9");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp, None);

        let claims = state(Some(2)).claims_for(&user()).unwrap();
        assert_eq!(claims.exp, Some(claims.iat + 2 * 3600));
    }

    #[test]
    fn test_claims_for_out_of_range_lifetime() {
        let result = state(Some(3_000_000_000_000)).claims_for(&user());
        assert_eq!(result, Err(JwtError::LifetimeOutOfRange(3_000_000_000_000)));
    }

    #[tokio::test]
    async fn test_welcome_answers_head_without_token() {
        let request = Request::builder()
            .method("HEAD")
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[tokio::test]
    async fn test_welcome_is_public_html() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_kittens_require_token() {
        let request = Request::builder()
            .uri("/kittens/1")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");
    }

    #[tokio::test]
    async fn test_unknown_route_with_token_is_not_found() {
        let token = Authenticator::new(SECRET)
            .generate_token(&Claims::for_user(1, "alice"))
            .unwrap();
        let request = Request::builder()
            .uri("/dogs")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
