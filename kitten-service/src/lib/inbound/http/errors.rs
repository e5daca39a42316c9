use std::any::Any;

use axum::extract::rejection::FormRejection;
use axum::extract::rejection::JsonRejection;
use axum::http::header;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::kitten::errors::KittenError;
use crate::user::errors::UserError;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Every failure a handler, extractor or the auth gate can answer with.
///
/// `IntoResponse` is the one place failures become HTTP responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    /// Missing or invalid bearer token
    Unauthenticated(String),
    /// Credentials or ownership rejected without a token problem
    Unauthorized(String),
    Forbidden(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unauthenticated(_) | ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }

    /// Error kind reported in the `name` field of the body.
    pub fn name(&self) -> &'static str {
        match self {
            ApiError::InternalServerError(_) => "Internal",
            ApiError::UnprocessableEntity(_) => "ValidationFailure",
            ApiError::BadRequest(_) => "BadRequest",
            ApiError::NotFound(_) => "NotFound",
            ApiError::Conflict(_) => "Conflict",
            ApiError::Unauthenticated(_) => "Unauthenticated",
            ApiError::Unauthorized(_) => "Unauthorized",
            ApiError::Forbidden(_) => "Forbidden",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let name = self.name();
        let challenge = matches!(self, ApiError::Unauthenticated(_));

        let message = match self {
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                INTERNAL_MESSAGE.to_string()
            }
            ApiError::UnprocessableEntity(msg)
            | ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::Unauthenticated(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg) => msg,
        };

        let body = Json(ApiErrorBody::new(name, message));

        if challenge {
            (status, [(header::WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFoundByUsername(_) => ApiError::NotFound(err.to_string()),
            UserError::UsernameAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidUsername(_) | UserError::InvalidUserId(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::Password(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<KittenError> for ApiError {
    fn from(err: KittenError) -> Self {
        match err {
            KittenError::InvalidKittenId(_) => ApiError::BadRequest(err.to_string()),
            KittenError::InvalidText(_) | KittenError::InvalidAge(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            KittenError::NotFound(_) => ApiError::NotFound(err.to_string()),
            KittenError::NotOwner { .. } => ApiError::Forbidden(err.to_string()),
            KittenError::NotFoundForOwner { .. } => ApiError::Unauthorized(err.to_string()),
            KittenError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        rejected_body(rejection.status(), rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        rejected_body(rejection.status(), rejection.body_text())
    }
}

fn rejected_body(status: StatusCode, message: String) -> ApiError {
    if status == StatusCode::UNPROCESSABLE_ENTITY {
        ApiError::UnprocessableEntity(message)
    } else if status.is_server_error() {
        ApiError::InternalServerError(message)
    } else {
        ApiError::BadRequest(message)
    }
}

/// Fallback for requests no route matched.
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Resource not found".to_string())
}

/// Answer for a handler that panicked, in the same shape as every other failure.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::InternalServerError(format!("Handler panicked: {detail}")).into_response()
}

/// Uniform failure body: `{error, name, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub name: &'static str,
    pub message: String,
}

impl ApiErrorBody {
    pub fn new(name: &'static str, message: String) -> Self {
        Self {
            error: message.clone(),
            name,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;
    use crate::kitten::models::KittenId;
    use crate::user::models::UserId;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_unauthenticated_sets_challenge() {
        let response = ApiError::Unauthenticated("Missing Authorization header".to_string())
            .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[header::WWW_AUTHENTICATE], "Bearer");

        let body = body_json(response).await;
        assert_eq!(body["name"], "Unauthenticated");
        assert_eq!(body["error"], "Missing Authorization header");
        assert_eq!(body["message"], "Missing Authorization header");
    }

    #[tokio::test]
    async fn test_unauthorized_has_no_challenge() {
        let response = ApiError::Unauthorized("Invalid credentials".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response =
            ApiError::InternalServerError("pool timed out: host=db".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["name"], "Internal");
        assert_eq!(body["message"], "Internal server error");
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_panic_maps_to_internal() {
        let response = handle_panic(Box::new("boom"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["name"], "Internal");
    }

    #[test]
    fn test_kitten_error_mapping() {
        let cases = [
            (KittenError::NotFound(KittenId(1)), StatusCode::NOT_FOUND),
            (
                KittenError::NotOwner {
                    user_id: UserId(1),
                    kitten_id: KittenId(1),
                },
                StatusCode::FORBIDDEN,
            ),
            (
                KittenError::NotFoundForOwner {
                    user_id: UserId(1),
                    kitten_id: KittenId(1),
                },
                StatusCode::UNAUTHORIZED,
            ),
            (
                KittenError::DatabaseError("down".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[test]
    fn test_user_error_mapping() {
        assert_eq!(
            ApiError::from(UserError::UsernameAlreadyExists("a".to_string())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(UserError::DatabaseError("down".to_string())).name(),
            "Internal"
        );
    }
}
