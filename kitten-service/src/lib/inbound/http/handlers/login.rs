use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiSuccess;
use super::LoginResponseData;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::errors::ApiError;
use crate::inbound::http::extract::Payload;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid credentials".to_string())
}

pub async fn login(
    State(state): State<AppState>,
    Payload(body): Payload<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // A name that could never have registered cannot log in either
    let username = Username::new(body.username).map_err(|_| invalid_credentials())?;

    let user = state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(|e| match e {
            UserError::NotFoundByUsername(_) => {
                tracing::info!(username = %username, "Login for unknown user");
                invalid_credentials()
            }
            _ => ApiError::from(e),
        })?;

    let claims = state
        .claims_for(&user)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    let result = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, &claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                tracing::info!(user_id = %user.id, "Login with wrong password");
                invalid_credentials()
            }
            auth::AuthenticationError::PasswordError(err) => {
                ApiError::InternalServerError(format!("Password verification failed: {}", err))
            }
            auth::AuthenticationError::JwtError(err) => {
                ApiError::InternalServerError(format!("Token generation failed: {}", err))
            }
        })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            token: result.access_token,
            message: "success".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}
