use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiSuccess;
use super::RegisterResponseData;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::errors::ApiError;
use crate::inbound::http::extract::Payload;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn register(
    State(state): State<AppState>,
    Payload(body): Payload<RegisterRequestBody>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let user = state.user_service.register(body.try_into_command()?).await?;

    let token = state
        .claims_for(&user)
        .and_then(|claims| state.authenticator.generate_token(&claims))
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        RegisterResponseData {
            message: "success".to_string(),
            token,
        },
    ))
}

/// HTTP request body for registering a user (raw JSON or form)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    username: String,
    password: String,
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterUserCommand, UserError> {
        let username = Username::new(self.username)?;
        Ok(RegisterUserCommand::new(username, self.password))
    }
}
