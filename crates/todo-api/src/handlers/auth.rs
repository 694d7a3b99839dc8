//! Token authorizer endpoint.

use axum::Json;
use axum::extract::State;
use tracing::info;

use todo_auth::AuthorizerResponse;

use crate::dto::request::AuthorizerEvent;
use crate::state::AppState;

/// POST /api/authorize
///
/// Always 200: a rejected token yields a deny policy, not an error status.
pub async fn authorize(
    State(state): State<AppState>,
    Json(event): Json<AuthorizerEvent>,
) -> Json<AuthorizerResponse> {
    info!(
        event_type = %event.event_type,
        method_arn = %event.method_arn,
        "Authorizing a user"
    );

    let decision = state
        .authorizer
        .authorize(event.authorization_token.as_deref())
        .await;

    Json(decision.into_policy())
}
