// ============================
// staffdir-backend-lib/src/router.rs
// ============================
//! HTTP router and request handlers.
use std::sync::Arc;

use axum::{extract::State, middleware, routing::get, Extension, Json, Router};
use staffdir_common::Employee;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::AuthenticatedUser;
use crate::directory::EmployeeDirectory;
use crate::error::AppError;
use crate::middleware::require_basic_auth;
use crate::AppState;

/// Create the application router
///
/// Every route is gated by the Basic Auth middleware; there are no
/// unauthenticated endpoints.
pub fn create_router<D: EmployeeDirectory + Clone + 'static>(state: Arc<AppState<D>>) -> Router {
    Router::new()
        .route("/employees", get(list_employees::<D>))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth::<D>,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handler for the employee listing
async fn list_employees<D: EmployeeDirectory + Clone + 'static>(
    State(state): State<Arc<AppState<D>>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<Employee>>, AppError> {
    tracing::debug!(username = %user.username, "listing employees");
    let employees = state.directory.list_employees().await?;
    Ok(Json(employees))
}
