/**
 * API Route Handlers
 *
 * This module wires the JSON API endpoints onto the router.
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 * - `POST /api/auth/logout` - Clear the session cookie
 *
 * ## Gated (session cookie required)
 * - `GET /api/auth/me` - Get current user info
 * - `GET /api/todos` - List tasks
 * - `POST /api/todos` - Create task
 * - `POST /api/todos/reorder` - Bulk status/order update
 * - `PUT /api/todos/{id}` - Partial update
 * - `DELETE /api/todos/{id}` - Delete task
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::{get_me, login, logout, signup};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;
use crate::backend::todos::{create_todo, delete_todo, list_todos, reorder_todos, update_todo};

/// Configure API routes
///
/// Gated routes get `auth_middleware` as a route layer, so it runs only when
/// one of them matched. Unmatched paths fall through to the router's fallback.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth gate
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout));

    let gated = Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/reorder", post(reorder_todos))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router.merge(public).merge(gated)
}
