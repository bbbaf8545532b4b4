//! Route definitions for the Pokémon box resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::pokemon;
use crate::state::AppState;

/// Routes mounted at `/pokemon`.
///
/// ```text
/// GET    /user/{user_id}        -> list_by_user (?enrich=, default true)
/// POST   /user/{user_id}        -> create
/// GET    /user/{user_id}/count  -> count_by_user
/// GET    /{id}                  -> get_by_id (?enrich=, default true)
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/user/{user_id}",
            get(pokemon::list_by_user).post(pokemon::create),
        )
        .route("/user/{user_id}/count", get(pokemon::count_by_user))
        .route(
            "/{id}",
            get(pokemon::get_by_id)
                .put(pokemon::update)
                .delete(pokemon::delete),
        )
}
