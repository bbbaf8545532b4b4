//! Handlers for the `/pokemon` resource: a user's box of owned
//! Pokémon instances.
//!
//! Reads optionally enrich each stored row with a live catalog summary;
//! a failed catalog lookup degrades that row, never the request.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pokebox_core::error::CoreError;
use pokebox_core::types::DbId;
use pokebox_db::models::instance::{CreateInstance, Instance, UpdateInstance};
use pokebox_db::repositories::InstanceRepo;
use pokebox_pokedex::{enrich_instance, enrich_instances, EnrichedInstance};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::EnrichParams;
use crate::state::AppState;

/// Response payload for the box-count endpoint.
#[derive(Debug, Serialize)]
pub struct BoxCount {
    pub user_id: DbId,
    pub count: i64,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject requests whose path `user_id` differs from the authenticated user.
fn authorize_self(auth: &AuthUser, user_id: DbId) -> Result<(), AppError> {
    if auth.user_id != user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot access another user's box".into(),
        )));
    }
    Ok(())
}

/// Fetch an instance by ID and verify the caller owns it.
///
/// Returns `NotFound` if the instance does not exist, `Forbidden` if the
/// caller is not the owner. `action` is used in the error message
/// (e.g. "view", "update", "release").
async fn find_and_authorize(
    pool: &sqlx::PgPool,
    id: DbId,
    auth: &AuthUser,
    action: &str,
) -> AppResult<Instance> {
    let instance = InstanceRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Instance",
            id,
        }))?;

    if instance.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(format!(
            "Cannot {action} another user's Pokemon"
        ))));
    }

    Ok(instance)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /pokemon/user/{user_id}?enrich=
pub async fn list_by_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<DbId>,
    Query(params): Query<EnrichParams>,
) -> AppResult<Json<Vec<EnrichedInstance>>> {
    authorize_self(&auth, user_id)?;
    let instances = InstanceRepo::list_by_user(&state.pool, user_id).await?;
    let enriched = enrich_instances(&state.pokedex, instances, params.enrich).await;
    Ok(Json(enriched))
}

/// POST /pokemon/user/{user_id}
///
/// The owner comes from the authenticated path; any owner field in the
/// body is not part of the DTO and is dropped during deserialization.
/// A missing or malformed body maps to 400.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<DbId>,
    payload: Result<Json<CreateInstance>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Instance>)> {
    authorize_self(&auth, user_id)?;
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let instance = InstanceRepo::create(&state.pool, user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(instance)))
}

/// GET /pokemon/user/{user_id}/count
pub async fn count_by_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<BoxCount>> {
    authorize_self(&auth, user_id)?;
    let count = InstanceRepo::count_by_user(&state.pool, user_id).await?;
    Ok(Json(BoxCount { user_id, count }))
}

/// GET /pokemon/{id}?enrich=
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Query(params): Query<EnrichParams>,
) -> AppResult<Json<EnrichedInstance>> {
    let instance = find_and_authorize(&state.pool, id, &auth, "view").await?;
    let enriched = enrich_instance(&state.pokedex, instance, params.enrich).await;
    Ok(Json(enriched))
}

/// PUT /pokemon/{id}
///
/// Only non-protected fields are updatable; `id`, `user_id`, and
/// `pokemon_id` in the body are silently discarded.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInstance>,
) -> AppResult<Json<Instance>> {
    find_and_authorize(&state.pool, id, &auth, "update").await?;
    let instance = InstanceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Instance",
            id,
        }))?;
    Ok(Json(instance))
}

/// DELETE /pokemon/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    find_and_authorize(&state.pool, id, &auth, "release").await?;
    let deleted = InstanceRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Instance",
            id,
        }))
    }
}
