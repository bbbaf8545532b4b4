//! Repository for the `pokemon_instances` table.

use pokebox_core::types::DbId;
use sqlx::PgPool;

use crate::models::instance::{CreateInstance, Instance, UpdateInstance};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, pokemon_id, nickname, level, experience, hp, attack, defense, \
     sp_attack, sp_defense, speed, is_shiny, gender, ability, held_item, obtained_at";

/// Provides CRUD operations for Pokémon instances.
pub struct InstanceRepo;

impl InstanceRepo {
    /// Insert a new instance owned by `user_id`, returning the created row.
    ///
    /// `level` defaults to 1, `gender` to `"unknown"`, the numeric stats
    /// to 0, and `is_shiny` to false.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateInstance,
    ) -> Result<Instance, sqlx::Error> {
        let query = format!(
            "INSERT INTO pokemon_instances
                (user_id, pokemon_id, nickname, level, experience,
                 hp, attack, defense, sp_attack, sp_defense, speed,
                 is_shiny, gender, ability, held_item)
             VALUES ($1, $2, $3, COALESCE($4, 1), COALESCE($5, 0),
                     COALESCE($6, 0), COALESCE($7, 0), COALESCE($8, 0),
                     COALESCE($9, 0), COALESCE($10, 0), COALESCE($11, 0),
                     COALESCE($12, FALSE), COALESCE($13, 'unknown'), $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Instance>(&query)
            .bind(user_id)
            .bind(input.pokemon_id)
            .bind(&input.nickname)
            .bind(input.level)
            .bind(input.experience)
            .bind(input.hp)
            .bind(input.attack)
            .bind(input.defense)
            .bind(input.sp_attack)
            .bind(input.sp_defense)
            .bind(input.speed)
            .bind(input.is_shiny)
            .bind(&input.gender)
            .bind(&input.ability)
            .bind(&input.held_item)
            .fetch_one(pool)
            .await
    }

    /// Find an instance by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Instance>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pokemon_instances WHERE id = $1");
        sqlx::query_as::<_, Instance>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all instances owned by a user, oldest catch first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Instance>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pokemon_instances
             WHERE user_id = $1
             ORDER BY obtained_at ASC, id ASC"
        );
        sqlx::query_as::<_, Instance>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update an instance. Only non-`None` fields in `input` are applied;
    /// `id`, `user_id`, and `pokemon_id` are never touched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInstance,
    ) -> Result<Option<Instance>, sqlx::Error> {
        let query = format!(
            "UPDATE pokemon_instances SET
                nickname = COALESCE($2, nickname),
                level = COALESCE($3, level),
                experience = COALESCE($4, experience),
                hp = COALESCE($5, hp),
                attack = COALESCE($6, attack),
                defense = COALESCE($7, defense),
                sp_attack = COALESCE($8, sp_attack),
                sp_defense = COALESCE($9, sp_defense),
                speed = COALESCE($10, speed),
                is_shiny = COALESCE($11, is_shiny),
                gender = COALESCE($12, gender),
                ability = COALESCE($13, ability),
                held_item = COALESCE($14, held_item)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Instance>(&query)
            .bind(id)
            .bind(&input.nickname)
            .bind(input.level)
            .bind(input.experience)
            .bind(input.hp)
            .bind(input.attack)
            .bind(input.defense)
            .bind(input.sp_attack)
            .bind(input.sp_defense)
            .bind(input.speed)
            .bind(input.is_shiny)
            .bind(&input.gender)
            .bind(&input.ability)
            .bind(&input.held_item)
            .fetch_optional(pool)
            .await
    }

    /// Release (permanently delete) an instance by ID. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pokemon_instances WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the instances owned by a user.
    pub async fn count_by_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pokemon_instances WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
