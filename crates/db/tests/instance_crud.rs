//! Integration tests for the instance repository.
//!
//! Exercises the repository layer against a real database:
//! - Create returns the row with store defaults applied
//! - Create-then-fetch round trip
//! - Partial update semantics
//! - Delete and delete-again behaviour
//! - Per-owner listing and counting

use pokebox_db::models::instance::{CreateInstance, UpdateInstance};
use pokebox_db::repositories::InstanceRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_instance(pokemon_id: i32) -> CreateInstance {
    CreateInstance {
        pokemon_id,
        nickname: None,
        level: None,
        experience: None,
        hp: None,
        attack: None,
        defense: None,
        sp_attack: None,
        sp_defense: None,
        speed: None,
        is_shiny: None,
        gender: None,
        ability: None,
        held_item: None,
    }
}

fn no_change() -> UpdateInstance {
    UpdateInstance {
        nickname: None,
        level: None,
        experience: None,
        hp: None,
        attack: None,
        defense: None,
        sp_attack: None,
        sp_defense: None,
        speed: None,
        is_shiny: None,
        gender: None,
        ability: None,
        held_item: None,
    }
}

// ---------------------------------------------------------------------------
// Test: Create applies store defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_applies_defaults(pool: PgPool) {
    let instance = InstanceRepo::create(&pool, 1, &new_instance(25))
        .await
        .unwrap();

    assert_eq!(instance.user_id, 1);
    assert_eq!(instance.pokemon_id, 25);
    assert_eq!(instance.level, 1);
    assert_eq!(instance.experience, 0);
    assert_eq!(instance.gender, "unknown");
    assert!(!instance.is_shiny);
    assert_eq!(instance.nickname, None);
    assert_eq!(instance.held_item, None);
}

// ---------------------------------------------------------------------------
// Test: Create-then-fetch returns identical field values
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_fetch_round_trip(pool: PgPool) {
    let input = CreateInstance {
        pokemon_id: 25,
        nickname: Some("Sparky".to_string()),
        level: Some(35),
        experience: Some(4200),
        hp: Some(95),
        attack: Some(55),
        defense: Some(40),
        sp_attack: Some(50),
        sp_defense: Some(50),
        speed: Some(90),
        is_shiny: Some(false),
        gender: Some("male".to_string()),
        ability: Some("Static".to_string()),
        held_item: Some("Light Ball".to_string()),
    };

    let created = InstanceRepo::create(&pool, 1, &input).await.unwrap();
    let fetched = InstanceRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created instance must be fetchable");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.user_id, 1);
    assert_eq!(fetched.pokemon_id, 25);
    assert_eq!(fetched.nickname.as_deref(), Some("Sparky"));
    assert_eq!(fetched.level, 35);
    assert_eq!(fetched.experience, 4200);
    assert_eq!(fetched.hp, 95);
    assert_eq!(fetched.attack, 55);
    assert_eq!(fetched.defense, 40);
    assert_eq!(fetched.sp_attack, 50);
    assert_eq!(fetched.sp_defense, 50);
    assert_eq!(fetched.speed, 90);
    assert_eq!(fetched.gender, "male");
    assert_eq!(fetched.ability.as_deref(), Some("Static"));
    assert_eq!(fetched.held_item.as_deref(), Some("Light Ball"));
    assert_eq!(fetched.obtained_at, created.obtained_at);
}

// ---------------------------------------------------------------------------
// Test: Partial update only touches named fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_update(pool: PgPool) {
    let created = InstanceRepo::create(&pool, 7, &new_instance(133))
        .await
        .unwrap();

    let patch = UpdateInstance {
        nickname: Some("Eeveeon".to_string()),
        level: Some(30),
        ..no_change()
    };
    let updated = InstanceRepo::update(&pool, created.id, &patch)
        .await
        .unwrap()
        .expect("row must exist");

    assert_eq!(updated.nickname.as_deref(), Some("Eeveeon"));
    assert_eq!(updated.level, 30);
    // Untouched fields keep their values.
    assert_eq!(updated.experience, created.experience);
    assert_eq!(updated.gender, created.gender);
    // Protected fields are structurally immutable.
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.user_id, 7);
    assert_eq!(updated.pokemon_id, 133);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let updated = InstanceRepo::update(&pool, 999_999, &no_change())
        .await
        .unwrap();
    assert!(updated.is_none());
}

// ---------------------------------------------------------------------------
// Test: Delete twice -- second call reports no matching row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_twice(pool: PgPool) {
    let created = InstanceRepo::create(&pool, 1, &new_instance(150))
        .await
        .unwrap();

    assert!(InstanceRepo::delete(&pool, created.id).await.unwrap());
    assert!(!InstanceRepo::delete(&pool, created.id).await.unwrap());
    assert!(InstanceRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: Listing and counting are scoped to the owner
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_and_count_by_user(pool: PgPool) {
    for pokemon_id in [1, 4, 7] {
        InstanceRepo::create(&pool, 1, &new_instance(pokemon_id))
            .await
            .unwrap();
    }
    InstanceRepo::create(&pool, 2, &new_instance(25))
        .await
        .unwrap();

    let box_one = InstanceRepo::list_by_user(&pool, 1).await.unwrap();
    assert_eq!(box_one.len(), 3);
    assert!(box_one.iter().all(|i| i.user_id == 1));

    assert_eq!(InstanceRepo::count_by_user(&pool, 1).await.unwrap(), 3);
    assert_eq!(InstanceRepo::count_by_user(&pool, 2).await.unwrap(), 1);
    assert_eq!(InstanceRepo::count_by_user(&pool, 3).await.unwrap(), 0);
}
