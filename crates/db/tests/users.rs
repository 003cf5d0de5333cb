//! Integration tests for registration, level updates, and profiles.

use assert_matches::assert_matches;
use ludo_core::error::CoreError;
use ludo_core::level::CourseLevel;
use ludo_core::roles::ROLE_USER;
use ludo_db::models::progress::CompletedLesson;
use ludo_db::models::user::CreateUser;
use ludo_db::repositories::{ProgressRepo, UserRepo};
use ludo_db::{seed, DbError};
use sqlx::PgPool;

fn new_user(username: &str, language: Option<&str>) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password_hash: format!("hash-of-{username}"),
        current_language: language.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_applies_defaults(pool: PgPool) {
    seed::seed_all(&pool).await.unwrap();

    let user = UserRepo::register(&pool, &new_user("duo", Some("en")))
        .await
        .unwrap();

    assert_eq!(user.username, "duo");
    assert_eq!(user.role, ROLE_USER);
    assert_eq!(user.current_language.as_deref(), Some("en"));
    assert_eq!(user.current_level, CourseLevel::Unknown.as_str());
    assert_eq!((user.xp, user.gems, user.hearts), (0, 0, 5));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_conflicts_and_keeps_first(pool: PgPool) {
    seed::seed_all(&pool).await.unwrap();
    let first = UserRepo::register(&pool, &new_user("duo", Some("en")))
        .await
        .unwrap();

    let err = UserRepo::register(&pool, &new_user("duo", None))
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Conflict(msg)) if msg.contains("duo"));

    let stored = UserRepo::find_by_username(&pool, "duo")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, first.id);
    assert_eq!(stored.password_hash, first.password_hash);
    assert_eq!(stored.current_language.as_deref(), Some("en"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn concurrent_registrations_yield_one_account(pool: PgPool) {
    let user_a = new_user("racer", None);
    let user_b = new_user("racer", None);
    let (a, b) = tokio::join!(
        UserRepo::register(&pool, &user_a),
        UserRepo::register(&pool, &user_b),
    );

    let ok = [&a, &b].iter().filter(|r| r.is_ok()).count();
    assert_eq!(ok, 1);
    let err = if a.is_err() { a.unwrap_err() } else { b.unwrap_err() };
    assert_matches!(err, DbError::Core(CoreError::Conflict(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unsupported_language_is_rejected(pool: PgPool) {
    seed::seed_all(&pool).await.unwrap();

    let err = UserRepo::register(&pool, &new_user("duo", Some("xx")))
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));

    let err = UserRepo::register(&pool, &new_user("duo", Some("EN")))
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));

    let stored = UserRepo::find_by_username(&pool, "duo").await.unwrap();
    assert!(stored.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_username_is_rejected(pool: PgPool) {
    let err = UserRepo::register(&pool, &new_user("a b", None))
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));
}

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_level_overwrites_and_is_idempotent(pool: PgPool) {
    let user = UserRepo::register(&pool, &new_user("duo", None))
        .await
        .unwrap();

    UserRepo::set_level(&pool, user.id, CourseLevel::Intermediate)
        .await
        .unwrap();
    UserRepo::set_level(&pool, user.id, CourseLevel::Intermediate)
        .await
        .unwrap();
    let stored = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(stored.current_level, "INTERMEDIATE");

    UserRepo::set_level(&pool, user.id, CourseLevel::Beginner)
        .await
        .unwrap();
    let stored = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(stored.current_level, "BEGINNER");
    assert_eq!(stored.xp, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_level_unknown_user_is_not_found(pool: PgPool) {
    let err = UserRepo::set_level(&pool, 424_242, CourseLevel::Advanced)
        .await
        .unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::NotFound { entity, .. }) if entity == "user");
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn fresh_profile_has_defaults_and_no_lessons(pool: PgPool) {
    seed::seed_all(&pool).await.unwrap();
    let user = UserRepo::register(&pool, &new_user("duo", Some("en")))
        .await
        .unwrap();

    let profile = UserRepo::profile(&pool, user.id).await.unwrap();

    assert_eq!(profile.username, "duo");
    assert_eq!(profile.current_level, "UNKNOWN");
    assert_eq!((profile.xp, profile.gems, profile.hearts), (0, 0, 5));
    assert!(profile.completed_lessons.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn profile_reflects_best_scores_and_xp(pool: PgPool) {
    seed::seed_all(&pool).await.unwrap();
    let user = UserRepo::register(&pool, &new_user("duo", Some("en")))
        .await
        .unwrap();
    ProgressRepo::record_completion(&pool, user.id, "lesson_basics_1", 80)
        .await
        .unwrap();
    ProgressRepo::record_completion(&pool, user.id, "lesson_basics_1", 60)
        .await
        .unwrap();

    let profile = UserRepo::profile(&pool, user.id).await.unwrap();

    assert_eq!(profile.xp, 10);
    assert_eq!(
        profile.completed_lessons,
        [CompletedLesson {
            lesson_id: "lesson_basics_1".to_string(),
            score: 80,
        }]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn profile_unknown_user_is_not_found(pool: PgPool) {
    let err = UserRepo::profile(&pool, 1).await.unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::NotFound { .. }));
}
