mod common;

use common::{assertion, create_test_pool};

use gate_core::{Role, User};
use gate_db::{DbError, SqliteUserRepository, UserStore};

use googletest::prelude::*;

#[tokio::test]
async fn given_saved_user_when_found_by_username_then_round_trips() {
    let pool = create_test_pool().await;
    let repo = SqliteUserRepository::new(pool);

    let user = User::from_assertion(&assertion("alice", "Alice A", Some("123.456.789-09")));
    repo.save(&user).await.unwrap();

    let result = repo.find_by_username("alice").await.unwrap();

    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.id, eq(user.id));
    assert_that!(found.display_name, eq("Alice A"));
    assert_that!(found.national_id, eq(&Some("12345678909".to_string())));
    assert_that!(found.role, eq(Role::User));
    assert_that!(found.audit.created_by, eq("alice"));
}

#[tokio::test]
async fn given_saved_user_when_found_by_national_id_then_found() {
    let pool = create_test_pool().await;
    let repo = SqliteUserRepository::new(pool);

    let user = User::from_assertion(&assertion("alice", "Alice A", Some("123.456.789-09")));
    repo.save(&user).await.unwrap();

    let result = repo.find_by_national_id("12345678909").await.unwrap();

    assert_that!(result, some(anything()));
    assert_that!(result.unwrap().id, eq(user.id));
}

#[tokio::test]
async fn given_empty_database_when_finding_then_returns_none() {
    let pool = create_test_pool().await;
    let repo = SqliteUserRepository::new(pool);

    assert_that!(repo.find_by_username("nobody").await.unwrap(), none());
    assert_that!(repo.find_by_national_id("000").await.unwrap(), none());
}

#[tokio::test]
async fn given_duplicate_username_when_saved_then_unique_violation() {
    let pool = create_test_pool().await;
    let repo = SqliteUserRepository::new(pool);

    let first = User::from_assertion(&assertion("alice", "Alice A", None));
    repo.save(&first).await.unwrap();

    // Different id, same username: the index must reject it.
    let second = User::from_assertion(&assertion("alice", "Other Alice", None));
    let result = repo.save(&second).await;

    assert!(matches!(result, Err(DbError::UniqueViolation { .. })));
}

#[tokio::test]
async fn given_duplicate_national_id_when_saved_then_unique_violation() {
    let pool = create_test_pool().await;
    let repo = SqliteUserRepository::new(pool);

    let first = User::from_assertion(&assertion("alice", "Alice A", Some("12345678909")));
    repo.save(&first).await.unwrap();

    let second = User::from_assertion(&assertion("bob", "Bob B", Some("123.456.789-09")));
    let result = repo.save(&second).await;

    assert!(matches!(result, Err(DbError::UniqueViolation { .. })));
}

#[tokio::test]
async fn given_two_users_without_national_id_then_both_insert() {
    let pool = create_test_pool().await;
    let repo = SqliteUserRepository::new(pool);

    repo.save(&User::from_assertion(&assertion("alice", "Alice A", None)))
        .await
        .unwrap();
    repo.save(&User::from_assertion(&assertion("bob", "Bob B", None)))
        .await
        .unwrap();

    assert_that!(repo.find_all().await.unwrap().len(), eq(2));
}

#[tokio::test]
async fn given_role_changed_in_memory_when_resaved_then_stored_role_unchanged() {
    // The upsert never writes role on conflict; even a buggy caller
    // cannot promote through the reconciliation write.
    let pool = create_test_pool().await;
    let repo = SqliteUserRepository::new(pool);

    let mut user = User::from_assertion(&assertion("alice", "Alice A", None));
    repo.save(&user).await.unwrap();

    user.role = Role::Admin;
    user.display_name = "Alice B".to_string();
    repo.save(&user).await.unwrap();

    let found = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_that!(found.role, eq(Role::User));
    assert_that!(found.display_name, eq("Alice B"));
}

#[tokio::test]
async fn given_several_users_when_listing_then_all_returned() {
    let pool = create_test_pool().await;
    let repo = SqliteUserRepository::new(pool);

    for name in ["alice", "bob", "carol"] {
        repo.save(&User::from_assertion(&assertion(name, name, None)))
            .await
            .unwrap();
    }

    let all = repo.find_all().await.unwrap();

    assert_that!(all.len(), eq(3));
}
