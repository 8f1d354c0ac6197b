use dal_sample::clients::{describe_user, log_user, UserClient};
use dal_sample::fixtures;
use dal_sample::lifecycle::DalSystem;
use dal_sample::model::{User, UserRole};
use dal_sample::user_store::{self, UserError};
use schema_framework::{ClientConfig, EntitySource};

#[tokio::test]
async fn test_reference_scenario() {
    let system = DalSystem::new();

    // 1. List in store order
    let users = system.user_client.fetch_all_users().await.unwrap();
    let ids: Vec<&str> = users.iter().map(|u| u.id().as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    let roles: Vec<UserRole> = users.iter().map(|u| *u.role()).collect();
    assert_eq!(roles, [UserRole::User, UserRole::Admin, UserRole::Guest]);

    // 2. Fetch one
    let jane = system.user_client.fetch_user("2").await.unwrap();
    assert_eq!(jane.role(), &UserRole::Admin);
    assert_eq!(jane.name(), "Jane Doe");
    assert_eq!(jane.email(), "jane.doe@example.com");

    // 3. Unknown id
    assert_eq!(
        system.user_client.fetch_user("99").await,
        Err(UserError::NotFound("99".to_string()))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_fetch_matches_stored_entity() {
    let system = DalSystem::new();
    for expected in fixtures::users() {
        let fetched = system.user_client.fetch_user(expected.id()).await.unwrap();
        assert_eq!(fetched, expected);
        assert!(UserRole::ALL.contains(fetched.role()));
    }
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_length_equals_store_size() {
    let (actor, store) = user_store::new(&ClientConfig::default(), fixtures::users());
    let size = actor.len();
    tokio::spawn(actor.run());
    assert_eq!(store.fetch_all_entities().await.unwrap().len(), size);

    let empty = DalSystem::start(&ClientConfig::default(), Vec::new());
    assert!(empty.user_client.fetch_all_users().await.unwrap().is_empty());
    empty.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_id_is_rejected() {
    let system = DalSystem::new();
    assert!(matches!(
        system.user_client.fetch_user("").await,
        Err(UserError::InvalidArgument(_))
    ));
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_insert_upserts_in_place() {
    let system = DalSystem::new();

    let promoted = User::new("3", "Bob Doe", "bob.doe@example.com", UserRole::Admin);
    system.store.insert(promoted.clone()).await.unwrap();
    system
        .store
        .insert(User::new("4", "Alice Doe", "alice.doe@example.com", UserRole::User))
        .await
        .unwrap();

    let users = system.user_client.fetch_all_users().await.unwrap();
    assert_eq!(users.len(), 4);
    assert_eq!(users[2], promoted);
    assert_eq!(users[3].id(), "4");

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stopped_store_reports_transport_failure() {
    let (actor, store) = user_store::new(&ClientConfig::default(), fixtures::users());
    let client = UserClient::from_source(store);
    drop(actor);

    assert!(matches!(
        client.fetch_all_users().await,
        Err(UserError::TransportFailure(_))
    ));
}

#[test]
fn test_describe_user() {
    let users = fixtures::users();
    assert_eq!(describe_user(&users[0]), "User 1: John Doe");
    log_user(&users[0]);
}
