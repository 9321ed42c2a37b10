use std::sync::Arc;

use user_api::prelude::*;

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password: "hash".to_string(),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        permission_level: Some(1),
    }
}

#[tokio::test]
async fn test_add_and_find_by_id() {
    let repo = InMemoryUserRepository::new();

    let id = repo.add(new_user("a@x.com")).await.unwrap();

    let user = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.first_name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn test_find_by_email() {
    let repo = InMemoryUserRepository::new();
    repo.add(new_user("a@x.com")).await.unwrap();
    let id = repo.add(new_user("b@x.com")).await.unwrap();

    let user = repo.find_by_email("b@x.com").await.unwrap().unwrap();
    assert_eq!(user.id, id);

    assert!(repo.find_by_email("c@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_unknown_id() {
    let repo = InMemoryUserRepository::new();
    assert!(repo.find_by_id("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn test_replace_preserves_id_and_position() {
    let repo = InMemoryUserRepository::new();
    let first = repo.add(new_user("a@x.com")).await.unwrap();
    let second = repo.add(new_user("b@x.com")).await.unwrap();

    repo.replace(User {
        id: first.clone(),
        email: "a@x.com".to_string(),
        password: "other-hash".to_string(),
        first_name: None,
        last_name: Some("Hopper".to_string()),
        permission_level: Some(9),
    })
    .await
    .unwrap();

    let users = repo.list().await.unwrap();
    assert_eq!(users[0].id, first);
    assert_eq!(users[1].id, second);
    assert_eq!(users[0].password, "other-hash");
    assert!(users[0].first_name.is_none());
    assert_eq!(users[0].last_name.as_deref(), Some("Hopper"));
    assert_eq!(users[0].permission_level, Some(9));
}

#[tokio::test]
async fn test_replace_unknown_id_is_not_found() {
    let repo = InMemoryUserRepository::new();

    let result = repo
        .replace(User {
            id: "missing".to_string(),
            email: "a@x.com".to_string(),
            password: "hash".to_string(),
            first_name: None,
            last_name: None,
            permission_level: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_patch_only_changes_present_fields() {
    let repo = InMemoryUserRepository::new();
    let id = repo.add(new_user("a@x.com")).await.unwrap();

    repo.patch(
        &id,
        UserPatch {
            last_name: Some(Some("Z".to_string())),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let user = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(user.last_name.as_deref(), Some("Z"));
    assert_eq!(user.first_name.as_deref(), Some("Ada"));
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.password, "hash");
    assert_eq!(user.permission_level, Some(1));
}

#[tokio::test]
async fn test_remove_then_find_is_absent() {
    let repo = InMemoryUserRepository::new();
    let id = repo.add(new_user("a@x.com")).await.unwrap();

    repo.remove(&id).await.unwrap();

    assert!(repo.find_by_id(&id).await.unwrap().is_none());
    assert!(matches!(
        repo.remove(&id).await,
        Err(AppError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_concurrent_adds_keep_ids_and_emails_unique() {
    let repo = Arc::new(InMemoryUserRepository::new());

    let mut handles = Vec::new();
    for i in 0..32 {
        let repo = repo.clone();
        // Every email is submitted twice; exactly one of each pair may win.
        handles.push(tokio::spawn(async move {
            repo.add(new_user(&format!("{}@x.com", i % 16))).await
        }));
    }

    let mut ids = std::collections::HashSet::new();
    for handle in handles {
        if let Ok(id) = handle.await.unwrap() {
            ids.insert(id);
        }
    }

    assert_eq!(ids.len(), 16);
    assert_eq!(repo.count().await.unwrap(), 16);
}

#[tokio::test]
async fn test_service_create_stores_verifiable_hash() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let hasher = PasswordHasher::new("secret");
    let service = UserService::new(repo.clone(), hasher.clone());

    service
        .create_user(NewUser {
            password: "p".to_string(),
            ..new_user("a@x.com")
        })
        .await
        .unwrap();

    let stored = repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(stored.email, "a@x.com");
    assert_ne!(stored.password, "p");
    assert!(hasher.verify("p", &stored.password));
}
