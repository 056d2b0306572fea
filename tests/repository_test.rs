use dogwalkers::domain::{
    DomainError, NewDog, NewOwner, NewWalker, UpdateDogInput, UpdateOwnerInput, UpdateWalkerInput,
};
use dogwalkers::models::owner;
use dogwalkers::{AppState, Schema, db};
use sea_orm::{ActiveModelTrait, Set};

// Helper to create a test state over an in-memory database
async fn setup_test_state() -> AppState {
    let schema = Schema::default();
    let db = db::init_db("sqlite::memory:", &schema)
        .await
        .expect("Failed to init DB");
    AppState::new(db, schema)
}

#[tokio::test]
async fn test_owner_crud() {
    let state = setup_test_state().await;

    for (name, address) in [("Shana", "123 Main"), ("", ""), ("Al", "9 Elm St, Apt 4")] {
        let created = state
            .owner_repo
            .create(NewOwner::new(name, address))
            .await
            .expect("Create failed");

        let fetched = state
            .owner_repo
            .find_by_id(created.id)
            .await
            .expect("Find failed")
            .expect("Owner missing");
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, name);
        assert_eq!(fetched.address, address);
    }
    assert_eq!(state.owner_repo.count().await.unwrap(), 3);

    let first = state.owner_repo.find_all().await.unwrap()[0].clone();
    let updated = state
        .owner_repo
        .update(
            first.id,
            UpdateOwnerInput {
                address: Some("77 Oak".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("Update failed");
    assert_eq!(updated.name, "Shana");
    assert_eq!(updated.address, "77 Oak");

    state.owner_repo.delete(first.id).await.expect("Delete failed");
    assert!(state.owner_repo.find_by_id(first.id).await.unwrap().is_none());
    assert!(matches!(
        state.owner_repo.delete(first.id).await,
        Err(DomainError::NotFound)
    ));
}

#[tokio::test]
async fn test_pending_owner_resolves_on_commit() {
    let state = setup_test_state().await;

    let dog = state
        .dog_repo
        .create(
            NewDog::new("Bootsy")
                .size("med")
                .owned_by_new(NewOwner::new("Shana", "123 Main")),
        )
        .await
        .expect("Create dog failed");

    let owners = state.owner_repo.find_all().await.unwrap();
    assert_eq!(owners.len(), 1);
    assert_eq!(dog.owner_id, Some(owners[0].id));

    let owner = state.dog_repo.owner(dog.id).await.unwrap().expect("No owner");
    assert_eq!(owner.name, "Shana");

    let dogs = state.owner_repo.dogs(owner.id).await.unwrap();
    assert_eq!(dogs, vec![dog]);
}

#[tokio::test]
async fn test_invalid_pending_owner_stores_nothing() {
    let state = setup_test_state().await;

    let result = state
        .dog_repo
        .create(NewDog::new("Bootsy").owned_by_new(NewOwner::new("x".repeat(21), "123 Main")))
        .await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
    assert_eq!(state.owner_repo.count().await.unwrap(), 0);
    assert_eq!(state.dog_repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_dog_without_owner() {
    let state = setup_test_state().await;

    let dog = state.dog_repo.create(NewDog::new("Stray")).await.unwrap();
    assert_eq!(dog.owner_id, None);
    assert_eq!(dog.size, None);
    assert!(state.dog_repo.owner(dog.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_dog_with_unknown_owner_is_rejected() {
    let state = setup_test_state().await;

    let result = state.dog_repo.create(NewDog::new("Bootsy").owned_by(42)).await;
    assert!(matches!(result, Err(DomainError::Database(_))));
}

#[tokio::test]
async fn test_link_is_bidirectional() {
    let state = setup_test_state().await;

    let bootsy = state.dog_repo.create(NewDog::new("Bootsy")).await.unwrap();
    let rex = state.dog_repo.create(NewDog::new("Rex")).await.unwrap();
    let rachel = state
        .walker_repo
        .create(NewWalker::new("Rachel", "Wednesday", Some("truck")))
        .await
        .unwrap();
    let sam = state
        .walker_repo
        .create(NewWalker::new("Sam", "Friday", None))
        .await
        .unwrap();

    state.walker_dog_repo.link(bootsy.id, rachel.id).await.unwrap();
    state.walker_dog_repo.link(rex.id, sam.id).await.unwrap();
    state.walker_dog_repo.link(bootsy.id, sam.id).await.unwrap();

    let bootsy_walkers = state.dog_repo.walkers(bootsy.id).await.unwrap();
    assert_eq!(bootsy_walkers, vec![rachel.clone(), sam.clone()]);

    let rachel_dogs = state.walker_repo.dogs(rachel.id).await.unwrap();
    assert_eq!(rachel_dogs, vec![bootsy.clone()]);

    let sam_dogs = state.walker_repo.dogs(sam.id).await.unwrap();
    assert_eq!(sam_dogs, vec![rex, bootsy]);
}

#[tokio::test]
async fn test_duplicate_links_are_kept() {
    let state = setup_test_state().await;

    let dog = state.dog_repo.create(NewDog::new("Bootsy")).await.unwrap();
    let walker = state
        .walker_repo
        .create(NewWalker::new("Rachel", "Wednesday", None))
        .await
        .unwrap();

    let first = state.walker_dog_repo.link(dog.id, walker.id).await.unwrap();
    let second = state.walker_dog_repo.link(dog.id, walker.id).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(state.walker_dog_repo.count().await.unwrap(), 2);
    assert_eq!(state.dog_repo.walkers(dog.id).await.unwrap().len(), 2);
    assert_eq!(state.walker_repo.dogs(walker.id).await.unwrap().len(), 2);

    state.walker_dog_repo.unlink(first.id).await.unwrap();
    assert_eq!(
        state.walker_dog_repo.find_all().await.unwrap(),
        vec![second]
    );
}

#[tokio::test]
async fn test_link_to_missing_rows_fails() {
    let state = setup_test_state().await;

    let result = state.walker_dog_repo.link(999, 999).await;
    assert!(matches!(result, Err(DomainError::Database(_))));
    assert_eq!(state.walker_dog_repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_length_limits() {
    let state = setup_test_state().await;

    let result = state
        .owner_repo
        .create(NewOwner::new("x".repeat(21), "123 Main"))
        .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));

    let result = state
        .walker_repo
        .create(NewWalker::new("Rachel", "Wednesday", Some(&"c".repeat(21))))
        .await;
    assert!(matches!(result, Err(DomainError::Validation(_))));

    // The table itself rejects oversize values written around the repository
    let raw = owner::ActiveModel {
        name: Set("x".repeat(21)),
        address: Set("123 Main".to_string()),
        ..Default::default()
    };
    assert!(raw.insert(state.db()).await.is_err());
    assert_eq!(state.owner_repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_dog_and_walker_updates() {
    let state = setup_test_state().await;

    let owner = state
        .owner_repo
        .create(NewOwner::new("Shana", "123 Main"))
        .await
        .unwrap();
    let dog = state
        .dog_repo
        .create(NewDog::new("Bootsy").size("med").owned_by(owner.id))
        .await
        .unwrap();

    let dog = state
        .dog_repo
        .update(
            dog.id,
            UpdateDogInput {
                size: Some(None),
                owner_id: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(dog.size, None);
    assert_eq!(dog.owner_id, None);
    assert!(state.owner_repo.dogs(owner.id).await.unwrap().is_empty());

    let walker = state
        .walker_repo
        .create(NewWalker::new("Rachel", "Wednesday", Some("truck")))
        .await
        .unwrap();
    let walker = state
        .walker_repo
        .update(
            walker.id,
            UpdateWalkerInput {
                day: Some("Friday".to_string()),
                car: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(walker.day, "Friday");
    assert_eq!(walker.car, None);
    assert_eq!(
        state.walker_repo.find_by_day("Friday").await.unwrap(),
        vec![walker.clone()]
    );
    assert!(state.walker_repo.find_by_day("Wednesday").await.unwrap().is_empty());

    assert!(matches!(
        state.walker_repo.update(999, UpdateWalkerInput::default()).await,
        Err(DomainError::NotFound)
    ));
}

#[tokio::test]
async fn test_owner_with_dogs_cannot_be_deleted() {
    let state = setup_test_state().await;

    let dog = state
        .dog_repo
        .create(NewDog::new("Bootsy").owned_by_new(NewOwner::new("Shana", "123 Main")))
        .await
        .unwrap();
    let owner_id = dog.owner_id.unwrap();

    assert!(matches!(
        state.owner_repo.delete(owner_id).await,
        Err(DomainError::Database(_))
    ));
    assert!(state.owner_repo.find_by_id(owner_id).await.unwrap().is_some());
}
