use sea_orm::TransactionTrait;

use crate::domain::{DomainError, NewDog, NewOwner, NewWalker};
use crate::infrastructure::AppState;
use crate::infrastructure::repositories::dog_repository::insert_dog;
use crate::infrastructure::repositories::walker_repository::insert_walker;
use crate::services::{DogWalkSummary, summarize_dog};

/// Reset every table and load one owner, dog, walker and link.
///
/// Destructive: all existing rows are dropped with the tables.
pub async fn example(state: &AppState) -> Result<DogWalkSummary, DomainError> {
    let db = state.db();
    let schema = state.schema();

    // 1. Start from empty tables
    schema.drop_all(db).await?;
    schema.create_all(db).await?;

    // 2. Owner, dog and walker in one commit; the dog points at the
    //    owner before either row exists.
    let txn = db.begin().await?;

    let dog = insert_dog(
        &txn,
        NewDog::new("Bootsy")
            .size("med")
            .owned_by_new(NewOwner::new("Shana", "123 Main")),
    )
    .await?;
    let walker = insert_walker(&txn, NewWalker::new("Rachel", "Wednesday", Some("truck"))).await?;

    txn.commit().await?;

    // 3. Link them
    state.walker_dog_repo.link(dog.id, walker.id).await?;

    let summary = summarize_dog(state, dog.id).await?;
    tracing::info!("Demo data seeded: {}", summary.sentence());

    Ok(summary)
}
