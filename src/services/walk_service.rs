//! Walk Service - Cross-table lookups built on the repositories

use crate::domain::{Dog, DomainError, Owner, Walker};
use crate::infrastructure::AppState;

/// A dog together with its first walker and its owner
#[derive(Debug, Clone, serde::Serialize)]
pub struct DogWalkSummary {
    pub dog: Dog,
    pub walker: Walker,
    pub owner: Owner,
}

impl DogWalkSummary {
    pub fn sentence(&self) -> String {
        format!(
            "Dog {} is walked by {} and owned by {}",
            self.dog.name, self.walker.name, self.owner.name
        )
    }
}

/// Resolve a dog's first walker (lowest association id) and its owner.
///
/// Fails with `MissingRelation` when the dog has no walker or no owner.
pub async fn summarize_dog(state: &AppState, dog_id: i32) -> Result<DogWalkSummary, DomainError> {
    let dog = state
        .dog_repo
        .find_by_id(dog_id)
        .await?
        .ok_or(DomainError::NotFound)?;

    let walker = state
        .dog_repo
        .walkers(dog.id)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| DomainError::MissingRelation(format!("dog {} has no walker", dog.name)))?;

    let owner = state
        .dog_repo
        .owner(dog.id)
        .await?
        .ok_or_else(|| DomainError::MissingRelation(format!("dog {} has no owner", dog.name)))?;

    Ok(DogWalkSummary { dog, walker, owner })
}

/// Walkers working on `day`, each with the dogs they walk
pub async fn roster_for_day(
    state: &AppState,
    day: &str,
) -> Result<Vec<(Walker, Vec<Dog>)>, DomainError> {
    let walkers = state.walker_repo.find_by_day(day).await?;

    let mut roster = Vec::with_capacity(walkers.len());
    for walker in walkers {
        let dogs = state.walker_repo.dogs(walker.id).await?;
        roster.push((walker, dogs));
    }

    tracing::debug!("Roster for {}: {} walkers", day, roster.len());
    Ok(roster)
}
