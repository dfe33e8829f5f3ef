use std::fmt;

use crate::entity::{Entity, EventRecord};
use crate::error::StorefrontError;

/// A domain type whose state is rebuilt by replaying its journal.
///
/// Implemented through `hobby_storefront::aggregate!`, which maps each journal
/// event name back to the method that recorded it.
pub trait Aggregate: Sized + Default {
    type ReplayError: fmt::Display;

    fn new_empty() -> Self {
        Self::default()
    }
    fn entity(&self) -> &Entity;
    fn entity_mut(&mut self) -> &mut Entity;
    fn replay_event(&mut self, event: &EventRecord) -> Result<(), Self::ReplayError>;
}

/// Hydrate an aggregate from a journal by replaying every event in order.
pub fn hydrate<A: Aggregate>(entity: Entity) -> Result<A, StorefrontError> {
    let mut aggregate = A::new_empty();
    *aggregate.entity_mut() = entity;

    let events = aggregate.entity().events().to_vec();
    aggregate.entity_mut().set_replaying(true);
    for event in &events {
        if let Err(err) = aggregate.replay_event(event) {
            aggregate.entity_mut().set_replaying(false);
            return Err(StorefrontError::Replay(format!(
                "event #{} ({}): {}",
                event.sequence, event.event_name, err
            )));
        }
    }
    aggregate.entity_mut().set_replaying(false);

    Ok(aggregate)
}
