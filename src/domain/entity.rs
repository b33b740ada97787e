//! Identity contract shared by all stored entities

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Record identifier. Unset (`None`) until first persisted.
pub type EntityId = i64;

/// Contract every stored record type satisfies: a readable and
/// assignable id. The store assigns the id on first save and treats
/// an unset id as "insert".
pub trait Entity: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> Option<EntityId>;

    fn set_id(&mut self, id: EntityId);
}
