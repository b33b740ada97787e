//! Author entity

use crate::domain::entity::{Entity, EntityId};
use crate::domain::validate::{LengthRule, Validate};
use serde::{Deserialize, Serialize};

const NAME_RULE: LengthRule = LengthRule::new("name", 3, 15);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: Option<EntityId>,
    pub name: String,
}

impl Author {
    /// Create an unsaved author; the store assigns the id.
    pub fn new(name: impl Into<String>) -> Self {
        Author {
            id: None,
            name: name.into(),
        }
    }
}

impl Entity for Author {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl Validate for Author {
    fn collect_violations(&self, violations: &mut Vec<String>) {
        NAME_RULE.check(&self.name, violations);
    }
}
