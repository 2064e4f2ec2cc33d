//! Store (tenant) entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub slug: String,
}

impl Store {
    pub fn is_owned_by(&self, user_id: &Uuid) -> bool {
        self.owner_id == *user_id
    }
}
