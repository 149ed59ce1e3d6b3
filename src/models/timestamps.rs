use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entities carrying audit timestamps.
///
/// `created_at` is written once by the column default; `updated_at` is kept
/// current by the `set_updated_at` trigger attached to the entity's table.
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
    fn updated_at(&self) -> DateTime<Utc>;

    fn is_modified(&self) -> bool {
        self.updated_at() > self.created_at()
    }
}

/// Serializable view of a [`Timestamped`] entity, flattened into responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    pub fn of<T: Timestamped + ?Sized>(entity: &T) -> Self {
        Self {
            created_at: entity.created_at(),
            updated_at: entity.updated_at(),
        }
    }
}
