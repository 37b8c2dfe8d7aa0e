use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::Resume;

/// A named (resume, template) pair persisted for one identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResume {
    pub id: Uuid,
    pub name: String,
    pub template_id: String,
    pub data: Resume,
    pub saved_at: DateTime<Utc>,
}

/// Request body for saving a resume; the store assigns `id` and `savedAt`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavedResume {
    pub name: String,
    pub template_id: String,
    pub data: Resume,
}

impl NewSavedResume {
    pub fn into_saved(self) -> SavedResume {
        SavedResume {
            id: Uuid::new_v4(),
            name: self.name,
            template_id: self.template_id,
            data: self.data,
            saved_at: Utc::now(),
        }
    }
}
