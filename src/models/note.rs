use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Patch;
use crate::store::Record;
use crate::validate::{Validate, ValidationError};

/// A stored note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for POST /notes
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct NoteCreate {
    pub title: String,
    pub content: String,
    /// Omitted or `null` means no tags
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Request body for PUT /notes/{id}; every field is optional
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct NoteUpdate {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub content: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<Vec<String>>)]
    pub tags: Patch<Vec<String>>,
}

/// Query parameters for GET /notes
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NoteQuery {
    /// Case-insensitive substring matched against title and content
    pub search: Option<String>,
    /// Case-insensitive exact match against any of the note's tags
    pub tag: Option<String>,
}

impl Validate for NoteCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Validate for NoteUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Record for Note {
    type Create = NoteCreate;
    type Update = NoteUpdate;

    fn from_create(id: u64, created_at: DateTime<Utc>, payload: NoteCreate) -> Self {
        Note {
            id,
            title: payload.title,
            content: payload.content,
            tags: payload.tags.unwrap_or_default(),
            created_at,
        }
    }

    fn apply_update(&mut self, update: NoteUpdate) {
        update.title.apply_to(&mut self.title);
        update.content.apply_to(&mut self.content);
        update.tags.apply_to(&mut self.tags);
    }

    fn id(&self) -> u64 {
        self.id
    }
}
