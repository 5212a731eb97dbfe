use utoipa::OpenApi;

use crate::error::{ErrorKind, ErrorResponse};
use crate::handlers;
use crate::models::{
    HealthResponse, Item, ItemCreate, ItemUpdate, MessageResponse, Note, NoteCreate, NoteUpdate,
};

/// OpenAPI documentation for the items service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "items-api",
        version = "1.0.0",
        description = "CRUD operations over an in-memory collection of items"
    ),
    paths(
        handlers::items::root_handler,
        handlers::health::health_handler,
        handlers::items::list_items,
        handlers::items::get_item,
        handlers::items::create_item,
        handlers::items::update_item,
        handlers::items::delete_item
    ),
    components(
        schemas(
            Item,
            ItemCreate,
            ItemUpdate,
            MessageResponse,
            HealthResponse,
            ErrorResponse,
            ErrorKind
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item operations")
    )
)]
pub struct ItemsApiDoc;

/// OpenAPI documentation for the notes service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "notes-api",
        version = "1.0.0",
        description = "Backend for a notes application with search and tag filters"
    ),
    paths(
        handlers::notes::root_handler,
        handlers::health::health_handler,
        handlers::notes::list_notes,
        handlers::notes::get_note,
        handlers::notes::create_note,
        handlers::notes::update_note,
        handlers::notes::delete_note
    ),
    components(
        schemas(
            Note,
            NoteCreate,
            NoteUpdate,
            MessageResponse,
            HealthResponse,
            ErrorResponse,
            ErrorKind
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "notes", description = "Note operations")
    )
)]
pub struct NotesApiDoc;
