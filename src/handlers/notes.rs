use crate::error::{ApiError, ErrorResponse};
use crate::extract::{QueryParams, RecordId, ValidJson};
use crate::filter::NoteFilter;
use crate::models::{MessageResponse, Note, NoteCreate, NoteQuery, NoteUpdate};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

type NotesState = State<AppState<Note>>;

const ENTITY: &str = "Note";

/// GET / handler - Service banner
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service banner", body = MessageResponse)
    ),
    tag = "notes"
)]
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new("Notes API running"))
}

/// GET /notes handler - List notes, optionally filtered
///
/// Query parameters:
/// - search: case-insensitive substring of title or content (optional)
/// - tag: case-insensitive exact tag (optional)
///
/// Both together must match. Results keep creation order.
#[utoipa::path(
    get,
    path = routes::NOTES,
    params(NoteQuery),
    responses(
        (status = 200, description = "Matching notes", body = [Note]),
        (status = 422, description = "Invalid query parameter", body = ErrorResponse)
    ),
    tag = "notes"
)]
pub async fn list_notes(
    State(state): NotesState,
    QueryParams(query): QueryParams<NoteQuery>,
) -> (StatusCode, Json<Vec<Note>>) {
    let filter = NoteFilter::new(&query);

    let notes = if filter.is_empty() {
        state.store.list_all().await
    } else {
        state.store.select(|note| filter.matches(note)).await
    };

    tracing::info!(
        "Listed {} notes (search: {:?}, tag: {:?})",
        notes.len(),
        query.search,
        query.tag
    );

    (StatusCode::OK, Json(notes))
}

/// GET /notes/{id} handler - Retrieve one note
#[utoipa::path(
    get,
    path = routes::NOTE,
    params(
        ("id" = i64, Path, description = "Note id")
    ),
    responses(
        (status = 200, description = "Note found", body = Note),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 422, description = "Invalid id", body = ErrorResponse)
    ),
    tag = "notes"
)]
pub async fn get_note(
    State(state): NotesState,
    id: RecordId,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let id = id.stored().ok_or(ApiError::NotFound(ENTITY))?;

    match state.store.get(id).await {
        Some(note) => Ok((StatusCode::OK, Json(note))),
        None => {
            tracing::info!("Note not found with id: {}", id);
            Err(ApiError::NotFound(ENTITY))
        }
    }
}

/// POST /notes handler - Create a note
#[utoipa::path(
    post,
    path = routes::NOTES,
    request_body = NoteCreate,
    responses(
        (status = 201, description = "Note created", body = Note),
        (status = 422, description = "Missing or invalid fields", body = ErrorResponse)
    ),
    tag = "notes"
)]
pub async fn create_note(
    State(state): NotesState,
    ValidJson(payload): ValidJson<NoteCreate>,
) -> (StatusCode, Json<Note>) {
    let note = state.store.create(payload).await;
    tracing::info!(
        "Created note with id: {} ({} stored)",
        note.id,
        state.store.len().await
    );
    (StatusCode::CREATED, Json(note))
}

/// PUT /notes/{id} handler - Partially update a note
#[utoipa::path(
    put,
    path = routes::NOTE,
    params(
        ("id" = i64, Path, description = "Note id")
    ),
    request_body = NoteUpdate,
    responses(
        (status = 200, description = "Note updated", body = Note),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 422, description = "Invalid id or fields", body = ErrorResponse)
    ),
    tag = "notes"
)]
pub async fn update_note(
    State(state): NotesState,
    id: RecordId,
    ValidJson(update): ValidJson<NoteUpdate>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let id = id.stored().ok_or(ApiError::NotFound(ENTITY))?;

    let note = state
        .store
        .update(id, update)
        .await
        .ok_or(ApiError::NotFound(ENTITY))?;

    tracing::info!("Updated note with id: {}", id);
    Ok((StatusCode::OK, Json(note)))
}

/// DELETE /notes/{id} handler - Remove a note
#[utoipa::path(
    delete,
    path = routes::NOTE,
    params(
        ("id" = i64, Path, description = "Note id")
    ),
    responses(
        (status = 200, description = "Note deleted", body = MessageResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 422, description = "Invalid id", body = ErrorResponse)
    ),
    tag = "notes"
)]
pub async fn delete_note(
    State(state): NotesState,
    id: RecordId,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = id.stored().ok_or(ApiError::NotFound(ENTITY))?;

    state
        .store
        .delete(id)
        .await
        .ok_or(ApiError::NotFound(ENTITY))?;

    tracing::info!("Deleted note with id: {}", id);
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Note deleted successfully")),
    ))
}
