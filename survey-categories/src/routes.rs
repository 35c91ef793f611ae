use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::store::{Category, CategoryError, CategoryPatch, CategoryStore, NewCategory};

/// Handler-shared store. Mutations are serialized through the mutex since
/// axum serves requests from multiple runtime threads.
pub type SharedStore = Arc<Mutex<CategoryStore>>;

/// Build the service router under `/api/categories`.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/api/categories",
            get(list_categories).post(create_category),
        )
        .route(
            "/api/categories/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .with_state(store)
}

/// Success envelope for the collection endpoint.
#[derive(Debug, Serialize)]
struct ListResponse {
    success: bool,
    data: Vec<Category>,
    count: usize,
}

/// Success envelope for single-record endpoints.
#[derive(Debug, Serialize)]
struct ItemResponse {
    success: bool,
    data: Category,
}

impl ItemResponse {
    fn new(data: Category) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Failure envelope.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

/// A `CategoryError` mapped onto an HTTP response.
#[derive(Debug)]
struct ApiError(CategoryError);

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            CategoryError::EmptyName | CategoryError::DuplicateName(_) => StatusCode::BAD_REQUEST,
            CategoryError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<CategoryError> for ApiError {
    fn from(err: CategoryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            error: self.0.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Lock the store, recovering from a poisoned mutex. A panic in another
/// handler must not wedge the whole service.
fn lock(store: &SharedStore) -> MutexGuard<'_, CategoryStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn list_categories(State(store): State<SharedStore>) -> Json<ListResponse> {
    let store = lock(&store);
    let data = store.list().to_vec();
    Json(ListResponse {
        success: true,
        count: data.len(),
        data,
    })
}

async fn get_category(
    State(store): State<SharedStore>,
    Path(id): Path<u32>,
) -> Result<Json<ItemResponse>, ApiError> {
    let store = lock(&store);
    let category = store.get(id).ok_or(CategoryError::NotFound(id))?;
    Ok(Json(ItemResponse::new(category.clone())))
}

async fn create_category(
    State(store): State<SharedStore>,
    Json(body): Json<NewCategory>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let created = lock(&store).create(body)?;
    tracing::info!(id = created.id, name = %created.name, "category created");
    Ok((StatusCode::CREATED, Json(ItemResponse::new(created))))
}

async fn update_category(
    State(store): State<SharedStore>,
    Path(id): Path<u32>,
    Json(body): Json<CategoryPatch>,
) -> Result<Json<ItemResponse>, ApiError> {
    let updated = lock(&store).update(id, body)?;
    tracing::info!(id, "category updated");
    Ok(Json(ItemResponse::new(updated)))
}

async fn delete_category(
    State(store): State<SharedStore>,
    Path(id): Path<u32>,
) -> Result<Json<ItemResponse>, ApiError> {
    let deleted = lock(&store).delete(id)?;
    tracing::info!(id, "category deleted");
    Ok(Json(ItemResponse::new(deleted)))
}
