use axum::{extract::State, Json};
use serde_json::json;

use crate::classes::{self, CreateClassError};
use crate::http::error::ApiError;
use crate::http::types::{AppState, CreateClassRequest};

pub async fn create_class(
    State(state): State<AppState>,
    Json(body): Json<CreateClassRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let class_id = {
        let conn = state.conn()?;
        classes::create_class(&conn, &body.class_name).map_err(|e| match e {
            CreateClassError::DuplicateName => ApiError::DuplicateClassName,
            CreateClassError::Db(e) => ApiError::Internal(e.into()),
        })?
    };

    tracing::info!(%class_id, name = %body.class_name, "class created");
    Ok(Json(json!({
        "message": "Class created",
        "class_id": class_id,
    })))
}
