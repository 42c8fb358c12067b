use std::path::{Path as FsPath, PathBuf};

use axum::{
    extract::{multipart::Field, Multipart, Path, State},
    Json,
};
use serde_json::json;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::http::error::ApiError;
use crate::http::types::AppState;
use crate::roster;

/// POST /api/classes/{class_id}/import
///
/// The upload is staged to a temp file so the importer can consume it as
/// a plain sequential reader. The staged file is removed afterwards
/// whether the import succeeded or not.
pub async fn import_roster(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut staged: Option<PathBuf> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            staged = Some(stage_upload(field).await?);
            break;
        }
    }
    let Some(path) = staged else {
        return Err(ApiError::BadRequest("missing file field".to_string()));
    };

    let result = run_import(&state, &class_id, &path);
    if let Err(e) = std::fs::remove_file(&path) {
        tracing::warn!(path = %path.display(), error = %e, "failed to remove staged upload");
    }
    let total_users = result?;

    tracing::info!(%class_id, total_users, "roster imported");
    Ok(Json(json!({
        "message": "Users imported",
        "total_users": total_users,
    })))
}

async fn stage_upload(mut field: Field<'_>) -> Result<PathBuf, ApiError> {
    let path = std::env::temp_dir().join(format!("attendanced-upload-{}.csv", Uuid::new_v4()));

    let staged = async {
        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| ApiError::Internal(e.into()))?;
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?
        {
            file.write_all(&chunk)
                .await
                .map_err(|e| ApiError::Internal(e.into()))?;
        }
        file.flush().await.map_err(|e| ApiError::Internal(e.into()))
    }
    .await;

    if let Err(e) = staged {
        let _ = tokio::fs::remove_file(&path).await;
        return Err(e);
    }
    Ok(path)
}

fn run_import(state: &AppState, class_id: &str, path: &FsPath) -> Result<usize, ApiError> {
    let file = std::fs::File::open(path).map_err(|e| ApiError::Internal(e.into()))?;
    let conn = state.conn()?;
    roster::import_roster(&conn, class_id, file).map_err(ApiError::Internal)
}
