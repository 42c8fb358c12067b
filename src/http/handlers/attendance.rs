use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::json;

use crate::attendance::{self, MarkOutcome};
use crate::http::error::ApiError;
use crate::http::types::{AppState, MarkAttendanceRequest};

pub async fn mark_attendance(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
    Json(body): Json<MarkAttendanceRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let date = state.clock.today_utc();
    let outcome = {
        let conn = state.conn()?;
        attendance::mark_present(&conn, &class_id, &body.unique_number, date)
            .map_err(ApiError::Internal)?
    };

    match outcome {
        MarkOutcome::Present => {
            tracing::debug!(%class_id, unique_number = %body.unique_number, "attendance marked");
            Ok(Json(json!({
                "message": "Attendance updated",
                "unique_number": body.unique_number,
                "status": "Present",
            })))
        }
        MarkOutcome::UnknownStudent => Ok(Json(json!({
            "message": "User not found",
            "unique_number": body.unique_number,
        }))),
    }
}

pub async fn present_today(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let date = state.clock.today_utc();
    let students = {
        let conn = state.conn()?;
        attendance::present_on(&conn, &class_id, date).map_err(ApiError::Internal)?
    };

    Ok(Json(json!({
        "class_id": class_id,
        "date": attendance::date_key(date),
        "present_students": students,
    })))
}

pub async fn absent_today(
    State(state): State<AppState>,
    Path(class_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let date = state.clock.today_utc();
    let students = {
        let conn = state.conn()?;
        attendance::absent_on(&conn, &class_id, date).map_err(ApiError::Internal)?
    };

    Ok(Json(json!({
        "class_id": class_id,
        "date": attendance::date_key(date),
        "absent_students": students,
    })))
}
