use crate::AppState;
use crate::api::identity;
use crate::api::models::effort_records::{EffortRecordMerge, EffortRecordPayload, EffortRecordResponse};
use crate::errors::{Error, Result};
use crate::types::EffortRecordId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

const RESOURCE: &str = "EffortRecord";

#[utoipa::path(
    post,
    path = "/api/effort-records",
    tag = "effort-records",
    summary = "Create effort record",
    request_body = EffortRecordPayload,
    responses(
        (status = 201, description = "Effort record created", body = EffortRecordResponse),
        (status = 400, description = "Identity supplied or invalid fields"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_effort_record(
    State(state): State<AppState>,
    Json(body): Json<EffortRecordPayload>,
) -> Result<(StatusCode, Json<EffortRecordResponse>)> {
    identity::require_unassigned(&body, RESOURCE)?;
    body.validate()?;

    let created = state.stores.effort_records.save(&body.into_record()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/effort-records/{id}",
    tag = "effort-records",
    summary = "Replace effort record",
    request_body = EffortRecordPayload,
    params(("id" = i64, Path, description = "Effort record ID")),
    responses(
        (status = 200, description = "Effort record replaced", body = EffortRecordResponse),
        (status = 400, description = "Missing or mismatched identity, or invalid fields"),
        (status = 404, description = "Effort record not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn replace_effort_record(
    State(state): State<AppState>,
    Path(id): Path<EffortRecordId>,
    Json(body): Json<EffortRecordPayload>,
) -> Result<Json<EffortRecordResponse>> {
    identity::require_matching(&id, &body, RESOURCE)?;
    body.validate()?;
    if !state.stores.effort_records.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    let saved = state.stores.effort_records.save(&body.into_record()).await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    patch,
    path = "/api/effort-records/{id}",
    tag = "effort-records",
    summary = "Partially update effort record",
    request_body = EffortRecordMerge,
    params(("id" = i64, Path, description = "Effort record ID")),
    responses(
        (status = 200, description = "Effort record updated", body = EffortRecordResponse),
        (status = 400, description = "Missing or mismatched identity"),
        (status = 404, description = "Effort record not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn merge_effort_record(
    State(state): State<AppState>,
    Path(id): Path<EffortRecordId>,
    Json(patch): Json<EffortRecordMerge>,
) -> Result<Json<EffortRecordResponse>> {
    identity::require_matching(&id, &patch, RESOURCE)?;
    if !state.stores.effort_records.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    let mut record = state
        .stores
        .effort_records
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        })?;
    patch.apply(&mut record);

    // Merge persists whatever survives the overwrite; bounds are only
    // enforced on create and replace
    let saved = state.stores.effort_records.save(&record).await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    get,
    path = "/api/effort-records",
    tag = "effort-records",
    summary = "List effort records",
    responses((status = 200, description = "All effort records", body = Vec<EffortRecordResponse>))
)]
#[tracing::instrument(skip_all)]
pub async fn list_effort_records(State(state): State<AppState>) -> Result<Json<Vec<EffortRecordResponse>>> {
    let records = state.stores.effort_records.list().await?;
    Ok(Json(records.into_iter().map(EffortRecordResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/effort-records/{id}",
    tag = "effort-records",
    summary = "Get effort record",
    params(("id" = i64, Path, description = "Effort record ID")),
    responses(
        (status = 200, description = "Effort record details", body = EffortRecordResponse),
        (status = 404, description = "Effort record not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_effort_record(
    State(state): State<AppState>,
    Path(id): Path<EffortRecordId>,
) -> Result<Json<EffortRecordResponse>> {
    match state.stores.effort_records.get(id).await? {
        Some(record) => Ok(Json(record.into())),
        None => Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        }),
    }
}

#[utoipa::path(
    delete,
    path = "/api/effort-records/{id}",
    tag = "effort-records",
    summary = "Delete effort record",
    params(("id" = i64, Path, description = "Effort record ID")),
    responses((status = 204, description = "Effort record deleted"))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_effort_record(State(state): State<AppState>, Path(id): Path<EffortRecordId>) -> Result<StatusCode> {
    state.stores.effort_records.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::effort_records::EffortRecordResponse;
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test_log::test(tokio::test)]
    async fn crud_round_trip() {
        let app = create_test_app();

        let created: EffortRecordResponse = app
            .post("/api/effort-records")
            .json(&json!({
                "effort": 7.5,
                "notes": "sprint work",
                "projectId": 8,
                "empId": 3,
                "tenantId": 1
            }))
            .await
            .json();
        let id = created.id.unwrap();

        let merged: EffortRecordResponse = app
            .patch(&format!("/api/effort-records/{id}"))
            .json(&json!({"id": id, "effort": 4.0}))
            .await
            .json();
        assert_eq!(merged.effort, 4.0);
        assert_eq!(merged.notes.as_deref(), Some("sprint work"));

        app.delete(&format!("/api/effort-records/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.get(&format!("/api/effort-records/{id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn create_rejects_out_of_range_effort() {
        let app = create_test_app();
        app.post("/api/effort-records")
            .json(&json!({"effort": 120.0}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[test_log::test(tokio::test)]
    async fn merge_skips_field_validation() {
        let app = create_test_app();
        let created: EffortRecordResponse = app
            .post("/api/effort-records")
            .json(&json!({"effort": 7.5}))
            .await
            .json();
        let id = created.id.unwrap();

        // Out-of-range value passes through merge untouched by validation
        let response = app
            .patch(&format!("/api/effort-records/{id}"))
            .json(&json!({"id": id, "effort": 500.0}))
            .await;
        response.assert_status_ok();
        let merged: EffortRecordResponse = response.json();
        assert_eq!(merged.effort, 500.0);
    }
}
