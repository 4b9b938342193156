//! Handlers for employee-post assignments.
//!
//! The one caller-keyed entity: create requires an identity in the body
//! instead of forbidding one, and replace marks the record persisted so
//! the store updates rather than inserts.

use crate::AppState;
use crate::api::identity;
use crate::api::models::emp_posts::{EmpPostMerge, EmpPostPayload, EmpPostResponse};
use crate::db::models::emp_posts::RecordState;
use crate::errors::{Error, Result};
use crate::types::EmpPostId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

const RESOURCE: &str = "EmpPost";

#[utoipa::path(
    post,
    path = "/api/emp-posts",
    tag = "emp-posts",
    summary = "Create employee-post assignment",
    request_body = EmpPostPayload,
    responses(
        (status = 201, description = "Assignment created", body = EmpPostResponse),
        (status = 400, description = "Missing identity"),
        (status = 409, description = "Assignment already exists"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_emp_post(
    State(state): State<AppState>,
    Json(body): Json<EmpPostPayload>,
) -> Result<(StatusCode, Json<EmpPostResponse>)> {
    // Composite identity is assigned by the caller, so it must be present
    identity::require_assigned(&body, RESOURCE)?;

    let created = state
        .stores
        .emp_posts
        .save(&body.into_record(RecordState::Transient))
        .await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/emp-posts/{id}",
    tag = "emp-posts",
    summary = "Replace employee-post assignment",
    request_body = EmpPostPayload,
    params(("id" = String, Path, description = "Assignment ID as '<emp_id>-<post_id>'")),
    responses(
        (status = 200, description = "Assignment replaced", body = EmpPostResponse),
        (status = 400, description = "Missing or mismatched identity"),
        (status = 404, description = "Assignment not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn replace_emp_post(
    State(state): State<AppState>,
    Path(id): Path<EmpPostId>,
    Json(body): Json<EmpPostPayload>,
) -> Result<Json<EmpPostResponse>> {
    identity::require_matching(&id, &body, RESOURCE)?;
    if !state.stores.emp_posts.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    // The target exists, so save must update the stored row
    let saved = state
        .stores
        .emp_posts
        .save(&body.into_record(RecordState::Persisted))
        .await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    patch,
    path = "/api/emp-posts/{id}",
    tag = "emp-posts",
    summary = "Partially update employee-post assignment",
    request_body = EmpPostMerge,
    params(("id" = String, Path, description = "Assignment ID as '<emp_id>-<post_id>'")),
    responses(
        (status = 200, description = "Assignment updated", body = EmpPostResponse),
        (status = 400, description = "Missing or mismatched identity"),
        (status = 404, description = "Assignment not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn merge_emp_post(
    State(state): State<AppState>,
    Path(id): Path<EmpPostId>,
    Json(patch): Json<EmpPostMerge>,
) -> Result<Json<EmpPostResponse>> {
    identity::require_matching(&id, &patch, RESOURCE)?;
    if !state.stores.emp_posts.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    let mut record = state.stores.emp_posts.get(id).await?.ok_or_else(|| Error::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    })?;
    patch.apply(&mut record);

    let saved = state.stores.emp_posts.save(&record).await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    get,
    path = "/api/emp-posts",
    tag = "emp-posts",
    summary = "List employee-post assignments",
    responses((status = 200, description = "All assignments", body = Vec<EmpPostResponse>))
)]
#[tracing::instrument(skip_all)]
pub async fn list_emp_posts(State(state): State<AppState>) -> Result<Json<Vec<EmpPostResponse>>> {
    let emp_posts = state.stores.emp_posts.list().await?;
    Ok(Json(emp_posts.into_iter().map(EmpPostResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/emp-posts/{id}",
    tag = "emp-posts",
    summary = "Get employee-post assignment",
    params(("id" = String, Path, description = "Assignment ID as '<emp_id>-<post_id>'")),
    responses(
        (status = 200, description = "Assignment details", body = EmpPostResponse),
        (status = 404, description = "Assignment not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_emp_post(State(state): State<AppState>, Path(id): Path<EmpPostId>) -> Result<Json<EmpPostResponse>> {
    match state.stores.emp_posts.get(id).await? {
        Some(emp_post) => Ok(Json(emp_post.into())),
        None => Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        }),
    }
}

#[utoipa::path(
    delete,
    path = "/api/emp-posts/{id}",
    tag = "emp-posts",
    summary = "Delete employee-post assignment",
    params(("id" = String, Path, description = "Assignment ID as '<emp_id>-<post_id>'")),
    responses((status = 204, description = "Assignment deleted"))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_emp_post(State(state): State<AppState>, Path(id): Path<EmpPostId>) -> Result<StatusCode> {
    state.stores.emp_posts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::emp_posts::EmpPostResponse;
    use crate::test_utils::create_test_app;
    use crate::types::EmpPostId;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test_log::test(tokio::test)]
    async fn create_requires_caller_assigned_identity() {
        let app = create_test_app();

        // No identity: rejected
        app.post("/api/emp-posts")
            .json(&json!({"tenantId": 1}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        // Caller-assigned identity: accepted
        let response = app
            .post("/api/emp-posts")
            .json(&json!({"id": "3-9", "tenantId": 1}))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: EmpPostResponse = response.json();
        assert_eq!(created.id, Some(EmpPostId { emp_id: 3, post_id: 9 }));
    }

    #[test_log::test(tokio::test)]
    async fn composite_identity_round_trips_through_path() {
        let app = create_test_app();
        app.post("/api/emp-posts")
            .json(&json!({"id": "3-9", "tenantId": 1, "createdBy": 5}))
            .await
            .assert_status(StatusCode::CREATED);

        let fetched: EmpPostResponse = app.get("/api/emp-posts/3-9").await.json();
        assert_eq!(fetched.id, Some(EmpPostId { emp_id: 3, post_id: 9 }));
        assert_eq!(fetched.tenant_id, Some(1));
        assert_eq!(fetched.created_by, Some(5));
    }

    #[test_log::test(tokio::test)]
    async fn replace_updates_existing_assignment() {
        let app = create_test_app();
        app.post("/api/emp-posts")
            .json(&json!({"id": "3-9", "tenantId": 1, "createdBy": 5}))
            .await
            .assert_status(StatusCode::CREATED);

        // Full replace: createdBy absent, so it is cleared
        let response = app
            .put("/api/emp-posts/3-9")
            .json(&json!({"id": "3-9", "tenantId": 2}))
            .await;
        response.assert_status_ok();
        let replaced: EmpPostResponse = response.json();
        assert_eq!(replaced.tenant_id, Some(2));
        assert_eq!(replaced.created_by, None);

        // Still a single assignment
        let all: Vec<EmpPostResponse> = app.get("/api/emp-posts").await.json();
        assert_eq!(all.len(), 1);
    }

    #[test_log::test(tokio::test)]
    async fn replace_contract_failures() {
        let app = create_test_app();
        app.post("/api/emp-posts")
            .json(&json!({"id": "3-9"}))
            .await
            .assert_status(StatusCode::CREATED);

        app.put("/api/emp-posts/3-9")
            .json(&json!({"tenantId": 1}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        app.put("/api/emp-posts/3-9")
            .json(&json!({"id": "3-10", "tenantId": 1}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        app.put("/api/emp-posts/4-9")
            .json(&json!({"id": "4-9", "tenantId": 1}))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn merge_preserves_absent_fields() {
        let app = create_test_app();
        app.post("/api/emp-posts")
            .json(&json!({"id": "3-9", "tenantId": 1, "createdBy": 5}))
            .await
            .assert_status(StatusCode::CREATED);

        let response = app
            .patch("/api/emp-posts/3-9")
            .json(&json!({"id": "3-9", "lastUpdateBy": 8}))
            .await;
        response.assert_status_ok();
        let merged: EmpPostResponse = response.json();
        assert_eq!(merged.tenant_id, Some(1));
        assert_eq!(merged.created_by, Some(5));
        assert_eq!(merged.last_update_by, Some(8));
    }

    #[test_log::test(tokio::test)]
    async fn delete_then_get_returns_not_found() {
        let app = create_test_app();
        app.post("/api/emp-posts")
            .json(&json!({"id": "3-9"}))
            .await
            .assert_status(StatusCode::CREATED);

        app.delete("/api/emp-posts/3-9").await.assert_status(StatusCode::NO_CONTENT);
        app.get("/api/emp-posts/3-9").await.assert_status(StatusCode::NOT_FOUND);
    }
}
