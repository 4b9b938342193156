use crate::AppState;
use crate::api::identity;
use crate::api::models::projects::{ProjectMerge, ProjectPayload, ProjectResponse};
use crate::errors::{Error, Result};
use crate::types::ProjectId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

const RESOURCE: &str = "Project";

#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    summary = "Create project",
    request_body = ProjectPayload,
    responses(
        (status = 201, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Identity supplied or invalid fields"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<ProjectPayload>,
) -> Result<(StatusCode, Json<ProjectResponse>)> {
    identity::require_unassigned(&body, RESOURCE)?;
    body.validate()?;

    let created = state.stores.projects.save(&body.into_record()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    summary = "Replace project",
    request_body = ProjectPayload,
    params(("id" = i64, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project replaced", body = ProjectResponse),
        (status = 400, description = "Missing or mismatched identity, or invalid fields"),
        (status = 404, description = "Project not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn replace_project(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
    Json(body): Json<ProjectPayload>,
) -> Result<Json<ProjectResponse>> {
    identity::require_matching(&id, &body, RESOURCE)?;
    body.validate()?;
    if !state.stores.projects.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    let saved = state.stores.projects.save(&body.into_record()).await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    patch,
    path = "/api/projects/{id}",
    tag = "projects",
    summary = "Partially update project",
    request_body = ProjectMerge,
    params(("id" = i64, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project updated", body = ProjectResponse),
        (status = 400, description = "Missing or mismatched identity"),
        (status = 404, description = "Project not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn merge_project(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
    Json(patch): Json<ProjectMerge>,
) -> Result<Json<ProjectResponse>> {
    identity::require_matching(&id, &patch, RESOURCE)?;
    if !state.stores.projects.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    let mut record = state.stores.projects.get(id).await?.ok_or_else(|| Error::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    })?;
    patch.apply(&mut record);

    let saved = state.stores.projects.save(&record).await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    summary = "List projects",
    responses((status = 200, description = "All projects", body = Vec<ProjectResponse>))
)]
#[tracing::instrument(skip_all)]
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<ProjectResponse>>> {
    let projects = state.stores.projects.list().await?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    summary = "Get project",
    params(("id" = i64, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project details", body = ProjectResponse),
        (status = 404, description = "Project not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_project(State(state): State<AppState>, Path(id): Path<ProjectId>) -> Result<Json<ProjectResponse>> {
    match state.stores.projects.get(id).await? {
        Some(project) => Ok(Json(project.into())),
        None => Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        }),
    }
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    summary = "Delete project",
    params(("id" = i64, Path, description = "Project ID")),
    responses((status = 204, description = "Project deleted"))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_project(State(state): State<AppState>, Path(id): Path<ProjectId>) -> Result<StatusCode> {
    state.stores.projects.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::projects::ProjectResponse;
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test_log::test(tokio::test)]
    async fn crud_round_trip() {
        let app = create_test_app();

        let created: ProjectResponse = app
            .post("/api/projects")
            .json(&json!({
                "num": "P-001",
                "name": "migration",
                "status": "AC",
                "mngId": 3,
                "tenantId": 1
            }))
            .await
            .json();
        let id = created.id.unwrap();

        // Replace: contractId stays null, mngId omitted so it is cleared
        let replaced: ProjectResponse = app
            .put(&format!("/api/projects/{id}"))
            .json(&json!({"id": id, "num": "P-001", "name": "migration", "status": "CL"}))
            .await
            .json();
        assert_eq!(replaced.status, "CL");
        assert_eq!(replaced.mng_id, None);

        // Merge: only status changes
        let merged: ProjectResponse = app
            .patch(&format!("/api/projects/{id}"))
            .json(&json!({"id": id, "status": "AR"}))
            .await
            .json();
        assert_eq!(merged.status, "AR");
        assert_eq!(merged.name, "migration");

        app.delete(&format!("/api/projects/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.get(&format!("/api/projects/{id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn create_rejects_overlong_status() {
        let app = create_test_app();
        app.post("/api/projects")
            .json(&json!({"num": "P-1", "name": "x", "status": "ABC"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
