use crate::AppState;
use crate::api::identity;
use crate::api::models::project_members::{ProjectMemberMerge, ProjectMemberPayload, ProjectMemberResponse};
use crate::errors::{Error, Result};
use crate::types::ProjectMemberId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

const RESOURCE: &str = "ProjectMember";

#[utoipa::path(
    post,
    path = "/api/project-members",
    tag = "project-members",
    summary = "Create project membership",
    request_body = ProjectMemberPayload,
    responses(
        (status = 201, description = "Membership created", body = ProjectMemberResponse),
        (status = 400, description = "Identity supplied or invalid fields"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_project_member(
    State(state): State<AppState>,
    Json(body): Json<ProjectMemberPayload>,
) -> Result<(StatusCode, Json<ProjectMemberResponse>)> {
    identity::require_unassigned(&body, RESOURCE)?;
    body.validate()?;

    let created = state.stores.project_members.save(&body.into_record()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/project-members/{id}",
    tag = "project-members",
    summary = "Replace project membership",
    request_body = ProjectMemberPayload,
    params(("id" = i64, Path, description = "Membership ID")),
    responses(
        (status = 200, description = "Membership replaced", body = ProjectMemberResponse),
        (status = 400, description = "Missing or mismatched identity, or invalid fields"),
        (status = 404, description = "Membership not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn replace_project_member(
    State(state): State<AppState>,
    Path(id): Path<ProjectMemberId>,
    Json(body): Json<ProjectMemberPayload>,
) -> Result<Json<ProjectMemberResponse>> {
    identity::require_matching(&id, &body, RESOURCE)?;
    body.validate()?;
    if !state.stores.project_members.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    let saved = state.stores.project_members.save(&body.into_record()).await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    patch,
    path = "/api/project-members/{id}",
    tag = "project-members",
    summary = "Partially update project membership",
    request_body = ProjectMemberMerge,
    params(("id" = i64, Path, description = "Membership ID")),
    responses(
        (status = 200, description = "Membership updated", body = ProjectMemberResponse),
        (status = 400, description = "Missing or mismatched identity"),
        (status = 404, description = "Membership not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn merge_project_member(
    State(state): State<AppState>,
    Path(id): Path<ProjectMemberId>,
    Json(patch): Json<ProjectMemberMerge>,
) -> Result<Json<ProjectMemberResponse>> {
    identity::require_matching(&id, &patch, RESOURCE)?;
    if !state.stores.project_members.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    let mut record = state
        .stores
        .project_members
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        })?;
    patch.apply(&mut record);

    let saved = state.stores.project_members.save(&record).await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    get,
    path = "/api/project-members",
    tag = "project-members",
    summary = "List project memberships",
    responses((status = 200, description = "All memberships", body = Vec<ProjectMemberResponse>))
)]
#[tracing::instrument(skip_all)]
pub async fn list_project_members(State(state): State<AppState>) -> Result<Json<Vec<ProjectMemberResponse>>> {
    let members = state.stores.project_members.list().await?;
    Ok(Json(members.into_iter().map(ProjectMemberResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/project-members/{id}",
    tag = "project-members",
    summary = "Get project membership",
    params(("id" = i64, Path, description = "Membership ID")),
    responses(
        (status = 200, description = "Membership details", body = ProjectMemberResponse),
        (status = 404, description = "Membership not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_project_member(
    State(state): State<AppState>,
    Path(id): Path<ProjectMemberId>,
) -> Result<Json<ProjectMemberResponse>> {
    match state.stores.project_members.get(id).await? {
        Some(member) => Ok(Json(member.into())),
        None => Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        }),
    }
}

#[utoipa::path(
    delete,
    path = "/api/project-members/{id}",
    tag = "project-members",
    summary = "Delete project membership",
    params(("id" = i64, Path, description = "Membership ID")),
    responses((status = 204, description = "Membership deleted"))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_project_member(State(state): State<AppState>, Path(id): Path<ProjectMemberId>) -> Result<StatusCode> {
    state.stores.project_members.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::project_members::ProjectMemberResponse;
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test_log::test(tokio::test)]
    async fn crud_round_trip() {
        let app = create_test_app();

        let created: ProjectMemberResponse = app
            .post("/api/project-members")
            .json(&json!({
                "status": "AC",
                "empId": 3,
                "projectId": 8,
                "estimateInvestRatio": 50,
                "tenantId": 1
            }))
            .await
            .json();
        let id = created.id.unwrap();

        let merged: ProjectMemberResponse = app
            .patch(&format!("/api/project-members/{id}"))
            .json(&json!({"id": id, "estimateInvestRatio": 80}))
            .await
            .json();
        assert_eq!(merged.estimate_invest_ratio, Some(80));
        assert_eq!(merged.emp_id, Some(3));
        assert_eq!(merged.status, "AC");

        app.delete(&format!("/api/project-members/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.get(&format!("/api/project-members/{id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
