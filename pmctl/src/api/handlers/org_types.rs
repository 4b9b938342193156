use crate::AppState;
use crate::api::identity;
use crate::api::models::org_types::{OrgTypeMerge, OrgTypePayload, OrgTypeResponse};
use crate::errors::{Error, Result};
use crate::types::OrgTypeId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

const RESOURCE: &str = "OrgType";

#[utoipa::path(
    post,
    path = "/api/org-types",
    tag = "org-types",
    summary = "Create organization type",
    request_body = OrgTypePayload,
    responses(
        (status = 201, description = "Organization type created", body = OrgTypeResponse),
        (status = 400, description = "Identity supplied or invalid fields"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_org_type(
    State(state): State<AppState>,
    Json(body): Json<OrgTypePayload>,
) -> Result<(StatusCode, Json<OrgTypeResponse>)> {
    identity::require_unassigned(&body, RESOURCE)?;
    body.validate()?;

    let created = state.stores.org_types.save(&body.into_record()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/org-types/{id}",
    tag = "org-types",
    summary = "Replace organization type",
    request_body = OrgTypePayload,
    params(("id" = i64, Path, description = "Organization type ID")),
    responses(
        (status = 200, description = "Organization type replaced", body = OrgTypeResponse),
        (status = 400, description = "Missing or mismatched identity, or invalid fields"),
        (status = 404, description = "Organization type not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn replace_org_type(
    State(state): State<AppState>,
    Path(id): Path<OrgTypeId>,
    Json(body): Json<OrgTypePayload>,
) -> Result<Json<OrgTypeResponse>> {
    identity::require_matching(&id, &body, RESOURCE)?;
    body.validate()?;
    if !state.stores.org_types.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    let saved = state.stores.org_types.save(&body.into_record()).await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    patch,
    path = "/api/org-types/{id}",
    tag = "org-types",
    summary = "Partially update organization type",
    request_body = OrgTypeMerge,
    params(("id" = i64, Path, description = "Organization type ID")),
    responses(
        (status = 200, description = "Organization type updated", body = OrgTypeResponse),
        (status = 400, description = "Missing or mismatched identity"),
        (status = 404, description = "Organization type not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn merge_org_type(
    State(state): State<AppState>,
    Path(id): Path<OrgTypeId>,
    Json(patch): Json<OrgTypeMerge>,
) -> Result<Json<OrgTypeResponse>> {
    identity::require_matching(&id, &patch, RESOURCE)?;
    if !state.stores.org_types.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    let mut record = state.stores.org_types.get(id).await?.ok_or_else(|| Error::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    })?;
    patch.apply(&mut record);

    let saved = state.stores.org_types.save(&record).await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    get,
    path = "/api/org-types",
    tag = "org-types",
    summary = "List organization types",
    responses((status = 200, description = "All organization types", body = Vec<OrgTypeResponse>))
)]
#[tracing::instrument(skip_all)]
pub async fn list_org_types(State(state): State<AppState>) -> Result<Json<Vec<OrgTypeResponse>>> {
    let org_types = state.stores.org_types.list().await?;
    Ok(Json(org_types.into_iter().map(OrgTypeResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/org-types/{id}",
    tag = "org-types",
    summary = "Get organization type",
    params(("id" = i64, Path, description = "Organization type ID")),
    responses(
        (status = 200, description = "Organization type details", body = OrgTypeResponse),
        (status = 404, description = "Organization type not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_org_type(State(state): State<AppState>, Path(id): Path<OrgTypeId>) -> Result<Json<OrgTypeResponse>> {
    match state.stores.org_types.get(id).await? {
        Some(org_type) => Ok(Json(org_type.into())),
        None => Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        }),
    }
}

#[utoipa::path(
    delete,
    path = "/api/org-types/{id}",
    tag = "org-types",
    summary = "Delete organization type",
    params(("id" = i64, Path, description = "Organization type ID")),
    responses((status = 204, description = "Organization type deleted"))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_org_type(State(state): State<AppState>, Path(id): Path<OrgTypeId>) -> Result<StatusCode> {
    state.stores.org_types.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::org_types::OrgTypeResponse;
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test_log::test(tokio::test)]
    async fn crud_round_trip() {
        let app = create_test_app();

        let created: OrgTypeResponse = app
            .post("/api/org-types")
            .json(&json!({"name": "department", "tenantId": 1}))
            .await
            .json();
        let id = created.id.unwrap();

        let merged: OrgTypeResponse = app
            .patch(&format!("/api/org-types/{id}"))
            .json(&json!({"id": id, "name": "division"}))
            .await
            .json();
        assert_eq!(merged.name, "division");
        assert_eq!(merged.tenant_id, Some(1));

        app.delete(&format!("/api/org-types/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.get(&format!("/api/org-types/{id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn create_rejects_identity() {
        let app = create_test_app();
        app.post("/api/org-types")
            .json(&json!({"id": 1, "name": "department"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
