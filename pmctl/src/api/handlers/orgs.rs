use crate::AppState;
use crate::api::identity;
use crate::api::models::orgs::{OrgMerge, OrgPayload, OrgResponse};
use crate::errors::{Error, Result};
use crate::types::OrgId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

const RESOURCE: &str = "Org";

#[utoipa::path(
    post,
    path = "/api/orgs",
    tag = "orgs",
    summary = "Create organization",
    request_body = OrgPayload,
    responses(
        (status = 201, description = "Organization created", body = OrgResponse),
        (status = 400, description = "Identity supplied or invalid fields"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_org(
    State(state): State<AppState>,
    Json(body): Json<OrgPayload>,
) -> Result<(StatusCode, Json<OrgResponse>)> {
    identity::require_unassigned(&body, RESOURCE)?;
    body.validate()?;

    let created = state.stores.orgs.save(&body.into_record()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/orgs/{id}",
    tag = "orgs",
    summary = "Replace organization",
    request_body = OrgPayload,
    params(("id" = i64, Path, description = "Organization ID")),
    responses(
        (status = 200, description = "Organization replaced", body = OrgResponse),
        (status = 400, description = "Missing or mismatched identity, or invalid fields"),
        (status = 404, description = "Organization not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn replace_org(
    State(state): State<AppState>,
    Path(id): Path<OrgId>,
    Json(body): Json<OrgPayload>,
) -> Result<Json<OrgResponse>> {
    identity::require_matching(&id, &body, RESOURCE)?;
    body.validate()?;
    if !state.stores.orgs.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    let saved = state.stores.orgs.save(&body.into_record()).await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    patch,
    path = "/api/orgs/{id}",
    tag = "orgs",
    summary = "Partially update organization",
    request_body = OrgMerge,
    params(("id" = i64, Path, description = "Organization ID")),
    responses(
        (status = 200, description = "Organization updated", body = OrgResponse),
        (status = 400, description = "Missing or mismatched identity"),
        (status = 404, description = "Organization not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn merge_org(
    State(state): State<AppState>,
    Path(id): Path<OrgId>,
    Json(patch): Json<OrgMerge>,
) -> Result<Json<OrgResponse>> {
    identity::require_matching(&id, &patch, RESOURCE)?;
    if !state.stores.orgs.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    let mut record = state.stores.orgs.get(id).await?.ok_or_else(|| Error::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    })?;
    patch.apply(&mut record);

    let saved = state.stores.orgs.save(&record).await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    get,
    path = "/api/orgs",
    tag = "orgs",
    summary = "List organizations",
    responses((status = 200, description = "All organizations", body = Vec<OrgResponse>))
)]
#[tracing::instrument(skip_all)]
pub async fn list_orgs(State(state): State<AppState>) -> Result<Json<Vec<OrgResponse>>> {
    let orgs = state.stores.orgs.list().await?;
    Ok(Json(orgs.into_iter().map(OrgResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/orgs/{id}",
    tag = "orgs",
    summary = "Get organization",
    params(("id" = i64, Path, description = "Organization ID")),
    responses(
        (status = 200, description = "Organization details", body = OrgResponse),
        (status = 404, description = "Organization not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_org(State(state): State<AppState>, Path(id): Path<OrgId>) -> Result<Json<OrgResponse>> {
    match state.stores.orgs.get(id).await? {
        Some(org) => Ok(Json(org.into())),
        None => Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        }),
    }
}

#[utoipa::path(
    delete,
    path = "/api/orgs/{id}",
    tag = "orgs",
    summary = "Delete organization",
    params(("id" = i64, Path, description = "Organization ID")),
    responses((status = 204, description = "Organization deleted"))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_org(State(state): State<AppState>, Path(id): Path<OrgId>) -> Result<StatusCode> {
    state.stores.orgs.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::orgs::OrgResponse;
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test_log::test(tokio::test)]
    async fn crud_round_trip() {
        let app = create_test_app();

        let created: OrgResponse = app
            .post("/api/orgs")
            .json(&json!({"name": "platform", "tenantId": 1, "orgType": 2, "parentOrgId": 10}))
            .await
            .json();
        let id = created.id.unwrap();
        assert_eq!(created.parent_org_id, Some(10));

        // Replace drops the parent linkage that the body omits
        let replaced: OrgResponse = app
            .put(&format!("/api/orgs/{id}"))
            .json(&json!({"id": id, "name": "platform", "tenantId": 1}))
            .await
            .json();
        assert_eq!(replaced.org_type, None);
        assert_eq!(replaced.parent_org_id, None);

        // Merge keeps everything it does not mention
        let merged: OrgResponse = app
            .patch(&format!("/api/orgs/{id}"))
            .json(&json!({"id": id, "headId": 77}))
            .await
            .json();
        assert_eq!(merged.name, "platform");
        assert_eq!(merged.head_id, Some(77));

        app.delete(&format!("/api/orgs/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.get(&format!("/api/orgs/{id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
