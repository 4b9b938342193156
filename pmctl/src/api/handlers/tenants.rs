use crate::AppState;
use crate::api::identity;
use crate::api::models::tenants::{TenantMerge, TenantPayload, TenantResponse};
use crate::errors::{Error, Result};
use crate::types::TenantId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

const RESOURCE: &str = "Tenant";

#[utoipa::path(
    post,
    path = "/api/tenants",
    tag = "tenants",
    summary = "Create tenant",
    request_body = TenantPayload,
    responses(
        (status = 201, description = "Tenant created", body = TenantResponse),
        (status = 400, description = "Identity supplied or invalid fields"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_tenant(
    State(state): State<AppState>,
    Json(body): Json<TenantPayload>,
) -> Result<(StatusCode, Json<TenantResponse>)> {
    identity::require_unassigned(&body, RESOURCE)?;
    body.validate()?;

    let created = state.stores.tenants.save(&body.into_record()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/tenants/{id}",
    tag = "tenants",
    summary = "Replace tenant",
    request_body = TenantPayload,
    params(("id" = i64, Path, description = "Tenant ID")),
    responses(
        (status = 200, description = "Tenant replaced", body = TenantResponse),
        (status = 400, description = "Missing or mismatched identity, or invalid fields"),
        (status = 404, description = "Tenant not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn replace_tenant(
    State(state): State<AppState>,
    Path(id): Path<TenantId>,
    Json(body): Json<TenantPayload>,
) -> Result<Json<TenantResponse>> {
    identity::require_matching(&id, &body, RESOURCE)?;
    body.validate()?;
    if !state.stores.tenants.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    let saved = state.stores.tenants.save(&body.into_record()).await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    patch,
    path = "/api/tenants/{id}",
    tag = "tenants",
    summary = "Partially update tenant",
    request_body = TenantMerge,
    params(("id" = i64, Path, description = "Tenant ID")),
    responses(
        (status = 200, description = "Tenant updated", body = TenantResponse),
        (status = 400, description = "Missing or mismatched identity"),
        (status = 404, description = "Tenant not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn merge_tenant(
    State(state): State<AppState>,
    Path(id): Path<TenantId>,
    Json(patch): Json<TenantMerge>,
) -> Result<Json<TenantResponse>> {
    identity::require_matching(&id, &patch, RESOURCE)?;
    if !state.stores.tenants.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    let mut record = state.stores.tenants.get(id).await?.ok_or_else(|| Error::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    })?;
    patch.apply(&mut record);

    let saved = state.stores.tenants.save(&record).await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    get,
    path = "/api/tenants",
    tag = "tenants",
    summary = "List tenants",
    responses((status = 200, description = "All tenants", body = Vec<TenantResponse>))
)]
#[tracing::instrument(skip_all)]
pub async fn list_tenants(State(state): State<AppState>) -> Result<Json<Vec<TenantResponse>>> {
    let tenants = state.stores.tenants.list().await?;
    Ok(Json(tenants.into_iter().map(TenantResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/tenants/{id}",
    tag = "tenants",
    summary = "Get tenant",
    params(("id" = i64, Path, description = "Tenant ID")),
    responses(
        (status = 200, description = "Tenant details", body = TenantResponse),
        (status = 404, description = "Tenant not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_tenant(State(state): State<AppState>, Path(id): Path<TenantId>) -> Result<Json<TenantResponse>> {
    match state.stores.tenants.get(id).await? {
        Some(tenant) => Ok(Json(tenant.into())),
        None => Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        }),
    }
}

#[utoipa::path(
    delete,
    path = "/api/tenants/{id}",
    tag = "tenants",
    summary = "Delete tenant",
    params(("id" = i64, Path, description = "Tenant ID")),
    responses((status = 204, description = "Tenant deleted"))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_tenant(State(state): State<AppState>, Path(id): Path<TenantId>) -> Result<StatusCode> {
    state.stores.tenants.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::tenants::TenantResponse;
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test_log::test(tokio::test)]
    async fn create_assigns_identity_and_round_trips() {
        let app = create_test_app();

        let response = app
            .post("/api/tenants")
            .json(&json!({"name": "acme", "createdBy": 7}))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: TenantResponse = response.json();
        let id = created.id.expect("created tenant must have an identity");
        assert_eq!(created.name, "acme");
        assert_eq!(created.created_by, Some(7));

        let fetched: TenantResponse = app.get(&format!("/api/tenants/{id}")).await.json();
        assert_eq!(fetched.name, "acme");
        assert_eq!(fetched.created_by, Some(7));
        assert_eq!(fetched.id, Some(id));
    }

    #[test_log::test(tokio::test)]
    async fn create_rejects_caller_supplied_identity() {
        let app = create_test_app();

        let response = app.post("/api/tenants").json(&json!({"id": 5, "name": "acme"})).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[test_log::test(tokio::test)]
    async fn create_rejects_overlong_name() {
        let app = create_test_app();

        let response = app
            .post("/api/tenants")
            .json(&json!({"name": "x".repeat(51)}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[test_log::test(tokio::test)]
    async fn replace_requires_body_identity() {
        let app = create_test_app();
        let created: TenantResponse = app
            .post("/api/tenants")
            .json(&json!({"name": "acme"}))
            .await
            .json();
        let id = created.id.unwrap();

        let response = app
            .put(&format!("/api/tenants/{id}"))
            .json(&json!({"name": "acme"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[test_log::test(tokio::test)]
    async fn replace_rejects_mismatched_identity() {
        let app = create_test_app();
        let created: TenantResponse = app
            .post("/api/tenants")
            .json(&json!({"name": "acme"}))
            .await
            .json();
        let id = created.id.unwrap();

        let response = app
            .put(&format!("/api/tenants/{id}"))
            .json(&json!({"id": id + 1, "name": "acme"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[test_log::test(tokio::test)]
    async fn replace_rejects_unknown_identity() {
        let app = create_test_app();

        let response = app
            .put("/api/tenants/404")
            .json(&json!({"id": 404, "name": "ghost"}))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn replace_overwrites_absent_fields_with_null() {
        let app = create_test_app();
        let created: TenantResponse = app
            .post("/api/tenants")
            .json(&json!({"name": "acme", "createdBy": 7}))
            .await
            .json();
        let id = created.id.unwrap();

        // createdBy is absent from the replace body, so it must be cleared
        let response = app
            .put(&format!("/api/tenants/{id}"))
            .json(&json!({"id": id, "name": "globex"}))
            .await;
        response.assert_status_ok();
        let replaced: TenantResponse = response.json();
        assert_eq!(replaced.name, "globex");
        assert_eq!(replaced.created_by, None);
    }

    #[test_log::test(tokio::test)]
    async fn merge_preserves_absent_fields() {
        let app = create_test_app();
        let created: TenantResponse = app
            .post("/api/tenants")
            .json(&json!({"name": "acme", "createdBy": 7}))
            .await
            .json();
        let id = created.id.unwrap();

        let response = app
            .patch(&format!("/api/tenants/{id}"))
            .json(&json!({"id": id, "lastUpdateBy": 9}))
            .await;
        response.assert_status_ok();
        let merged: TenantResponse = response.json();
        assert_eq!(merged.name, "acme");
        assert_eq!(merged.created_by, Some(7));
        assert_eq!(merged.last_update_by, Some(9));
    }

    #[test_log::test(tokio::test)]
    async fn merge_twice_yields_same_record() {
        let app = create_test_app();
        let created: TenantResponse = app
            .post("/api/tenants")
            .json(&json!({"name": "acme"}))
            .await
            .json();
        let id = created.id.unwrap();

        let patch = json!({"id": id, "name": "globex", "lastUpdateBy": 3});
        let first: TenantResponse = app.patch(&format!("/api/tenants/{id}")).json(&patch).await.json();
        let second: TenantResponse = app.patch(&format!("/api/tenants/{id}")).json(&patch).await.json();
        assert_eq!(serde_json::to_value(&first).unwrap(), serde_json::to_value(&second).unwrap());
    }

    #[test_log::test(tokio::test)]
    async fn merge_contract_failures() {
        let app = create_test_app();
        let created: TenantResponse = app
            .post("/api/tenants")
            .json(&json!({"name": "acme"}))
            .await
            .json();
        let id = created.id.unwrap();

        // Missing body identity
        app.patch(&format!("/api/tenants/{id}"))
            .json(&json!({"name": "x"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        // Mismatched identity
        app.patch(&format!("/api/tenants/{id}"))
            .json(&json!({"id": id + 1, "name": "x"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        // Unknown identity
        app.patch("/api/tenants/424242")
            .json(&json!({"id": 424242, "name": "x"}))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn delete_then_get_returns_not_found() {
        let app = create_test_app();
        let created: TenantResponse = app
            .post("/api/tenants")
            .json(&json!({"name": "acme"}))
            .await
            .json();
        let id = created.id.unwrap();

        app.delete(&format!("/api/tenants/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.get(&format!("/api/tenants/{id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);

        // Deleting again is still a successful no-op
        app.delete(&format!("/api/tenants/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }

    #[test_log::test(tokio::test)]
    async fn list_returns_all_tenants() {
        let app = create_test_app();
        for name in ["a", "b", "c"] {
            app.post("/api/tenants")
                .json(&json!({"name": name}))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = app.get("/api/tenants").await;
        response.assert_status_ok();
        let tenants: Vec<TenantResponse> = response.json();
        assert_eq!(tenants.len(), 3);
    }
}
