use crate::AppState;
use crate::api::identity;
use crate::api::models::emps::{EmpMerge, EmpPayload, EmpResponse};
use crate::errors::{Error, Result};
use crate::types::EmpId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

const RESOURCE: &str = "Emp";

#[utoipa::path(
    post,
    path = "/api/emps",
    tag = "emps",
    summary = "Create employee",
    request_body = EmpPayload,
    responses(
        (status = 201, description = "Employee created", body = EmpResponse),
        (status = 400, description = "Identity supplied or invalid fields"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_emp(
    State(state): State<AppState>,
    Json(body): Json<EmpPayload>,
) -> Result<(StatusCode, Json<EmpResponse>)> {
    identity::require_unassigned(&body, RESOURCE)?;
    body.validate()?;

    let created = state.stores.emps.save(&body.into_record()).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/api/emps/{id}",
    tag = "emps",
    summary = "Replace employee",
    request_body = EmpPayload,
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee replaced", body = EmpResponse),
        (status = 400, description = "Missing or mismatched identity, or invalid fields"),
        (status = 404, description = "Employee not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn replace_emp(
    State(state): State<AppState>,
    Path(id): Path<EmpId>,
    Json(body): Json<EmpPayload>,
) -> Result<Json<EmpResponse>> {
    identity::require_matching(&id, &body, RESOURCE)?;
    body.validate()?;
    if !state.stores.emps.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    let saved = state.stores.emps.save(&body.into_record()).await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    patch,
    path = "/api/emps/{id}",
    tag = "emps",
    summary = "Partially update employee",
    request_body = EmpMerge,
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee updated", body = EmpResponse),
        (status = 400, description = "Missing or mismatched identity"),
        (status = 404, description = "Employee not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn merge_emp(
    State(state): State<AppState>,
    Path(id): Path<EmpId>,
    Json(patch): Json<EmpMerge>,
) -> Result<Json<EmpResponse>> {
    identity::require_matching(&id, &patch, RESOURCE)?;
    if !state.stores.emps.exists(id).await? {
        return Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        });
    }

    let mut record = state.stores.emps.get(id).await?.ok_or_else(|| Error::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    })?;
    patch.apply(&mut record);

    let saved = state.stores.emps.save(&record).await?;
    Ok(Json(saved.into()))
}

#[utoipa::path(
    get,
    path = "/api/emps",
    tag = "emps",
    summary = "List employees",
    responses((status = 200, description = "All employees", body = Vec<EmpResponse>))
)]
#[tracing::instrument(skip_all)]
pub async fn list_emps(State(state): State<AppState>) -> Result<Json<Vec<EmpResponse>>> {
    let emps = state.stores.emps.list().await?;
    Ok(Json(emps.into_iter().map(EmpResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/emps/{id}",
    tag = "emps",
    summary = "Get employee",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee details", body = EmpResponse),
        (status = 404, description = "Employee not found"),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_emp(State(state): State<AppState>, Path(id): Path<EmpId>) -> Result<Json<EmpResponse>> {
    match state.stores.emps.get(id).await? {
        Some(emp) => Ok(Json(emp.into())),
        None => Err(Error::NotFound {
            resource: RESOURCE,
            id: id.to_string(),
        }),
    }
}

#[utoipa::path(
    delete,
    path = "/api/emps/{id}",
    tag = "emps",
    summary = "Delete employee",
    params(("id" = i64, Path, description = "Employee ID")),
    responses((status = 204, description = "Employee deleted"))
)]
#[tracing::instrument(skip_all)]
pub async fn delete_emp(State(state): State<AppState>, Path(id): Path<EmpId>) -> Result<StatusCode> {
    state.stores.emps.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use crate::api::models::emps::EmpResponse;
    use crate::db::models::emps::Gender;
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test_log::test(tokio::test)]
    async fn crud_round_trip() {
        let app = create_test_app();

        let created: EmpResponse = app
            .post("/api/emps")
            .json(&json!({
                "name": "Ada Lovelace",
                "num": "E-1815",
                "idNum": "X100",
                "gender": "FEMALE",
                "tenantId": 1
            }))
            .await
            .json();
        let id = created.id.unwrap();
        assert_eq!(created.gender, Some(Gender::Female));

        // Merge keeps the gender the patch does not mention
        let merged: EmpResponse = app
            .patch(&format!("/api/emps/{id}"))
            .json(&json!({"id": id, "orgId": 4}))
            .await
            .json();
        assert_eq!(merged.gender, Some(Gender::Female));
        assert_eq!(merged.org_id, Some(4));

        app.delete(&format!("/api/emps/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        app.get(&format!("/api/emps/{id}"))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn create_requires_employee_number() {
        let app = create_test_app();
        // num and idNum are required columns: missing fields fail deserialization
        let response = app
            .post("/api/emps")
            .json(&json!({"name": "Ada Lovelace"}))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}
