//! OpenAPI document assembled from the handler annotations.

use crate::api::handlers;
use crate::api::models;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "pmctl",
        description = "Multi-tenant project management backend"
    ),
    paths(
        handlers::tenants::create_tenant,
        handlers::tenants::replace_tenant,
        handlers::tenants::merge_tenant,
        handlers::tenants::list_tenants,
        handlers::tenants::get_tenant,
        handlers::tenants::delete_tenant,
        handlers::org_types::create_org_type,
        handlers::org_types::replace_org_type,
        handlers::org_types::merge_org_type,
        handlers::org_types::list_org_types,
        handlers::org_types::get_org_type,
        handlers::org_types::delete_org_type,
        handlers::orgs::create_org,
        handlers::orgs::replace_org,
        handlers::orgs::merge_org,
        handlers::orgs::list_orgs,
        handlers::orgs::get_org,
        handlers::orgs::delete_org,
        handlers::emps::create_emp,
        handlers::emps::replace_emp,
        handlers::emps::merge_emp,
        handlers::emps::list_emps,
        handlers::emps::get_emp,
        handlers::emps::delete_emp,
        handlers::emp_posts::create_emp_post,
        handlers::emp_posts::replace_emp_post,
        handlers::emp_posts::merge_emp_post,
        handlers::emp_posts::list_emp_posts,
        handlers::emp_posts::get_emp_post,
        handlers::emp_posts::delete_emp_post,
        handlers::projects::create_project,
        handlers::projects::replace_project,
        handlers::projects::merge_project,
        handlers::projects::list_projects,
        handlers::projects::get_project,
        handlers::projects::delete_project,
        handlers::project_members::create_project_member,
        handlers::project_members::replace_project_member,
        handlers::project_members::merge_project_member,
        handlers::project_members::list_project_members,
        handlers::project_members::get_project_member,
        handlers::project_members::delete_project_member,
        handlers::effort_records::create_effort_record,
        handlers::effort_records::replace_effort_record,
        handlers::effort_records::merge_effort_record,
        handlers::effort_records::list_effort_records,
        handlers::effort_records::get_effort_record,
        handlers::effort_records::delete_effort_record,
    ),
    components(schemas(
        models::tenants::TenantPayload,
        models::tenants::TenantMerge,
        models::tenants::TenantResponse,
        models::org_types::OrgTypePayload,
        models::org_types::OrgTypeMerge,
        models::org_types::OrgTypeResponse,
        models::orgs::OrgPayload,
        models::orgs::OrgMerge,
        models::orgs::OrgResponse,
        models::emps::EmpPayload,
        models::emps::EmpMerge,
        models::emps::EmpResponse,
        models::emp_posts::EmpPostPayload,
        models::emp_posts::EmpPostMerge,
        models::emp_posts::EmpPostResponse,
        models::projects::ProjectPayload,
        models::projects::ProjectMerge,
        models::projects::ProjectResponse,
        models::project_members::ProjectMemberPayload,
        models::project_members::ProjectMemberMerge,
        models::project_members::ProjectMemberResponse,
        models::effort_records::EffortRecordPayload,
        models::effort_records::EffortRecordMerge,
        models::effort_records::EffortRecordResponse,
    ))
)]
pub struct ApiDoc;
