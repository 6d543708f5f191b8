use crate::model::employee::{DeletedEmployee, EmployeePatch, EmployeeView, NewEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Flamecraft Employee API",
        version = "1.0.0",
        description = r#"
## Employee Store

In-memory employee records with CRUD endpoints and Kubernetes probes.

- Ids are assigned by the service and never reused.
- `salary` is accepted on create and never returned by any endpoint.
- Request bodies above the configured size limit are rejected with **413**
  before they are parsed.
- Errors are returned as `{"error": "<message>"}`.
"#,
    ),
    paths(
        crate::api::health::health,
        crate::api::health::ready,

        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee
    ),
    components(
        schemas(
            EmployeeView,
            NewEmployee,
            EmployeePatch,
            DeletedEmployee
        )
    ),
    tags(
        (name = "Employee", description = "Employee management APIs"),
        (name = "Probes", description = "Liveness and readiness"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in ["/health", "/ready", "/employees", "/employees/{employee_id}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
