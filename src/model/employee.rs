use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub type EmployeeId = u64;

/// Stored record. Never serialized to clients: `salary` stays behind the
/// store boundary and only [`EmployeeView`] goes out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub role: String,
    pub salary: i64,
}

impl Employee {
    pub fn view(&self) -> EmployeeView {
        EmployeeView {
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }

    pub fn apply(&mut self, patch: EmployeePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
    }
}

impl From<NewEmployee> for Employee {
    fn from(new: NewEmployee) -> Self {
        Self {
            name: new.name,
            role: new.role,
            salary: new.salary,
        }
    }
}

/// Sanitized employee as returned by every read and write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"name": "Test User", "role": "Tester"}))]
pub struct EmployeeView {
    #[schema(example = "Test User")]
    pub name: String,
    #[schema(example = "Tester")]
    pub role: String,
}

/// Validated body of `POST /employees`.
#[derive(Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct NewEmployee {
    #[schema(example = "Test User")]
    pub name: String,
    #[schema(example = "Tester")]
    pub role: String,
    #[schema(example = 100000)]
    pub salary: i64,
}

/// Validated body of `PUT /employees/{id}`; absent fields stay unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct EmployeePatch {
    #[schema(example = "Updated Test", nullable = true)]
    pub name: Option<String>,
    #[schema(example = "Senior Intern", nullable = true)]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({"deleted": {"name": "Delete Test", "role": "Temp"}}))]
pub struct DeletedEmployee {
    pub deleted: EmployeeView,
}
