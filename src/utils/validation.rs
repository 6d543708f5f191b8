use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::employee::{EmployeePatch, NewEmployee};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("field `{0}` cannot be set by the client")]
    ImmutableField(&'static str),
}

/// Schema check for `POST /employees`.
pub fn parse_new_employee(payload: &Value) -> Result<NewEmployee, ValidationError> {
    let obj = as_object(payload)?;
    reject_present(obj, "id")?;

    Ok(NewEmployee {
        name: string_field(obj, "name")?.ok_or(ValidationError::MissingField("name"))?,
        role: string_field(obj, "role")?.ok_or(ValidationError::MissingField("role"))?,
        salary: integer_field(obj, "salary")?.ok_or(ValidationError::MissingField("salary"))?,
    })
}

/// Schema check for `PUT /employees/{id}`. Only `name` and `role` may change.
pub fn parse_employee_patch(payload: &Value) -> Result<EmployeePatch, ValidationError> {
    let obj = as_object(payload)?;
    reject_present(obj, "id")?;
    reject_present(obj, "salary")?;

    Ok(EmployeePatch {
        name: string_field(obj, "name")?,
        role: string_field(obj, "role")?,
    })
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, ValidationError> {
    payload.as_object().ok_or(ValidationError::NotAnObject)
}

fn reject_present(obj: &Map<String, Value>, field: &'static str) -> Result<(), ValidationError> {
    if obj.contains_key(field) {
        return Err(ValidationError::ImmutableField(field));
    }
    Ok(())
}

fn string_field(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match obj.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::WrongType {
            field,
            expected: "a string",
        }),
    }
}

fn integer_field(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<i64>, ValidationError> {
    let wrong_type = ValidationError::WrongType {
        field,
        expected: "an integer",
    };

    match obj.get(field) {
        None => Ok(None),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(i));
            }
            // 100000.0 is accepted, 1.5 and out-of-range values are not
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Ok(Some(f as i64))
                }
                _ => Err(wrong_type),
            }
        }
        Some(_) => Err(wrong_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_complete_create_body() {
        let parsed =
            parse_new_employee(&json!({"name": "Test User", "role": "Tester", "salary": 100000}))
                .unwrap();
        assert_eq!(
            parsed,
            NewEmployee {
                name: "Test User".into(),
                role: "Tester".into(),
                salary: 100000,
            }
        );
    }

    #[test]
    fn role_as_number_is_wrong_type() {
        let err = parse_new_employee(&json!({"name": "Test", "role": 123})).unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongType {
                field: "role",
                expected: "a string"
            }
        );
    }

    #[test]
    fn missing_salary_is_rejected() {
        let err = parse_new_employee(&json!({"name": "Test", "role": "Tester"})).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("salary"));
    }

    #[test]
    fn salary_must_be_integer_like() {
        assert_eq!(
            parse_new_employee(&json!({"name": "a", "role": "b", "salary": 50000.0}))
                .unwrap()
                .salary,
            50000
        );
        for bad in [json!(1.5), json!("100"), json!(true), json!(null)] {
            let body = json!({"name": "a", "role": "b", "salary": bad});
            assert!(matches!(
                parse_new_employee(&body),
                Err(ValidationError::WrongType { field: "salary", .. })
            ));
        }
    }

    #[test]
    fn client_cannot_choose_id() {
        let err = parse_new_employee(&json!({"id": 7, "name": "a", "role": "b", "salary": 1}))
            .unwrap_err();
        assert_eq!(err, ValidationError::ImmutableField("id"));
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert_eq!(
            parse_new_employee(&json!(["name"])).unwrap_err(),
            ValidationError::NotAnObject
        );
        assert_eq!(
            parse_employee_patch(&json!("x")).unwrap_err(),
            ValidationError::NotAnObject
        );
    }

    #[test]
    fn patch_takes_any_subset_of_name_and_role() {
        assert_eq!(
            parse_employee_patch(&json!({"role": "Senior Intern"})).unwrap(),
            EmployeePatch {
                name: None,
                role: Some("Senior Intern".into()),
            }
        );
        assert_eq!(
            parse_employee_patch(&json!({})).unwrap(),
            EmployeePatch::default()
        );
    }

    #[test]
    fn patch_rejects_salary_and_bad_types() {
        assert_eq!(
            parse_employee_patch(&json!({"salary": 1})).unwrap_err(),
            ValidationError::ImmutableField("salary")
        );
        assert!(matches!(
            parse_employee_patch(&json!({"name": 5})),
            Err(ValidationError::WrongType { field: "name", .. })
        ));
    }
}
