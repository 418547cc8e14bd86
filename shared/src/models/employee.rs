//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee record as returned by `/employees` and `/employee/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub gender: String,
    pub age: i64,
    pub department: String,
    pub position: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Date string as entered (e.g. "2024-03-01")
    pub hire_date: String,
}

impl Employee {
    /// Email if present and non-empty
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}

/// Create employee payload (`POST /employee/add`)
///
/// Integer fields that did not parse are sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Role identifier of the submitting session
    pub student_id: Option<i64>,
    pub name: String,
    pub gender: String,
    pub age: Option<i64>,
    pub department: String,
    pub position: String,
    pub phone: String,
    pub email: String,
    pub hire_date: String,
}

/// Update employee payload (`POST /update`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub id: Option<i64>,
    pub name: String,
    pub gender: String,
    pub age: Option<i64>,
    pub department: String,
    pub position: String,
    pub phone: String,
    pub email: String,
    pub hire_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_null_email() {
        let json = r#"{"id":3,"name":"张三","gender":"男","age":30,"department":"研发部",
            "position":"工程师","phone":"13800000000","email":null,"hire_date":"2023-07-01"}"#;
        let emp: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(emp.id, 3);
        assert!(emp.email().is_none());
    }

    #[test]
    fn test_empty_email_treated_as_missing() {
        let json = r#"{"id":1,"name":"a","gender":"女","age":22,"department":"d",
            "position":"p","phone":"1","email":"","hire_date":"2024-01-01"}"#;
        let emp: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(emp.email.as_deref(), Some(""));
        assert!(emp.email().is_none());
    }

    #[test]
    fn test_new_employee_nan_age_serializes_null() {
        let body = NewEmployee {
            student_id: Some(1),
            name: "a".into(),
            gender: "男".into(),
            age: None,
            department: "d".into(),
            position: "p".into(),
            phone: "1".into(),
            email: String::new(),
            hire_date: "2024-01-01".into(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value["age"].is_null());
        assert_eq!(value["student_id"], 1);
        assert_eq!(value["email"], "");
    }
}
