//! Employee form state
//!
//! Holds the raw text of every input exactly as a user would type it.
//! Type coercion happens only when a request body is built.

use crate::models::{Employee, EmployeeUpdate, NewEmployee};
use crate::util::parse_int;

/// Raw field values of the add/update employee form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    /// Hidden id field (update form only)
    pub employee_id: String,
    pub name: String,
    pub gender: String,
    pub age: String,
    pub department: String,
    pub position: String,
    pub phone: String,
    pub email: String,
    pub hire_date: String,
}

impl EmployeeForm {
    /// Pre-fill from a fetched record. A missing email becomes `""`.
    pub fn from_employee(emp: &Employee) -> Self {
        Self {
            employee_id: emp.id.to_string(),
            name: emp.name.clone(),
            gender: emp.gender.clone(),
            age: emp.age.to_string(),
            department: emp.department.clone(),
            position: emp.position.clone(),
            phone: emp.phone.clone(),
            email: emp.email.clone().unwrap_or_default(),
            hire_date: emp.hire_date.clone(),
        }
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Body for `POST /employee/add`
    pub fn to_new_employee(&self, student_id: Option<i64>) -> NewEmployee {
        NewEmployee {
            student_id,
            name: self.name.clone(),
            gender: self.gender.clone(),
            age: parse_int(&self.age),
            department: self.department.clone(),
            position: self.position.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            hire_date: self.hire_date.clone(),
        }
    }

    /// Body for `POST /update`
    pub fn to_update(&self) -> EmployeeUpdate {
        EmployeeUpdate {
            id: parse_int(&self.employee_id),
            name: self.name.clone(),
            gender: self.gender.clone(),
            age: parse_int(&self.age),
            department: self.department.clone(),
            position: self.position.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            hire_date: self.hire_date.clone(),
        }
    }
}
