//! Render models
//!
//! Pure mappings from records to what a view displays. A front-end turns
//! these into table rows and `<option>` elements; nothing here touches a DOM.

use crate::models::Employee;

/// Number of columns in the employee table
pub const EMPLOYEE_COLUMNS: usize = 9;

/// Shown in place of a missing optional cell
pub const MISSING_CELL: &str = "-";

pub const NO_DATA_TEXT: &str = "No employee data";
pub const LOAD_FAILED_TEXT: &str = "Failed to load, please check that the server is running";
pub const SELECT_PROMPT_TEXT: &str = "Please select an employee";

/// Column headers, in cell order
pub const EMPLOYEE_HEADERS: [&str; EMPLOYEE_COLUMNS] = [
    "ID",
    "Name",
    "Gender",
    "Age",
    "Department",
    "Position",
    "Phone",
    "Email",
    "Hire date",
];

/// One table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub cells: [String; EMPLOYEE_COLUMNS],
}

impl From<&Employee> for EmployeeRow {
    fn from(emp: &Employee) -> Self {
        Self {
            cells: [
                emp.id.to_string(),
                emp.name.clone(),
                emp.gender.clone(),
                emp.age.to_string(),
                emp.department.clone(),
                emp.position.clone(),
                emp.phone.clone(),
                emp.email().unwrap_or(MISSING_CELL).to_string(),
                emp.hire_date.clone(),
            ],
        }
    }
}

/// Single row spanning the whole table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderRow {
    pub text: String,
    pub colspan: usize,
    /// Rendered in the error style
    pub error: bool,
}

/// Contents of the employee table body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<EmployeeRow>),
    Placeholder(PlaceholderRow),
}

impl TableBody {
    /// Rows for a non-empty list, the "no data" placeholder otherwise
    pub fn from_employees(employees: &[Employee]) -> Self {
        if employees.is_empty() {
            return Self::no_data();
        }
        Self::Rows(employees.iter().map(EmployeeRow::from).collect())
    }

    pub fn no_data() -> Self {
        Self::Placeholder(PlaceholderRow {
            text: NO_DATA_TEXT.to_string(),
            colspan: EMPLOYEE_COLUMNS,
            error: false,
        })
    }

    pub fn load_failed() -> Self {
        Self::Placeholder(PlaceholderRow {
            text: LOAD_FAILED_TEXT.to_string(),
            colspan: EMPLOYEE_COLUMNS,
            error: true,
        })
    }

    pub fn rows(&self) -> &[EmployeeRow] {
        match self {
            Self::Rows(rows) => rows,
            Self::Placeholder(_) => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&PlaceholderRow> {
        match self {
            Self::Rows(_) => None,
            Self::Placeholder(p) => Some(p),
        }
    }
}

/// One `<option>` of the employee select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    /// Empty-valued prompt shown before a choice is made
    pub fn prompt() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PROMPT_TEXT.to_string(),
        }
    }

    pub fn no_data() -> Self {
        Self {
            value: String::new(),
            label: NO_DATA_TEXT.to_string(),
        }
    }
}

impl From<&Employee> for SelectOption {
    fn from(emp: &Employee) -> Self {
        Self {
            value: emp.id.to_string(),
            label: format!("{} - {} - {}", emp.name, emp.department, emp.position),
        }
    }
}
