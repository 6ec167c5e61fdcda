// ============================
// staffdir-backend-lib/src/directory.rs
// ============================
//! Directory abstraction with an in-memory implementation.
use std::sync::Arc;

use async_trait::async_trait;
use staffdir_common::Employee;

use crate::error::AppError;

/// Trait for directory backends
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// List every employee in the directory
    async fn list_employees(&self) -> Result<Vec<Employee>, AppError>;
}

/// Fixed in-memory implementation of the `EmployeeDirectory` trait
#[derive(Clone)]
pub struct InMemoryDirectory {
    employees: Arc<Vec<Employee>>,
}

impl InMemoryDirectory {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees: Arc::new(employees),
        }
    }

    /// Demo roster served by the bundled binary.
    pub fn sample() -> Self {
        Self::new(vec![
            Employee {
                id: 1,
                name: "Ada Lovelace".to_string(),
                email: "ada@staffdir.example".to_string(),
                department: "Engineering".to_string(),
            },
            Employee {
                id: 2,
                name: "Grace Hopper".to_string(),
                email: "grace@staffdir.example".to_string(),
                department: "Engineering".to_string(),
            },
            Employee {
                id: 3,
                name: "Katherine Johnson".to_string(),
                email: "katherine@staffdir.example".to_string(),
                department: "Research".to_string(),
            },
        ])
    }
}

#[async_trait]
impl EmployeeDirectory for InMemoryDirectory {
    async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.employees.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_listing() {
        let directory = InMemoryDirectory::new(vec![Employee {
            id: 7,
            name: "Tom Cat".to_string(),
            email: "tom@staffdir.example".to_string(),
            department: "Facilities".to_string(),
        }]);

        let employees = directory.list_employees().await.unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, 7);
    }

    #[tokio::test]
    async fn test_sample_roster_is_not_empty() {
        let employees = InMemoryDirectory::sample().list_employees().await.unwrap();
        assert!(!employees.is_empty());
    }
}
