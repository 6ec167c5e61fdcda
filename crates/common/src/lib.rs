// ================
// common/src/lib.rs
// ================
//! Common types shared between the staffdir server and its clients.
//! This module defines the JSON wire representation of directory records.

use serde::{Deserialize, Serialize};

/// Employee identifier type
pub type EmployeeId = u64;

/// A single directory entry
/// # Fields
/// * `id` - Unique employee identifier
/// * `name` - Full display name
/// * `email` - Work email address
/// * `department` - Department label
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub department: String,
}
