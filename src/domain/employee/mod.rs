//! Employee domain module

mod entity;

pub use entity::{Employee, EmployeeRole};
