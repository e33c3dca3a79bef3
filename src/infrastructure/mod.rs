//! Infrastructure layer - Built-in catalogs, form assembly and logging

pub mod catalog;
pub mod form;
pub mod logging;
