pub mod auth;
pub mod cashflow_service;
pub mod catalog_service;
pub mod expense_service;
pub mod people_service;
pub mod report_service;
pub mod schedule_service;
