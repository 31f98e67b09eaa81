pub mod backup;
pub mod cabinet;
pub mod calculator;
pub mod panel;
pub mod project;
pub mod query;
pub mod validate;
