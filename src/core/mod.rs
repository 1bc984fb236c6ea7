pub mod auth;
pub mod backup;
pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod harvest;
pub mod ids;
pub mod import;
pub mod log;
pub mod rules;
pub mod tools;
pub mod work_logs;
pub mod workers;
