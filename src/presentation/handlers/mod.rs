pub mod address;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod login_logs;
pub mod registrations;
pub mod users;
