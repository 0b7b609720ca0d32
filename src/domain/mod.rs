pub mod address;
pub mod auth;
pub mod login_logs;
pub mod password;
pub mod registrations;
pub mod users;
