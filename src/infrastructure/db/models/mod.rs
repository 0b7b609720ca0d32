pub mod login_logs;
pub mod registrations;
pub mod users;
