pub mod login_logs;
pub mod mock;
pub mod registrations;
pub mod users;
