pub mod address;
pub mod auth;
pub mod db;
pub mod password;
pub mod repositories;
pub mod state;
