pub mod connection;
pub mod migrations;
pub mod property_repo;

pub use connection::*;
