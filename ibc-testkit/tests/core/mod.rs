pub mod ics03_connection;
pub mod query;
