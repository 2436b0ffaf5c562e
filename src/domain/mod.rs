pub mod access;
pub mod browse;
pub mod catalog;
pub mod query;
pub mod resource;
pub mod tracking;
pub mod window;
