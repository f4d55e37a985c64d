pub mod config;
pub mod data_storage;
pub mod messages;
pub mod task;
pub mod view;
