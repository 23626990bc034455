pub mod config;
pub mod dom;
pub mod fetch;
pub mod storage;
