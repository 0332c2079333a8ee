pub mod error;
pub mod validation;
pub mod config;
pub mod model;
pub mod source;
pub mod ops;
pub mod queries;
pub mod export;
pub mod cli;
