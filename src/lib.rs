pub mod cli;
pub mod config;
pub mod constants;
pub mod image;
pub mod project;
pub mod service;

pub use anyhow::Result;
