//! LargeInt demo library — application logic for the demonstration driver.

pub mod app;
pub mod config;
