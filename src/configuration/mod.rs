pub mod config;
pub mod descriptor;
