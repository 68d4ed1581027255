// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod cafes;
pub mod health;
pub mod home;

pub use cafes::config as cafes_config;
pub use health::config as health_config;
pub use home::config as home_config;
