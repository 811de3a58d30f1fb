//! HTTP handlers

pub mod health;
pub mod import;
pub mod menus;
pub mod odata;
