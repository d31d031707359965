pub mod action;
pub mod language;
pub mod models;
