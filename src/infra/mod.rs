pub mod addic7ed;
pub mod host;
pub mod provider;
