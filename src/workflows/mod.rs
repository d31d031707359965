pub mod download;
pub mod identity;
pub mod presenter;
pub mod router;
pub mod search;

#[cfg(test)]
mod testing;
