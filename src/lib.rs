pub mod api;
pub mod auth;
pub mod mcp;
pub mod models;
mod serde_utils;
pub mod tools;
pub mod upstream;
pub mod validation;

#[cfg(test)]
mod test_support;
