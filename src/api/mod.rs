pub mod client;
pub mod error;
pub mod types;

pub use client::{Api, HttpApi};
pub use error::ApiError;
