//! Typed async client for the seller statistics REST API.
//!
//! Each collection resource (incomes, orders, sales, stocks) is tied to its
//! wire item shape at compile time, and every fetch resolves to a uniform
//! success/error result instead of propagating transport faults.

mod client;
mod config;
mod errors;
mod payload;
mod resource;
pub mod types;

pub use self::client::{Client, Method};
pub use self::config::{Config, API_KEY_ENV, HOST_ENV};
pub use self::errors::Error;
pub use self::payload::FetchPayload;
pub use self::resource::{Resource, ResourceItem};
