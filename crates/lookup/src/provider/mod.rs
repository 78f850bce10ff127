//! Address provider abstraction and implementations.
//!
//! This module contains:
//! - The `ProviderClient` trait every raced source implements
//! - Concrete JSON-over-HTTP providers (BrasilAPI, ViaCEP)
//!
//! Providers know their own URL layout and response schema. The racer only
//! sees the normalized `AddressRecord` they return.

mod http;
mod traits;

pub mod brasil_api;
pub mod via_cep;

pub(crate) use http::default_client;
pub use traits::ProviderClient;
