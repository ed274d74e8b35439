//! Service credential providers.

pub mod static_token;

pub use static_token::StaticTokenAuth;
