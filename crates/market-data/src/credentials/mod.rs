//! API credential pool.
//!
//! Credentials are discovered once from configuration entries whose names
//! share a prefix, then handed out in a fresh random order for every fetch
//! cycle. No health state is kept between cycles.

mod credential;
mod pool;

pub use credential::Credential;
pub use pool::{
    shuffled_order, shuffled_order_with, CredentialConfig, CredentialPool, DEFAULT_KEY_PREFIX,
};
