#![doc = include_str!("../README.md")]
#![warn(
    unreachable_pub,
    missing_debug_implementations,
    missing_docs,
    clippy::pedantic
)]

pub mod api;
pub mod auth;
pub mod drive;
pub mod errors;
pub mod journal;
pub mod userinfo;

pub(crate) type Result<T> = core::result::Result<T, errors::Error>;

pub use auth::{OAuth2Client, TokenPair, TokenStore};
pub use drive::Drive;
pub use errors::Error;
