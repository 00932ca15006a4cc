//! Authentication module
//!
//! Provides HS256 bearer tokens and the extractor that checks them.

mod expiry;
mod jwt;
mod middleware;

pub use expiry::{parse_expiry, ExpiryParseError};
pub use jwt::{TokenClaims, TokenError, TokenService};
pub use middleware::{AuthUser, TOKEN_COOKIE};
