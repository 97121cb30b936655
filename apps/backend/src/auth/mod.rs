//! Token-based authentication: claims payload, PASETO token maker and
//! password hashing.

pub mod errors;
pub mod password;
pub mod payload;
pub mod token;

pub use errors::TokenError;
pub use password::{check_password, hash_password, PasswordError};
pub use payload::Payload;
pub use token::{PasetoMaker, TokenMaker, SYMMETRIC_KEY_SIZE};
