//!
//! [`Result`] encapsulating the crate [`Error`](super::error::Error)
//!

pub type Result<T> = std::result::Result<T, crate::error::Error>;
