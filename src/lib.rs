//! Payload builder for the Postal message API.
//!
//! Callers assemble an [`Email`] out of [`Address`] and [`Attachment`]
//! values, then flatten it into the JSON body the send endpoint expects.
//! Posting that body (auth, headers, retries) is the job of whatever HTTP
//! client sits on top of this crate.

pub mod api;
pub mod email;
pub mod error;

pub use email::{Address, Attachment, Email};
pub use error::Error;
