//! HTTP surface for timer records
//!
//! Route handlers plus the cross-origin middleware wrapped around every response.

pub mod cors;
pub mod handlers;
