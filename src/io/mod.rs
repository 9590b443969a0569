//! Terminal input/output for prompting.
//!
//! This module provides:
//! - [`Session`]: the line-oriented input source, output sink and registry
//!   threaded through every prompt call
//! - Typed entry points ([`Session::ask`], [`Session::ask_with`]) that
//!   resolve a prompt for a Rust type and convert the answer back

mod session;

pub use session::Session;
