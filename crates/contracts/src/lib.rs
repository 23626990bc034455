//! DOM-free core of the Knowledge Hub site runtime.
//!
//! Everything here is plain Rust and runs natively, so the browser glue in the
//! `frontend` crate only reads the DOM, calls into these functions and writes
//! the result back.

pub mod hub;
pub mod shared;
