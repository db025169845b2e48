//! Shared core of the flip book portfolio.
//!
//! Everything in this crate is target independent: the frontend crate binds it to the DOM
//! and to GSAP, tests drive it with a recording engine and a fake clock.

pub mod domain;
pub mod error;
pub mod shared;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::BookError;
