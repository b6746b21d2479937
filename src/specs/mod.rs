// src/specs/mod.rs
//! # Scraping "specs"
//!
//! Page-specific extraction. A spec knows *where the ground truth lives in the
//! HTML* and how to turn it into typed records; it does not decide what to do
//! with them.
//!
//! ## Conventions
//! - **Case-insensitive** tag detection via `core::html`; no full-document regexes.
//! - Narrow to the known block (`<table id="pokedex">…</table>`) first, then
//!   scan locally inside it.
//! - Structural absence is an `Error::Parse`; row-level noise is skipped.
//! - Testable **offline** against inline fixtures.
pub mod pokedex;
