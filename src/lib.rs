// src/lib.rs
//! Scrape the pokemondb.net Pokedex table and export base stats as C++ arrays,
//! one base table plus one table per alternate-form family.
//!
//! Pipeline: `core::net` → `specs::pokedex` → `classify` → `emit` → `file`.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod classify;
pub mod cli;
pub mod config;
pub mod core;
pub mod emit;
pub mod error;
pub mod file;
pub mod model;
pub mod progress;
pub mod specs;

pub use error::{Error, Result};
