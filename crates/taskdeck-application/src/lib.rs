//! Application layer for taskdeck.
//!
//! This crate coordinates the domain and infrastructure layers: CRUD over
//! the board through [`BoardService`], startup reconciliation through
//! [`LoadStrategy`], and the background autosave loop.

pub mod autosave;
pub mod board_service;
pub mod bootstrap;
pub mod load_strategy;

#[cfg(test)]
mod test_support;

pub use autosave::spawn_autosave;
pub use board_service::BoardService;
pub use bootstrap::{App, build_default};
pub use load_strategy::{BootStatus, LoadStrategy};
