//! Account alias manager.
//!
//! Keeps byte-exact snapshots of a single dotfile (`~/.<app>rc`) in a flat store
//! directory (`~/.gam`) and swaps them back in on demand.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod store;
