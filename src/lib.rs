//! Napier's Bones
//!
//! Terminal applet for learning multiplication with Napier's calculating
//! rods: place a bone per digit of a number, hover a row, and read the
//! product off the diagonals.
//!
//! Follows a Pure Core / Impure Shell split: `model` and `state` are plain
//! data and transitions, `view` owns the terminal.

pub mod config;
pub mod export;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
