//! Feld - Terminal Market-Collapse Trading Game Library
//!
//! This module exposes the game logic for testing and the binaries.

// Allow dead code in library - some items are only used by one binary
#![allow(dead_code)]

pub mod babble;
pub mod build_info;
pub mod commands;
pub mod constants;
pub mod market;
pub mod player;
pub mod session;
pub mod ui;
