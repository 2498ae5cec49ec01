//! Headsmith - framed text headings for source files, notes and terminals
//!
//! The [`heading`] module is the layout engine. Everything else (profiles on
//! disk, the command table, clipboard and console) feeds it settings and text
//! and takes its output somewhere.

pub mod app;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod heading;
pub mod logging;
pub mod profile;
