//! Command-line front end
//!
//! A thin presentation layer over [`crate::history::GameHistory`]: it turns
//! typed commands into history operations and renders the resulting view.

pub mod commands;
pub mod config;
pub mod output;
pub mod session;
