//! Monthly shift roster editor.
//!
//! A browser session generates a roster for one month, fills in shift codes
//! and remarks per day, and views a printable snapshot of the result. All
//! state lives in memory for the lifetime of the session.

pub mod config;
pub mod controller;
pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
pub mod roster;
pub mod router;
pub mod session;
pub mod state;
