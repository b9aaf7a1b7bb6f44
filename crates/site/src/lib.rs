//! Driftline Site library.
//!
//! This crate provides the site functionality as a library, allowing it to
//! be tested and reused.
//!
//! # Security
//!
//! The interesting machinery here is the admin session gate and the CSRF
//! issuance/validation protocol; everything else is a thin page surface.
//! The session signing secret is loaded once at startup, held in
//! `secrecy::SecretString`, and never logged.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
