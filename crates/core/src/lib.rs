//! Customer Registration Core - Shared types library.
//!
//! This crate provides the types used by every customer registration component:
//! - `server` - The registration HTTP service
//! - `client` - The registration form and its HTTP transport
//! - `cli` - Command-line tools for schema setup and form submission
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no database
//! access, no HTTP clients. Both sides of the wire depend on it, so the JSON
//! contract lives in exactly one place.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for customer IDs, names and emails, plus the
//!   customer record itself
//! - [`api`] - Request/response bodies and user-facing messages for
//!   `POST /api/register`

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod types;

pub use types::*;
