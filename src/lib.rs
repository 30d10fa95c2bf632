//! Daily journal: a small self-hosted blog.
//!
//! Posts are written through the compose form, stored in PostgreSQL and read
//! back on the home and detail pages.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
pub mod util;
