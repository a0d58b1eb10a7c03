//! # Counter API Backend
//!
//! A small REST API that manages a single persisted integer counter backed by
//! a PostgreSQL database. The crate exposes the counter through three HTTP
//! endpoints (a welcome page, a read, and a write) and wraps every
//! data-bearing response in a uniform JSON envelope.
//!
//! ## Architecture
//!
//! The crate is organized into two logical layers:
//!
//! - [`db`]: Repository pattern over the counter storage, with a
//!   Diesel/Postgres backend for production and an in-memory backend for
//!   tests and local development.
//! - [`http`]: Axum-based HTTP server, request handlers, and the response
//!   envelope contract.

pub mod db;

#[cfg(feature = "http-server")]
pub mod http;
