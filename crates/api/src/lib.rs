//! Course management API server library.
//!
//! Exposes the building blocks (config, state, error handling, DTOs, routes)
//! so integration tests and the binary entrypoint can both access them.

pub mod app;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod routes;
pub mod state;
