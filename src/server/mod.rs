//! Server-side API backend and business logic.
//!
//! This module contains the backend of the mosque application: the JSON API used by
//! the web client, the admin session handling, persistence in SQLite through SeaORM,
//! and the clients for the external identity and prayer-time services.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Form validation, orchestration, and external services
//! - **Data Layer** (`data/`) - Generic document access and per-entity repositories
//! - **Listing** (`listing/`) - In-memory search, filters, date buckets, stats, and CSV export
//! - **Model Layer** (`model/`) - Domain models and write parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and the admin guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, identity provider, prayer cache)
//! - **Startup** (`startup`) - Database, sessions, HTTP client, and legacy import
//! - **Router** (`router`) - API routes, OpenAPI docs, and the login rate limit
//! - **Scheduler** (`scheduler/`) - Hourly prayer-time refresh
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** checks the admin session with `AuthGuard` where required
//! 3. **Service** validates input and loads records through the repositories
//! 4. **Listing** narrows the loaded records to the requested view
//! 5. **Controller** converts domain models to DTOs and returns the response
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod listing;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
