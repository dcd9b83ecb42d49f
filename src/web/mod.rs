//! JSON HTTP API for generating and parsing identifiers.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080
//! aiva-vrs serve
//!
//! # Bind to all interfaces
//! aiva-vrs serve --address 0.0.0.0 --port 3000
//! ```
//!
//! ## API Endpoints
//!
//! - `GET /api/health` - Liveness check
//! - `POST /api/generate` - Generate identifiers for `{"variants": [...]}`
//! - `GET /api/parse?vrs_id=...` - Split an identifier into its components
//! - `POST /api/parse` - Split each of `{"vrs_ids": [...]}`, with an error entry per bad identifier
//! - `GET /api/validate?vrs_id=...` - Check an identifier
//! - `GET /api/query?vrs_id=...` - Table name and lookup query for an identifier
//! - `POST /api/query` - Table name and lookup query for each of `{"vrs_ids": [...]}`

pub mod server;
