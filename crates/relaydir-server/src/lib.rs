// Main library module for relaydir - a VPN relay directory aggregator that
// ingests the upstream feed and serves it over gRPC and HTTP/JSON.

// Module declarations
pub mod api; // HTTP handlers and response shapes
pub mod auth; // Credential verification
pub mod error; // Error taxonomy shared by both front ends
pub mod feed; // Upstream feed parser
pub mod middleware; // HTTP middleware
pub mod model; // Configuration and shared application state
pub mod service; // Business services and the gRPC front end
pub mod startup; // Application startup utilities
