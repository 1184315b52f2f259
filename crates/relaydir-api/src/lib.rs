//! Wire surface of the relay directory.
//!
//! This crate holds the `relaydir.v1` protobuf types and the tonic service
//! glue for [`v1::vpn_directory_server::VpnDirectory`]. The module is
//! maintained in-tree against `proto/relaydir.proto` rather than generated
//! from build.rs, so consumers never need protoc installed; keep the two in
//! sync when the schema changes.

/// API version tag carried in every response on both protocols.
pub const API_VERSION: &str = "v1";

/// `relaydir.v1` message types and service traits.
pub mod v1 {
    #![allow(clippy::all)]

    include!("generated/relaydir.v1.rs");
}
