pub mod directory;
pub mod ingest;
pub mod receipt;
pub mod rpc;
