//! Application startup utilities module.

mod grpc;
mod http;
mod logging;
mod scheduler;
mod shutdown;

pub use grpc::{GrpcServer, start_grpc_server};
pub use http::http_server;
pub use logging::{LoggingConfig, LoggingGuard, init_logging};
pub use scheduler::start_scheduler;
pub use shutdown::{ShutdownSignal, wait_for_shutdown_signal};
