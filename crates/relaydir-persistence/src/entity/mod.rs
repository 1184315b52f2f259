//! `SeaORM` entities for the relay directory schema.

pub mod country;
pub mod vpn_server;

pub mod prelude {
    pub use super::country;
    pub use super::vpn_server;
}
