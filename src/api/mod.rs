pub mod error;
pub mod models;
pub mod ports;
pub mod service;
pub mod transport;
