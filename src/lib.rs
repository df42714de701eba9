//! planetlocal - the PlanetScale serverless HTTP protocol in front of a
//! single local MySQL connection

pub mod cli;
pub mod gateway;
pub mod http_server;
pub mod observability;
pub mod protocol;
