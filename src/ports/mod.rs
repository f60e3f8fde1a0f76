//! Port traits connecting the domain to external data sources.

pub mod data_port;
