//! Concrete adapters for the port traits.

pub mod csv_adapter;
