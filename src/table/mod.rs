//! The shared table every connected client sits at.

pub mod manager;

pub use manager::Table;
