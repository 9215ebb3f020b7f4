//! Command implementations.

pub mod scan;

pub use scan::run_scan;
