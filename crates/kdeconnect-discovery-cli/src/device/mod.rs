//! Device discovery layer.
//!
//! Socket handling and parsing live in kdeconnect-discovery-core.
//! This module maps CLI settings onto the core registry.

pub mod discovery;
