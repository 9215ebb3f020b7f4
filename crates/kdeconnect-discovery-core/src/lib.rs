//! Shared core library for KDE Connect LAN discovery.
//!
//! Listens for `kdeconnect.identity` broadcasts on UDP port 1714 and turns
//! them into [`Device`] records. The [`DeviceRegistry`] is the entry point:
//!
//! ```no_run
//! use kdeconnect_discovery_core::{DeviceRegistry, ScanConfig};
//!
//! # async fn run() -> Result<(), kdeconnect_discovery_core::error::ScanError> {
//! let registry = DeviceRegistry::new(ScanConfig::default());
//! for device in registry.scan_once().await? {
//!     println!("{}", device);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod types;

pub use config::ScanConfig;
pub use discovery::{parse_announcement, DeviceRegistry, LoopExit, Scanner};
pub use error::{AnnouncementError, ScanError};
pub use types::{Device, DeviceKind};
