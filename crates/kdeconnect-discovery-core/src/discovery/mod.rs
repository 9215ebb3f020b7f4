//! UDP device discovery module.
//!
//! Provides announcement parsing, the socket-owning scanner, and the registry
//! that ties them together into a single scan.

pub mod announcement;
pub mod registry;
pub mod scanner;

pub use announcement::{parse_announcement, KDECONNECT_ID};
pub use registry::DeviceRegistry;
pub use scanner::{LoopExit, Scanner};
