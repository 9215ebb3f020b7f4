//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use kdeconnect_discovery_core::DeviceKind;

/// Scan the local network for KDE Connect devices
#[derive(Parser, Debug)]
#[command(name = "kdeconnect-discovery")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Per-read discovery window in milliseconds
    #[arg(
        long,
        global = true,
        default_value = "5000",
        env = "KDECONNECT_DISCOVERY_TIMEOUT"
    )]
    pub timeout: u64,

    /// UDP port to listen on for identity broadcasts
    #[arg(long, global = true, default_value = "1714", env = "KDECONNECT_DISCOVERY_PORT")]
    pub port: u16,

    /// Receive buffer size in bytes; longer datagrams are truncated
    #[arg(long, global = true, default_value = "1024")]
    pub buffer_size: usize,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Listen for identity broadcasts and list the devices found
    Scan(ScanArgs),
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Only show devices of this kind
    #[arg(long, value_enum)]
    pub kind: Option<KindFilter>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum KindFilter {
    Desktop,
    Laptop,
    Phone,
    Tablet,
    Tv,
}

impl KindFilter {
    pub fn device_kind(self) -> DeviceKind {
        match self {
            KindFilter::Desktop => DeviceKind::Desktop,
            KindFilter::Laptop => DeviceKind::Laptop,
            KindFilter::Phone => DeviceKind::Phone,
            KindFilter::Tablet => DeviceKind::Tablet,
            KindFilter::Tv => DeviceKind::Tv,
        }
    }
}
