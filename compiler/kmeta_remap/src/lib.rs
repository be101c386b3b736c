//! kmeta remap - JVM name remapping over declaration metadata
//!
//! Rewrites the JVM names stored in platform extensions (signatures, origin
//! names, annotation classes) when the classes they describe are renamed,
//! e.g. while remapping a jar between two naming schemes.
//!
//! - `Remapper` and `MappingTable` for the name source
//! - `remap_descriptor` for descriptor strings
//! - `MetadataRemapper` for whole declaration trees
//!
//! Only JVM extensions are touched. Extensions for other platforms narrow to
//! nothing and pass through unchanged.

mod descriptor;
mod remapper;
mod walk;

pub use descriptor::{remap_descriptor, DescriptorError};
pub use remapper::{IdentityRemapper, MappingTable, Remapper};
pub use walk::{MetadataRemapper, RemapConfig, RemapError, RemapStats};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=kmeta_remap=debug` or `RUST_LOG=kmeta_remap=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
