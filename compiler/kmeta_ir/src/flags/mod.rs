//! Typed interpretation of the raw JVM flag integers.
//!
//! Extensions store flags as a plain `u32` and accept any value. These types
//! are an optional lens for callers that want to test individual bits.
//! Unknown bits are retained, never rejected.

use bitflags::bitflags;

bitflags! {
    /// JVM-specific flags of a class extension.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct JvmClassFlags: u32 {
        /// Interface compiled with method bodies (`-Xjvm-default=all`).
        const HAS_METHOD_BODIES_IN_INTERFACE = 1 << 0;
        /// Interface compiled in compatibility mode (`-Xjvm-default=all-compatibility`).
        const IS_COMPILED_IN_COMPATIBILITY_MODE = 1 << 1;
    }
}

bitflags! {
    /// JVM-specific flags of a property extension.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct JvmPropertyFlags: u32 {
        /// Backing field was moved from an interface companion object.
        const IS_MOVED_FROM_INTERFACE_COMPANION = 1 << 0;
    }
}

impl JvmClassFlags {
    /// Interpret a raw flag integer, keeping bits this crate does not name.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }
}

impl JvmPropertyFlags {
    /// Interpret a raw flag integer, keeping bits this crate does not name.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self::from_bits_retain(raw)
    }
}
