//! The two closed dimensions of the extension model.
//!
//! Every extension is identified by a (`DeclarationKind`, `PlatformTag`) pair.
//! Both sets are fixed at compile time.

use std::fmt;

/// Kind of declaration a node (and therefore its extensions) describes.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclarationKind {
    Class,
    Package,
    Function,
    Property,
    Constructor,
    TypeParameter,
    Type,
}

impl DeclarationKind {
    /// All kinds, in declaration order.
    pub const ALL: [DeclarationKind; 7] = [
        DeclarationKind::Class,
        DeclarationKind::Package,
        DeclarationKind::Function,
        DeclarationKind::Property,
        DeclarationKind::Constructor,
        DeclarationKind::TypeParameter,
        DeclarationKind::Type,
    ];

    /// Lowercase name used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Class => "class",
            DeclarationKind::Package => "package",
            DeclarationKind::Function => "function",
            DeclarationKind::Property => "property",
            DeclarationKind::Constructor => "constructor",
            DeclarationKind::TypeParameter => "type parameter",
            DeclarationKind::Type => "type",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target platform an extension was authored for.
///
/// Only [`PlatformTag::Jvm`] is understood by this crate: it is the only tag
/// with typed payloads and views. Extensions for the other tags are carried
/// as opaque [`ForeignExtension`](crate::ForeignExtension)s so a populated
/// model can round-trip them without interpreting them.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum PlatformTag {
    Jvm,
    Js,
    Native,
    Wasm,
}

impl PlatformTag {
    /// Whether this crate has typed payloads for the platform.
    #[inline]
    pub const fn is_understood(self) -> bool {
        matches!(self, PlatformTag::Jvm)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PlatformTag::Jvm => "jvm",
            PlatformTag::Js => "js",
            PlatformTag::Native => "native",
            PlatformTag::Wasm => "wasm",
        }
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
