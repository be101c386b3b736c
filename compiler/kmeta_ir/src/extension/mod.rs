//! Erased platform extensions and the per-node slot that owns them.
//!
//! The platform-agnostic layer only ever sees [`Extension`]: an opaque value
//! that reports its `kind()` and `platform()` and nothing else. The payload
//! shape is private to this crate and reachable only through the typed views
//! in [`crate::view`].
//!
//! # Variants
//!
//! - JVM: one typed payload per [`DeclarationKind`] (see `jvm.rs`)
//! - Foreign: any other platform, carried as opaque bytes

mod jvm;
mod slot;

pub use jvm::{
    JvmClassExtension, JvmConstructorExtension, JvmFunctionExtension, JvmPackageExtension,
    JvmPropertyExtension, JvmTypeExtension, JvmTypeParameterExtension,
};
pub use slot::{ExtensionSlot, SlotError};

use crate::{DeclarationKind, PlatformTag};

/// Platform extension attached to a declaration node.
///
/// Construct one from a JVM payload with `Extension::from(payload)` or from a
/// [`ForeignExtension`]. Obtain typed access by narrowing through a view,
/// e.g. [`JvmFunctionView::narrow`](crate::JvmFunctionView::narrow).
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Extension {
    repr: Repr,
}

/// Closed set of extension shapes.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub(crate) enum Repr {
    Jvm(JvmExtension),
    Foreign(ForeignExtension),
}

/// JVM payload, one variant per declaration kind.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub(crate) enum JvmExtension {
    Class(JvmClassExtension),
    Package(JvmPackageExtension),
    Function(JvmFunctionExtension),
    Property(JvmPropertyExtension),
    Constructor(JvmConstructorExtension),
    TypeParameter(JvmTypeParameterExtension),
    Type(JvmTypeExtension),
}

impl JvmExtension {
    fn kind(&self) -> DeclarationKind {
        match self {
            JvmExtension::Class(_) => DeclarationKind::Class,
            JvmExtension::Package(_) => DeclarationKind::Package,
            JvmExtension::Function(_) => DeclarationKind::Function,
            JvmExtension::Property(_) => DeclarationKind::Property,
            JvmExtension::Constructor(_) => DeclarationKind::Constructor,
            JvmExtension::TypeParameter(_) => DeclarationKind::TypeParameter,
            JvmExtension::Type(_) => DeclarationKind::Type,
        }
    }
}

impl Extension {
    /// Declaration kind this extension was authored for.
    pub fn kind(&self) -> DeclarationKind {
        match &self.repr {
            Repr::Jvm(jvm) => jvm.kind(),
            Repr::Foreign(foreign) => foreign.kind,
        }
    }

    /// Platform this extension was authored for.
    pub fn platform(&self) -> PlatformTag {
        match &self.repr {
            Repr::Jvm(_) => PlatformTag::Jvm,
            Repr::Foreign(foreign) => foreign.platform,
        }
    }

    #[inline]
    pub(crate) fn repr(&self) -> &Repr {
        &self.repr
    }

    #[inline]
    pub(crate) fn repr_mut(&mut self) -> &mut Repr {
        &mut self.repr
    }
}

macro_rules! jvm_extension_from {
    ($($payload:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$payload> for Extension {
                fn from(payload: $payload) -> Self {
                    Extension {
                        repr: Repr::Jvm(JvmExtension::$variant(payload)),
                    }
                }
            }
        )*
    };
}

jvm_extension_from! {
    JvmClassExtension => Class,
    JvmPackageExtension => Package,
    JvmFunctionExtension => Function,
    JvmPropertyExtension => Property,
    JvmConstructorExtension => Constructor,
    JvmTypeParameterExtension => TypeParameter,
    JvmTypeExtension => Type,
}

impl From<ForeignExtension> for Extension {
    fn from(foreign: ForeignExtension) -> Self {
        Extension {
            repr: Repr::Foreign(foreign),
        }
    }
}

/// Error when constructing a [`ForeignExtension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ForeignExtensionError {
    /// The platform has typed payloads here and must not be carried opaquely.
    #[error("`{0}` extensions are understood and cannot be stored as opaque payloads")]
    UnderstoodPlatform(PlatformTag),
}

/// Extension for a platform this crate does not understand.
///
/// The payload is read-only: nothing in this crate can interpret or edit
/// it, so it is kept exactly as the metadata reader produced it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cache", serde(try_from = "RawForeignExtension"))]
pub struct ForeignExtension {
    kind: DeclarationKind,
    platform: PlatformTag,
    payload: Vec<u8>,
}

#[cfg(feature = "cache")]
#[derive(serde::Deserialize)]
struct RawForeignExtension {
    kind: DeclarationKind,
    platform: PlatformTag,
    payload: Vec<u8>,
}

#[cfg(feature = "cache")]
impl TryFrom<RawForeignExtension> for ForeignExtension {
    type Error = ForeignExtensionError;

    fn try_from(raw: RawForeignExtension) -> Result<Self, ForeignExtensionError> {
        ForeignExtension::new(raw.kind, raw.platform, raw.payload)
    }
}

impl ForeignExtension {
    pub fn new(
        kind: DeclarationKind,
        platform: PlatformTag,
        payload: Vec<u8>,
    ) -> Result<Self, ForeignExtensionError> {
        if platform.is_understood() {
            return Err(ForeignExtensionError::UnderstoodPlatform(platform));
        }
        Ok(ForeignExtension {
            kind,
            platform,
            payload,
        })
    }

    #[inline]
    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    #[inline]
    pub fn platform(&self) -> PlatformTag {
        self.platform
    }

    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}
