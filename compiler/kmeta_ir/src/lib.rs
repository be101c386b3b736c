//! kmeta IR - Declaration Metadata Model
//!
//! This crate contains the in-memory model of compiled-program declarations
//! and the platform extensions attached to them:
//! - `DeclarationKind` and `PlatformTag` for the two closed dimensions
//! - Signatures and annotations as opaque leaf values
//! - The JVM extension variant set, one payload per declaration kind
//! - `Extension` and `ExtensionSlot` for erased, per-node storage
//! - Declaration nodes (Class, Package, Function, ...)
//! - Typed views that narrow an erased extension to its JVM payload
//!
//! # Design Philosophy
//!
//! - **Closed Sets**: Kinds and platforms are plain enums, never extended at runtime
//! - **Opaque Slot**: The platform-agnostic layer sees only `kind()` and `platform()`
//! - **Single Crossing Point**: The `view` module is the only place that
//!   matches on the erased extension's variant
//!
//! Narrowing never fails loudly. A missing extension, an extension authored
//! for another platform, and an extension of another kind all narrow to `None`.

mod annotation;
mod extension;
mod flags;
mod kind;
mod node;
mod signature;
pub mod view;

pub use annotation::{Annotation, AnnotationArgument};
pub use extension::{
    Extension, ExtensionSlot, ForeignExtension, ForeignExtensionError, JvmClassExtension,
    JvmConstructorExtension, JvmFunctionExtension, JvmPackageExtension, JvmPropertyExtension,
    JvmTypeExtension, JvmTypeParameterExtension, SlotError,
};
pub use flags::{JvmClassFlags, JvmPropertyFlags};
pub use kind::{DeclarationKind, PlatformTag};
pub use node::{
    ClassNode, ConstructorNode, Declaration, FunctionNode, PackageNode, PropertyNode,
    TypeNode, TypeParameterNode,
};
pub use signature::{JvmFieldSignature, JvmMethodSignature, SignatureError};
pub use view::{
    JvmClassView, JvmConstructorView, JvmFunctionView, JvmPackageView, JvmPropertyView,
    JvmTypeParameterView, JvmTypeView,
};
