//! Typed JVM views over erased extensions.
//!
//! This module is the only place that looks inside an [`Extension`]. Each
//! view narrows an erased, possibly absent extension to the JVM payload of
//! one declaration kind:
//!
//! ```ignore
//! let slot = node.extensions_mut();
//! if let Some(mut view) = JvmFunctionView::narrow_mut(slot.get_mut(PlatformTag::Jvm)) {
//!     view.set_signature(Some("run()V".parse()?));
//! }
//! ```
//!
//! # Narrowing Rules
//!
//! - Absent extension: `None`
//! - Extension for another platform: `None`
//! - Extension for another declaration kind: `None`, even when the payloads
//!   look alike (function and constructor both carry one signature)
//!
//! Narrowing is a pure `match`. It never panics and has no side effects, so
//! repeated narrowing of the same extension yields equivalent views.
//!
//! # Shared and Exclusive Views
//!
//! A view wraps a reference `R` to its payload. Views built by `narrow` hold
//! `&T` and expose getters only; views built by `narrow_mut` hold `&mut T`
//! and add setters. Every call forwards straight to the node's own storage:
//! a value written through one view is what the next narrowing reads.
//! List attributes are read-only through views.

use std::ops::{Deref, DerefMut};

use crate::extension::{JvmExtension, Repr};
use crate::{
    Annotation, ClassNode, ConstructorNode, Declaration, Extension,
    FunctionNode, JvmClassExtension, JvmClassFlags, JvmConstructorExtension,
    JvmFieldSignature, JvmFunctionExtension, JvmMethodSignature, JvmPackageExtension,
    JvmPropertyExtension, JvmPropertyFlags, JvmTypeExtension, JvmTypeParameterExtension,
    PackageNode, PlatformTag, PropertyNode, TypeNode, TypeParameterNode,
};

/// JVM payload type for one declaration kind.
pub(crate) trait JvmPayload: Sized {
    fn downcast(extension: &Extension) -> Option<&Self>;

    fn downcast_mut(extension: &mut Extension) -> Option<&mut Self>;
}

/// Defines a view type, its narrowing entry points and the `jvm()` /
/// `jvm_mut()` shortcuts on the owning node.
macro_rules! jvm_view {
    ($(#[$meta:meta])* $view:ident => $payload:ident, $node:ident, $variant:ident) => {
        impl JvmPayload for $payload {
            #[inline]
            fn downcast(extension: &Extension) -> Option<&Self> {
                match extension.repr() {
                    Repr::Jvm(JvmExtension::$variant(payload)) => Some(payload),
                    _ => None,
                }
            }

            #[inline]
            fn downcast_mut(extension: &mut Extension) -> Option<&mut Self> {
                match extension.repr_mut() {
                    Repr::Jvm(JvmExtension::$variant(payload)) => Some(payload),
                    _ => None,
                }
            }
        }

        $(#[$meta])*
        #[derive(Copy, Clone, Debug)]
        pub struct $view<R> {
            ext: R,
        }

        impl<'a> $view<&'a $payload> {
            /// Narrow to a shared view, or `None` if the extension is absent
            /// or not a JVM extension of this kind.
            pub fn narrow(extension: Option<&'a Extension>) -> Option<Self> {
                extension
                    .and_then(<$payload as JvmPayload>::downcast)
                    .map(|ext| $view { ext })
            }
        }

        impl<'a> $view<&'a mut $payload> {
            /// Narrow to an exclusive view, or `None` if the extension is
            /// absent or not a JVM extension of this kind.
            pub fn narrow_mut(extension: Option<&'a mut Extension>) -> Option<Self> {
                extension
                    .and_then(<$payload as JvmPayload>::downcast_mut)
                    .map(|ext| $view { ext })
            }
        }

        impl<R: Deref<Target = $payload>> $view<R> {
            /// The payload this view forwards to.
            #[inline]
            pub fn extension(&self) -> &$payload {
                &*self.ext
            }

            /// Give back the reference this view was built from.
            #[inline]
            pub fn into_inner(self) -> R {
                self.ext
            }
        }

        impl $node {
            /// Shared JVM view of this node's extension, if it has one.
            pub fn jvm(&self) -> Option<$view<&$payload>> {
                $view::<&$payload>::narrow(self.extensions().get(PlatformTag::Jvm))
            }

            /// Exclusive JVM view of this node's extension, if it has one.
            pub fn jvm_mut(&mut self) -> Option<$view<&mut $payload>> {
                let slot = self.extensions_mut();
                $view::<&mut $payload>::narrow_mut(slot.get_mut(PlatformTag::Jvm))
            }
        }
    };
}

jvm_view! {
    /// JVM view of a class extension.
    JvmClassView => JvmClassExtension, ClassNode, Class
}

jvm_view! {
    /// JVM view of a package extension.
    JvmPackageView => JvmPackageExtension, PackageNode, Package
}

jvm_view! {
    /// JVM view of a function extension.
    JvmFunctionView => JvmFunctionExtension, FunctionNode, Function
}

jvm_view! {
    /// JVM view of a property extension.
    JvmPropertyView => JvmPropertyExtension, PropertyNode, Property
}

jvm_view! {
    /// JVM view of a constructor extension.
    JvmConstructorView => JvmConstructorExtension, ConstructorNode, Constructor
}

jvm_view! {
    /// JVM view of a type parameter extension.
    JvmTypeParameterView => JvmTypeParameterExtension, TypeParameterNode, TypeParameter
}

jvm_view! {
    /// JVM view of a type extension.
    JvmTypeView => JvmTypeExtension, TypeNode, Type
}

// -- Class --

impl<R: Deref<Target = JvmClassExtension>> JvmClassView<R> {
    #[inline]
    pub fn local_delegated_properties(&self) -> &[PropertyNode] {
        self.ext.local_delegated_properties()
    }

    #[inline]
    pub fn module_name(&self) -> Option<&str> {
        self.ext.module_name()
    }

    #[inline]
    pub fn anonymous_object_origin_name(&self) -> Option<&str> {
        self.ext.anonymous_object_origin_name()
    }

    #[inline]
    pub fn jvm_flags(&self) -> u32 {
        self.ext.jvm_flags()
    }

    /// The raw flags with known bits named.
    #[inline]
    pub fn flags(&self) -> JvmClassFlags {
        JvmClassFlags::from_raw(self.ext.jvm_flags())
    }
}

impl<R: DerefMut<Target = JvmClassExtension>> JvmClassView<R> {
    #[inline]
    pub fn set_module_name(&mut self, name: Option<String>) {
        self.ext.set_module_name(name);
    }

    #[inline]
    pub fn set_anonymous_object_origin_name(&mut self, name: Option<String>) {
        self.ext.set_anonymous_object_origin_name(name);
    }

    #[inline]
    pub fn set_jvm_flags(&mut self, flags: u32) {
        self.ext.set_jvm_flags(flags);
    }
}

// -- Package --

impl<R: Deref<Target = JvmPackageExtension>> JvmPackageView<R> {
    #[inline]
    pub fn local_delegated_properties(&self) -> &[PropertyNode] {
        self.ext.local_delegated_properties()
    }

    #[inline]
    pub fn module_name(&self) -> Option<&str> {
        self.ext.module_name()
    }
}

impl<R: DerefMut<Target = JvmPackageExtension>> JvmPackageView<R> {
    #[inline]
    pub fn set_module_name(&mut self, name: Option<String>) {
        self.ext.set_module_name(name);
    }
}

// -- Function --

impl<R: Deref<Target = JvmFunctionExtension>> JvmFunctionView<R> {
    #[inline]
    pub fn signature(&self) -> Option<&JvmMethodSignature> {
        self.ext.signature()
    }

    #[inline]
    pub fn lambda_class_origin_name(&self) -> Option<&str> {
        self.ext.lambda_class_origin_name()
    }
}

impl<R: DerefMut<Target = JvmFunctionExtension>> JvmFunctionView<R> {
    #[inline]
    pub fn set_signature(&mut self, signature: Option<JvmMethodSignature>) {
        self.ext.set_signature(signature);
    }

    #[inline]
    pub fn set_lambda_class_origin_name(&mut self, name: Option<String>) {
        self.ext.set_lambda_class_origin_name(name);
    }
}

// -- Property --

impl<R: Deref<Target = JvmPropertyExtension>> JvmPropertyView<R> {
    #[inline]
    pub fn jvm_flags(&self) -> u32 {
        self.ext.jvm_flags()
    }

    /// The raw flags with known bits named.
    #[inline]
    pub fn flags(&self) -> JvmPropertyFlags {
        JvmPropertyFlags::from_raw(self.ext.jvm_flags())
    }

    #[inline]
    pub fn field_signature(&self) -> Option<&JvmFieldSignature> {
        self.ext.field_signature()
    }

    #[inline]
    pub fn getter_signature(&self) -> Option<&JvmMethodSignature> {
        self.ext.getter_signature()
    }

    #[inline]
    pub fn setter_signature(&self) -> Option<&JvmMethodSignature> {
        self.ext.setter_signature()
    }

    #[inline]
    pub fn synthetic_method_for_annotations(&self) -> Option<&JvmMethodSignature> {
        self.ext.synthetic_method_for_annotations()
    }

    #[inline]
    pub fn synthetic_method_for_delegate(&self) -> Option<&JvmMethodSignature> {
        self.ext.synthetic_method_for_delegate()
    }
}

impl<R: DerefMut<Target = JvmPropertyExtension>> JvmPropertyView<R> {
    #[inline]
    pub fn set_jvm_flags(&mut self, flags: u32) {
        self.ext.set_jvm_flags(flags);
    }

    #[inline]
    pub fn set_field_signature(&mut self, signature: Option<JvmFieldSignature>) {
        self.ext.set_field_signature(signature);
    }

    #[inline]
    pub fn set_getter_signature(&mut self, signature: Option<JvmMethodSignature>) {
        self.ext.set_getter_signature(signature);
    }

    #[inline]
    pub fn set_setter_signature(&mut self, signature: Option<JvmMethodSignature>) {
        self.ext.set_setter_signature(signature);
    }

    #[inline]
    pub fn set_synthetic_method_for_annotations(&mut self, signature: Option<JvmMethodSignature>) {
        self.ext.set_synthetic_method_for_annotations(signature);
    }

    #[inline]
    pub fn set_synthetic_method_for_delegate(&mut self, signature: Option<JvmMethodSignature>) {
        self.ext.set_synthetic_method_for_delegate(signature);
    }
}

// -- Constructor --

impl<R: Deref<Target = JvmConstructorExtension>> JvmConstructorView<R> {
    #[inline]
    pub fn signature(&self) -> Option<&JvmMethodSignature> {
        self.ext.signature()
    }
}

impl<R: DerefMut<Target = JvmConstructorExtension>> JvmConstructorView<R> {
    #[inline]
    pub fn set_signature(&mut self, signature: Option<JvmMethodSignature>) {
        self.ext.set_signature(signature);
    }
}

// -- Type parameter --

impl<R: Deref<Target = JvmTypeParameterExtension>> JvmTypeParameterView<R> {
    #[inline]
    pub fn annotations(&self) -> &[Annotation] {
        self.ext.annotations()
    }
}

// -- Type --

impl<R: Deref<Target = JvmTypeExtension>> JvmTypeView<R> {
    #[inline]
    pub fn is_raw(&self) -> bool {
        self.ext.is_raw()
    }

    #[inline]
    pub fn annotations(&self) -> &[Annotation] {
        self.ext.annotations()
    }
}

impl<R: DerefMut<Target = JvmTypeExtension>> JvmTypeView<R> {
    #[inline]
    pub fn set_raw(&mut self, raw: bool) {
        self.ext.set_raw(raw);
    }
}

#[cfg(test)]
mod tests;
