//! JVM extension payloads, one per declaration kind.
//!
//! These are the authoritative attribute sets. Scalar attributes have a
//! getter and a setter; setters store the value as given (flag integers are
//! not interpreted here). List attributes have a read-only slice getter and
//! a `*_mut` accessor used by whoever populates the model.

use crate::{Annotation, JvmFieldSignature, JvmMethodSignature, PropertyNode};

/// JVM facts about a class.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct JvmClassExtension {
    local_delegated_properties: Vec<PropertyNode>,
    module_name: Option<String>,
    anonymous_object_origin_name: Option<String>,
    jvm_flags: u32,
}

impl JvmClassExtension {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_jvm_flags(mut self, flags: u32) -> Self {
        self.jvm_flags = flags;
        self
    }

    #[must_use]
    pub fn with_local_delegated_property(mut self, property: PropertyNode) -> Self {
        self.local_delegated_properties.push(property);
        self
    }

    /// Properties delegated locally inside function bodies of this class.
    #[inline]
    pub fn local_delegated_properties(&self) -> &[PropertyNode] {
        &self.local_delegated_properties
    }

    #[inline]
    pub fn local_delegated_properties_mut(&mut self) -> &mut Vec<PropertyNode> {
        &mut self.local_delegated_properties
    }

    #[inline]
    pub fn module_name(&self) -> Option<&str> {
        self.module_name.as_deref()
    }

    #[inline]
    pub fn set_module_name(&mut self, name: Option<String>) {
        self.module_name = name;
    }

    /// Internal name of the class an anonymous object was copied from, if it
    /// was regenerated while inlining.
    #[inline]
    pub fn anonymous_object_origin_name(&self) -> Option<&str> {
        self.anonymous_object_origin_name.as_deref()
    }

    #[inline]
    pub fn set_anonymous_object_origin_name(&mut self, name: Option<String>) {
        self.anonymous_object_origin_name = name;
    }

    #[inline]
    pub fn jvm_flags(&self) -> u32 {
        self.jvm_flags
    }

    #[inline]
    pub fn set_jvm_flags(&mut self, flags: u32) {
        self.jvm_flags = flags;
    }
}

/// JVM facts about a package (file facade or multi-file class part).
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct JvmPackageExtension {
    local_delegated_properties: Vec<PropertyNode>,
    module_name: Option<String>,
}

impl JvmPackageExtension {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_local_delegated_property(mut self, property: PropertyNode) -> Self {
        self.local_delegated_properties.push(property);
        self
    }

    #[inline]
    pub fn local_delegated_properties(&self) -> &[PropertyNode] {
        &self.local_delegated_properties
    }

    #[inline]
    pub fn local_delegated_properties_mut(&mut self) -> &mut Vec<PropertyNode> {
        &mut self.local_delegated_properties
    }

    #[inline]
    pub fn module_name(&self) -> Option<&str> {
        self.module_name.as_deref()
    }

    #[inline]
    pub fn set_module_name(&mut self, name: Option<String>) {
        self.module_name = name;
    }
}

/// JVM facts about a function.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct JvmFunctionExtension {
    signature: Option<JvmMethodSignature>,
    lambda_class_origin_name: Option<String>,
}

impl JvmFunctionExtension {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_signature(mut self, signature: JvmMethodSignature) -> Self {
        self.signature = Some(signature);
        self
    }

    #[inline]
    pub fn signature(&self) -> Option<&JvmMethodSignature> {
        self.signature.as_ref()
    }

    #[inline]
    pub fn set_signature(&mut self, signature: Option<JvmMethodSignature>) {
        self.signature = signature;
    }

    /// Internal name of the lambda class this function was copied from.
    #[inline]
    pub fn lambda_class_origin_name(&self) -> Option<&str> {
        self.lambda_class_origin_name.as_deref()
    }

    #[inline]
    pub fn set_lambda_class_origin_name(&mut self, name: Option<String>) {
        self.lambda_class_origin_name = name;
    }
}

/// JVM facts about a property.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct JvmPropertyExtension {
    jvm_flags: u32,
    field_signature: Option<JvmFieldSignature>,
    getter_signature: Option<JvmMethodSignature>,
    setter_signature: Option<JvmMethodSignature>,
    synthetic_method_for_annotations: Option<JvmMethodSignature>,
    synthetic_method_for_delegate: Option<JvmMethodSignature>,
}

impl JvmPropertyExtension {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field_signature(mut self, signature: JvmFieldSignature) -> Self {
        self.field_signature = Some(signature);
        self
    }

    #[must_use]
    pub fn with_getter_signature(mut self, signature: JvmMethodSignature) -> Self {
        self.getter_signature = Some(signature);
        self
    }

    #[must_use]
    pub fn with_setter_signature(mut self, signature: JvmMethodSignature) -> Self {
        self.setter_signature = Some(signature);
        self
    }

    #[inline]
    pub fn jvm_flags(&self) -> u32 {
        self.jvm_flags
    }

    #[inline]
    pub fn set_jvm_flags(&mut self, flags: u32) {
        self.jvm_flags = flags;
    }

    /// Backing field, if the property has one.
    #[inline]
    pub fn field_signature(&self) -> Option<&JvmFieldSignature> {
        self.field_signature.as_ref()
    }

    #[inline]
    pub fn set_field_signature(&mut self, signature: Option<JvmFieldSignature>) {
        self.field_signature = signature;
    }

    #[inline]
    pub fn getter_signature(&self) -> Option<&JvmMethodSignature> {
        self.getter_signature.as_ref()
    }

    #[inline]
    pub fn set_getter_signature(&mut self, signature: Option<JvmMethodSignature>) {
        self.getter_signature = signature;
    }

    #[inline]
    pub fn setter_signature(&self) -> Option<&JvmMethodSignature> {
        self.setter_signature.as_ref()
    }

    #[inline]
    pub fn set_setter_signature(&mut self, signature: Option<JvmMethodSignature>) {
        self.setter_signature = signature;
    }

    /// Synthetic method holding the property's annotations.
    #[inline]
    pub fn synthetic_method_for_annotations(&self) -> Option<&JvmMethodSignature> {
        self.synthetic_method_for_annotations.as_ref()
    }

    #[inline]
    pub fn set_synthetic_method_for_annotations(&mut self, signature: Option<JvmMethodSignature>) {
        self.synthetic_method_for_annotations = signature;
    }

    /// Synthetic method returning the delegate of a delegated property.
    #[inline]
    pub fn synthetic_method_for_delegate(&self) -> Option<&JvmMethodSignature> {
        self.synthetic_method_for_delegate.as_ref()
    }

    #[inline]
    pub fn set_synthetic_method_for_delegate(&mut self, signature: Option<JvmMethodSignature>) {
        self.synthetic_method_for_delegate = signature;
    }
}

/// JVM facts about a constructor.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct JvmConstructorExtension {
    signature: Option<JvmMethodSignature>,
}

impl JvmConstructorExtension {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_signature(mut self, signature: JvmMethodSignature) -> Self {
        self.signature = Some(signature);
        self
    }

    #[inline]
    pub fn signature(&self) -> Option<&JvmMethodSignature> {
        self.signature.as_ref()
    }

    #[inline]
    pub fn set_signature(&mut self, signature: Option<JvmMethodSignature>) {
        self.signature = signature;
    }
}

/// JVM facts about a type parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct JvmTypeParameterExtension {
    annotations: Vec<Annotation>,
}

impl JvmTypeParameterExtension {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[inline]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    #[inline]
    pub fn annotations_mut(&mut self) -> &mut Vec<Annotation> {
        &mut self.annotations
    }
}

/// JVM facts about a type usage.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct JvmTypeExtension {
    is_raw: bool,
    annotations: Vec<Annotation>,
}

impl JvmTypeExtension {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_raw(mut self, raw: bool) -> Self {
        self.is_raw = raw;
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Whether the type was a raw (non-parameterized) Java type.
    #[inline]
    pub fn is_raw(&self) -> bool {
        self.is_raw
    }

    #[inline]
    pub fn set_raw(&mut self, raw: bool) {
        self.is_raw = raw;
    }

    #[inline]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    #[inline]
    pub fn annotations_mut(&mut self) -> &mut Vec<Annotation> {
        &mut self.annotations
    }
}
