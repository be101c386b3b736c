//! Declaration tree remapping.
//!
//! Walks a class or package and rewrites every JVM name stored in its
//! extensions through a [`Remapper`]. All access to extension data goes
//! through the typed JVM views: declarations whose extension is absent or
//! belongs to another platform are skipped, their platform-agnostic
//! structure is still walked.
//!
//! # What Gets Rewritten
//!
//! - Class and type classifier names
//! - Function, constructor and property accessor signatures (name and descriptor)
//! - Property field signatures
//! - Anonymous-object and lambda origin names
//! - Annotation class names on types and type parameters
//! - Locally delegated properties of classes and packages
//!
//! Module names are platform facts, not JVM names, and are left alone.

use kmeta_ir::{
    Annotation, ClassNode, ConstructorNode, FunctionNode, JvmClassView, JvmFieldSignature,
    JvmMethodSignature, JvmPackageView, PackageNode, PropertyNode, TypeNode, TypeParameterNode,
};

use crate::{remap_descriptor, DescriptorError, Remapper};

/// Error while remapping a declaration tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemapError {
    /// A stored signature has a descriptor that cannot be tokenized.
    #[error("malformed descriptor in `{member}`")]
    Descriptor {
        member: String,
        #[source]
        source: DescriptorError,
    },
}

/// Remapping options.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct RemapConfig {
    /// Rewrite annotation class names on types and type parameters.
    pub remap_annotations: bool,
    /// Descend into locally delegated properties of classes and packages.
    pub remap_local_delegated: bool,
}

impl Default for RemapConfig {
    fn default() -> Self {
        RemapConfig {
            remap_annotations: true,
            remap_local_delegated: true,
        }
    }
}

/// Counts of rewritten names, for logging and tests.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct RemapStats {
    /// Class names changed (declarations, classifiers, origins, annotations).
    pub class_names: usize,
    /// Method and field signatures changed.
    pub signatures: usize,
    /// Declarations and types walked that had no JVM extension. Types and
    /// type parameters only count while annotations are remapped.
    pub skipped: usize,
}

/// Rewrites JVM names in declaration trees.
pub struct MetadataRemapper<'r, R: Remapper + ?Sized> {
    remapper: &'r R,
    config: RemapConfig,
}

impl<'r, R: Remapper + ?Sized> MetadataRemapper<'r, R> {
    pub fn new(remapper: &'r R) -> Self {
        Self::with_config(remapper, RemapConfig::default())
    }

    pub fn with_config(remapper: &'r R, config: RemapConfig) -> Self {
        MetadataRemapper { remapper, config }
    }

    /// Remap a class and everything it declares.
    #[tracing::instrument(level = "debug", skip_all, fields(class = %class.name))]
    pub fn remap_class(&self, class: &mut ClassNode) -> Result<RemapStats, RemapError> {
        let mut stats = RemapStats::default();
        // Member lookups use the original owner name.
        let owner = class.name.clone();

        if let Some(ext) = class.jvm_mut().map(JvmClassView::into_inner) {
            if let Some(origin) = ext.anonymous_object_origin_name() {
                if let Some(mapped) = self.remapper.map_class(origin) {
                    let mapped = mapped.to_owned();
                    ext.set_anonymous_object_origin_name(Some(mapped));
                    stats.class_names += 1;
                }
            }
            if self.config.remap_local_delegated {
                for property in ext.local_delegated_properties_mut() {
                    self.remap_property(&owner, property, &mut stats)?;
                }
            }
        } else {
            stats.skipped += 1;
        }

        for type_parameter in &mut class.type_parameters {
            self.remap_type_parameter(type_parameter, &mut stats);
        }
        for supertype in &mut class.supertypes {
            self.remap_type(supertype, &mut stats);
        }
        for constructor in &mut class.constructors {
            self.remap_constructor(&owner, constructor, &mut stats)?;
        }
        for function in &mut class.functions {
            self.remap_function(&owner, function, &mut stats)?;
        }
        for property in &mut class.properties {
            self.remap_property(&owner, property, &mut stats)?;
        }

        self.remap_class_name(&mut class.name, &mut stats);

        tracing::debug!(
            class_names = stats.class_names,
            signatures = stats.signatures,
            skipped = stats.skipped,
            "class remapped"
        );
        Ok(stats)
    }

    /// Remap package-level declarations. `facade` is the original internal
    /// name of the class that holds them on the JVM.
    #[tracing::instrument(level = "debug", skip_all, fields(facade = %facade))]
    pub fn remap_package(
        &self,
        package: &mut PackageNode,
        facade: &str,
    ) -> Result<RemapStats, RemapError> {
        let mut stats = RemapStats::default();

        if let Some(ext) = package.jvm_mut().map(JvmPackageView::into_inner) {
            if self.config.remap_local_delegated {
                for property in ext.local_delegated_properties_mut() {
                    self.remap_property(facade, property, &mut stats)?;
                }
            }
        } else {
            stats.skipped += 1;
        }

        for function in &mut package.functions {
            self.remap_function(facade, function, &mut stats)?;
        }
        for property in &mut package.properties {
            self.remap_property(facade, property, &mut stats)?;
        }

        tracing::debug!(
            class_names = stats.class_names,
            signatures = stats.signatures,
            skipped = stats.skipped,
            "package remapped"
        );
        Ok(stats)
    }

    fn remap_function(
        &self,
        owner: &str,
        function: &mut FunctionNode,
        stats: &mut RemapStats,
    ) -> Result<(), RemapError> {
        if let Some(mut view) = function.jvm_mut() {
            let remapped = view
                .signature()
                .map(|sig| self.remap_method_signature(owner, sig))
                .transpose()?;
            if let Some(sig) = remapped {
                if view.signature() != Some(&sig) {
                    stats.signatures += 1;
                }
                view.set_signature(Some(sig));
            }

            let origin = view
                .lambda_class_origin_name()
                .and_then(|name| self.remapper.map_class(name))
                .map(str::to_owned);
            if origin.is_some() {
                view.set_lambda_class_origin_name(origin);
                stats.class_names += 1;
            }
        } else {
            tracing::trace!(function = %function.name, "no jvm extension");
            stats.skipped += 1;
        }

        for type_parameter in &mut function.type_parameters {
            self.remap_type_parameter(type_parameter, stats);
        }
        if let Some(receiver) = &mut function.receiver_type {
            self.remap_type(receiver, stats);
        }
        for parameter in &mut function.value_parameter_types {
            self.remap_type(parameter, stats);
        }
        self.remap_type(&mut function.return_type, stats);
        Ok(())
    }

    fn remap_constructor(
        &self,
        owner: &str,
        constructor: &mut ConstructorNode,
        stats: &mut RemapStats,
    ) -> Result<(), RemapError> {
        if let Some(mut view) = constructor.jvm_mut() {
            let remapped = view
                .signature()
                .map(|sig| self.remap_method_signature(owner, sig))
                .transpose()?;
            if let Some(sig) = remapped {
                if view.signature() != Some(&sig) {
                    stats.signatures += 1;
                }
                view.set_signature(Some(sig));
            }
        } else {
            stats.skipped += 1;
        }

        for parameter in &mut constructor.value_parameter_types {
            self.remap_type(parameter, stats);
        }
        Ok(())
    }

    fn remap_property(
        &self,
        owner: &str,
        property: &mut PropertyNode,
        stats: &mut RemapStats,
    ) -> Result<(), RemapError> {
        if let Some(mut view) = property.jvm_mut() {
            let field = view
                .field_signature()
                .map(|sig| self.remap_field_signature(owner, sig))
                .transpose()?;
            if let Some(sig) = field {
                if view.field_signature() != Some(&sig) {
                    stats.signatures += 1;
                }
                view.set_field_signature(Some(sig));
            }

            let getter = self.remap_optional(owner, view.getter_signature(), stats)?;
            let setter = self.remap_optional(owner, view.setter_signature(), stats)?;
            let annotations =
                self.remap_optional(owner, view.synthetic_method_for_annotations(), stats)?;
            let delegate =
                self.remap_optional(owner, view.synthetic_method_for_delegate(), stats)?;
            view.set_getter_signature(getter);
            view.set_setter_signature(setter);
            view.set_synthetic_method_for_annotations(annotations);
            view.set_synthetic_method_for_delegate(delegate);
        } else {
            tracing::trace!(property = %property.name, "no jvm extension");
            stats.skipped += 1;
        }

        self.remap_type(&mut property.return_type, stats);
        Ok(())
    }

    fn remap_type_parameter(&self, type_parameter: &mut TypeParameterNode, stats: &mut RemapStats) {
        if self.config.remap_annotations {
            match type_parameter.jvm_mut() {
                Some(view) => {
                    self.remap_annotations(view.into_inner().annotations_mut(), stats);
                }
                None => stats.skipped += 1,
            }
        }
        for bound in &mut type_parameter.upper_bounds {
            self.remap_type(bound, stats);
        }
    }

    fn remap_type(&self, ty: &mut TypeNode, stats: &mut RemapStats) {
        self.remap_class_name(&mut ty.classifier, stats);
        if self.config.remap_annotations {
            match ty.jvm_mut() {
                Some(view) => {
                    self.remap_annotations(view.into_inner().annotations_mut(), stats);
                }
                None => stats.skipped += 1,
            }
        }
        for argument in &mut ty.arguments {
            self.remap_type(argument, stats);
        }
    }

    fn remap_annotations(&self, annotations: &mut [Annotation], stats: &mut RemapStats) {
        for annotation in annotations {
            self.remap_class_name(&mut annotation.class_name, stats);
        }
    }

    fn remap_class_name(&self, name: &mut String, stats: &mut RemapStats) {
        if let Some(mapped) = self.remapper.map_class(name.as_str()) {
            if mapped != name.as_str() {
                *name = mapped.to_owned();
                stats.class_names += 1;
            }
        }
    }

    fn remap_optional(
        &self,
        owner: &str,
        signature: Option<&JvmMethodSignature>,
        stats: &mut RemapStats,
    ) -> Result<Option<JvmMethodSignature>, RemapError> {
        let Some(signature) = signature else {
            return Ok(None);
        };
        let remapped = self.remap_method_signature(owner, signature)?;
        if &remapped != signature {
            stats.signatures += 1;
        }
        Ok(Some(remapped))
    }

    fn remap_method_signature(
        &self,
        owner: &str,
        signature: &JvmMethodSignature,
    ) -> Result<JvmMethodSignature, RemapError> {
        let name = self
            .remapper
            .map_method(owner, signature.name(), signature.descriptor())
            .unwrap_or(signature.name());
        let descriptor = remap_descriptor(signature.descriptor(), self.remapper).map_err(
            |source| RemapError::Descriptor {
                member: format!("{owner}.{signature}"),
                source,
            },
        )?;
        tracing::trace!(%signature, %name, %descriptor, "method signature");
        Ok(JvmMethodSignature::new(name, descriptor))
    }

    fn remap_field_signature(
        &self,
        owner: &str,
        signature: &JvmFieldSignature,
    ) -> Result<JvmFieldSignature, RemapError> {
        let name = self
            .remapper
            .map_field(owner, signature.name(), signature.descriptor())
            .unwrap_or(signature.name());
        let descriptor = remap_descriptor(signature.descriptor(), self.remapper).map_err(
            |source| RemapError::Descriptor {
                member: format!("{owner}.{signature}"),
                source,
            },
        )?;
        Ok(JvmFieldSignature::new(name, descriptor))
    }
}
