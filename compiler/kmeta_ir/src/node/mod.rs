//! Platform-agnostic declaration nodes.
//!
//! Each node carries only the structure needed to walk a declaration tree
//! plus a private [`ExtensionSlot`]. The slot's kind is fixed by the node
//! type, so a node can never hold an extension of another kind.

use crate::{DeclarationKind, Extension, ExtensionSlot, SlotError};

/// A declaration that owns platform extensions.
pub trait Declaration {
    /// Kind of every extension this declaration may hold.
    const KIND: DeclarationKind;

    fn extensions(&self) -> &ExtensionSlot;

    fn extensions_mut(&mut self) -> &mut ExtensionSlot;

    /// Attach an extension, consuming and returning the node.
    fn with_extension(mut self, extension: impl Into<Extension>) -> Result<Self, SlotError>
    where
        Self: Sized,
    {
        self.extensions_mut().insert(extension)?;
        Ok(self)
    }
}

macro_rules! impl_declaration {
    ($($node:ident => $kind:ident),* $(,)?) => {
        $(
            impl Declaration for $node {
                const KIND: DeclarationKind = DeclarationKind::$kind;

                #[inline]
                fn extensions(&self) -> &ExtensionSlot {
                    &self.extensions
                }

                #[inline]
                fn extensions_mut(&mut self) -> &mut ExtensionSlot {
                    &mut self.extensions
                }
            }
        )*
    };
}

/// Deserialize a node's slot, rejecting one stored for another kind.
#[cfg(feature = "cache")]
fn slot_of<'de, N, D>(deserializer: D) -> Result<ExtensionSlot, D::Error>
where
    N: Declaration,
    D: serde::Deserializer<'de>,
{
    let slot = <ExtensionSlot as serde::Deserialize>::deserialize(deserializer)?;
    if slot.kind() != N::KIND {
        return Err(serde::de::Error::custom(SlotError::KindMismatch {
            slot: N::KIND,
            extension: slot.kind(),
        }));
    }
    Ok(slot)
}

impl_declaration! {
    ClassNode => Class,
    PackageNode => Package,
    FunctionNode => Function,
    PropertyNode => Property,
    ConstructorNode => Constructor,
    TypeParameterNode => TypeParameter,
    TypeNode => Type,
}

/// Class declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassNode {
    /// Internal name, e.g. `org/example/Widget`.
    pub name: String,
    pub type_parameters: Vec<TypeParameterNode>,
    pub supertypes: Vec<TypeNode>,
    pub constructors: Vec<ConstructorNode>,
    pub functions: Vec<FunctionNode>,
    pub properties: Vec<PropertyNode>,
    #[cfg_attr(feature = "cache", serde(deserialize_with = "slot_of::<ClassNode, _>"))]
    extensions: ExtensionSlot,
}

impl ClassNode {
    pub fn new(name: impl Into<String>) -> Self {
        ClassNode {
            name: name.into(),
            type_parameters: Vec::new(),
            supertypes: Vec::new(),
            constructors: Vec::new(),
            functions: Vec::new(),
            properties: Vec::new(),
            extensions: ExtensionSlot::new(DeclarationKind::Class),
        }
    }
}

/// Package-level declarations of one compiled file.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageNode {
    pub functions: Vec<FunctionNode>,
    pub properties: Vec<PropertyNode>,
    #[cfg_attr(feature = "cache", serde(deserialize_with = "slot_of::<PackageNode, _>"))]
    extensions: ExtensionSlot,
}

impl PackageNode {
    pub fn new() -> Self {
        PackageNode {
            functions: Vec::new(),
            properties: Vec::new(),
            extensions: ExtensionSlot::new(DeclarationKind::Package),
        }
    }
}

impl Default for PackageNode {
    fn default() -> Self {
        Self::new()
    }
}

/// Function declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionNode {
    pub name: String,
    pub type_parameters: Vec<TypeParameterNode>,
    pub receiver_type: Option<TypeNode>,
    pub value_parameter_types: Vec<TypeNode>,
    pub return_type: TypeNode,
    #[cfg_attr(feature = "cache", serde(deserialize_with = "slot_of::<FunctionNode, _>"))]
    extensions: ExtensionSlot,
}

impl FunctionNode {
    pub fn new(name: impl Into<String>, return_type: TypeNode) -> Self {
        FunctionNode {
            name: name.into(),
            type_parameters: Vec::new(),
            receiver_type: None,
            value_parameter_types: Vec::new(),
            return_type,
            extensions: ExtensionSlot::new(DeclarationKind::Function),
        }
    }
}

/// Property declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyNode {
    pub name: String,
    pub return_type: TypeNode,
    #[cfg_attr(feature = "cache", serde(deserialize_with = "slot_of::<PropertyNode, _>"))]
    extensions: ExtensionSlot,
}

impl PropertyNode {
    pub fn new(name: impl Into<String>, return_type: TypeNode) -> Self {
        PropertyNode {
            name: name.into(),
            return_type,
            extensions: ExtensionSlot::new(DeclarationKind::Property),
        }
    }
}

/// Constructor declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructorNode {
    pub value_parameter_types: Vec<TypeNode>,
    #[cfg_attr(feature = "cache", serde(deserialize_with = "slot_of::<ConstructorNode, _>"))]
    extensions: ExtensionSlot,
}

impl ConstructorNode {
    pub fn new() -> Self {
        ConstructorNode {
            value_parameter_types: Vec::new(),
            extensions: ExtensionSlot::new(DeclarationKind::Constructor),
        }
    }
}

impl Default for ConstructorNode {
    fn default() -> Self {
        Self::new()
    }
}

/// Type parameter declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeParameterNode {
    /// Index unique within the enclosing declaration.
    pub id: u32,
    pub name: String,
    pub upper_bounds: Vec<TypeNode>,
    #[cfg_attr(feature = "cache", serde(deserialize_with = "slot_of::<TypeParameterNode, _>"))]
    extensions: ExtensionSlot,
}

impl TypeParameterNode {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        TypeParameterNode {
            id,
            name: name.into(),
            upper_bounds: Vec::new(),
            extensions: ExtensionSlot::new(DeclarationKind::TypeParameter),
        }
    }
}

/// Type usage.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeNode {
    /// Internal name of the classifier, e.g. `kotlin/collections/List`.
    pub classifier: String,
    pub arguments: Vec<TypeNode>,
    pub nullable: bool,
    #[cfg_attr(feature = "cache", serde(deserialize_with = "slot_of::<TypeNode, _>"))]
    extensions: ExtensionSlot,
}

impl TypeNode {
    pub fn new(classifier: impl Into<String>) -> Self {
        TypeNode {
            classifier: classifier.into(),
            arguments: Vec::new(),
            nullable: false,
            extensions: ExtensionSlot::new(DeclarationKind::Type),
        }
    }

    #[must_use]
    pub fn with_argument(mut self, argument: TypeNode) -> Self {
        self.arguments.push(argument);
        self
    }
}

#[cfg(test)]
mod tests;
