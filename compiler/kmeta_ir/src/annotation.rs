//! Annotation payloads attached to type parameters and types.
//!
//! The model stores annotations but never interprets their arguments. An
//! argument value is kept in whatever encoded form the metadata reader
//! produced.

/// One annotation instance.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Annotation {
    /// Internal name of the annotation class, e.g. `org/example/Tag`.
    pub class_name: String,
    /// Arguments in declaration order.
    pub arguments: Vec<AnnotationArgument>,
}

impl Annotation {
    /// Annotation without arguments.
    pub fn marker(class_name: impl Into<String>) -> Self {
        Annotation {
            class_name: class_name.into(),
            arguments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.push(AnnotationArgument {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// Named annotation argument with an opaque encoded value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotationArgument {
    pub name: String,
    pub value: String,
}
