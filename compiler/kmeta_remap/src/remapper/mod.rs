//! Name mapping sources.
//!
//! A [`Remapper`] answers "what is this JVM name called now?" for classes,
//! methods and fields. Member lookups are keyed by the *original* owner,
//! name and descriptor. `None` means the name is unchanged.

use rustc_hash::FxHashMap;

/// Source of class and member renames.
pub trait Remapper {
    /// New internal name for a class, e.g. `a/b` -> `org/example/Widget`.
    fn map_class(&self, internal_name: &str) -> Option<&str>;

    /// New name for a method declared in `owner`.
    fn map_method(&self, owner: &str, name: &str, descriptor: &str) -> Option<&str>;

    /// New name for a field declared in `owner`.
    fn map_field(&self, owner: &str, name: &str, descriptor: &str) -> Option<&str>;
}

/// Remapper that renames nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct IdentityRemapper;

impl Remapper for IdentityRemapper {
    fn map_class(&self, _internal_name: &str) -> Option<&str> {
        None
    }

    fn map_method(&self, _owner: &str, _name: &str, _descriptor: &str) -> Option<&str> {
        None
    }

    fn map_field(&self, _owner: &str, _name: &str, _descriptor: &str) -> Option<&str> {
        None
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
struct MemberKey {
    owner: String,
    name: String,
    descriptor: String,
}

impl MemberKey {
    fn new(owner: &str, name: &str, descriptor: &str) -> Self {
        MemberKey {
            owner: owner.to_owned(),
            name: name.to_owned(),
            descriptor: descriptor.to_owned(),
        }
    }
}

/// Table-backed remapper, filled from a mapping file or by hand.
#[derive(Clone, Debug, Default)]
pub struct MappingTable {
    classes: FxHashMap<String, String>,
    methods: FxHashMap<MemberKey, String>,
    fields: FxHashMap<MemberKey, String>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.classes.insert(from.into(), to.into());
        self
    }

    pub fn add_method(
        &mut self,
        owner: &str,
        name: &str,
        descriptor: &str,
        to: impl Into<String>,
    ) -> &mut Self {
        self.methods
            .insert(MemberKey::new(owner, name, descriptor), to.into());
        self
    }

    pub fn add_field(
        &mut self,
        owner: &str,
        name: &str,
        descriptor: &str,
        to: impl Into<String>,
    ) -> &mut Self {
        self.fields
            .insert(MemberKey::new(owner, name, descriptor), to.into());
        self
    }

    /// Number of class, method and field entries.
    pub fn len(&self) -> usize {
        self.classes.len() + self.methods.len() + self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Remapper for MappingTable {
    fn map_class(&self, internal_name: &str) -> Option<&str> {
        self.classes.get(internal_name).map(String::as_str)
    }

    fn map_method(&self, owner: &str, name: &str, descriptor: &str) -> Option<&str> {
        self.methods
            .get(&MemberKey::new(owner, name, descriptor))
            .map(String::as_str)
    }

    fn map_field(&self, owner: &str, name: &str, descriptor: &str) -> Option<&str> {
        self.fields
            .get(&MemberKey::new(owner, name, descriptor))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests;
