//! Per-node extension storage.

use smallvec::SmallVec;

use super::Extension;
use crate::{DeclarationKind, PlatformTag};

/// Error when attaching an extension to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    /// Extension authored for a different declaration kind than the node.
    #[error("cannot attach a {extension} extension to a {slot} declaration")]
    KindMismatch {
        slot: DeclarationKind,
        extension: DeclarationKind,
    },
    /// Two extensions for the same platform in stored slot data.
    #[error("duplicate `{0}` extension in stored slot")]
    DuplicatePlatform(PlatformTag),
}

/// Extensions owned by one declaration node.
///
/// Holds at most one extension per [`PlatformTag`], all of the slot's
/// declaration kind. The kind is fixed when the owning node is created.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cache", serde(try_from = "RawSlot"))]
pub struct ExtensionSlot {
    kind: DeclarationKind,
    entries: SmallVec<[Extension; 1]>,
}

/// Unchecked slot data as read from a cache.
#[cfg(feature = "cache")]
#[derive(serde::Deserialize)]
struct RawSlot {
    kind: DeclarationKind,
    entries: SmallVec<[Extension; 1]>,
}

#[cfg(feature = "cache")]
impl TryFrom<RawSlot> for ExtensionSlot {
    type Error = SlotError;

    fn try_from(raw: RawSlot) -> Result<Self, SlotError> {
        let mut slot = ExtensionSlot::new(raw.kind);
        for extension in raw.entries {
            let platform = extension.platform();
            if slot.insert(extension)?.is_some() {
                return Err(SlotError::DuplicatePlatform(platform));
            }
        }
        Ok(slot)
    }
}

impl ExtensionSlot {
    pub(crate) fn new(kind: DeclarationKind) -> Self {
        ExtensionSlot {
            kind,
            entries: SmallVec::new(),
        }
    }

    #[inline]
    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    /// Attach an extension, replacing any existing one for the same platform.
    ///
    /// Returns the replaced extension. On a kind mismatch the slot is left
    /// unchanged.
    pub fn insert(
        &mut self,
        extension: impl Into<Extension>,
    ) -> Result<Option<Extension>, SlotError> {
        let extension = extension.into();
        if extension.kind() != self.kind {
            return Err(SlotError::KindMismatch {
                slot: self.kind,
                extension: extension.kind(),
            });
        }
        let platform = extension.platform();
        match self.entries.iter_mut().find(|e| e.platform() == platform) {
            Some(existing) => Ok(Some(std::mem::replace(existing, extension))),
            None => {
                self.entries.push(extension);
                Ok(None)
            }
        }
    }

    pub fn get(&self, platform: PlatformTag) -> Option<&Extension> {
        self.entries.iter().find(|e| e.platform() == platform)
    }

    pub fn get_mut(&mut self, platform: PlatformTag) -> Option<&mut Extension> {
        self.entries.iter_mut().find(|e| e.platform() == platform)
    }

    pub fn remove(&mut self, platform: PlatformTag) -> Option<Extension> {
        let index = self.entries.iter().position(|e| e.platform() == platform)?;
        Some(self.entries.remove(index))
    }

    /// Platforms that currently have an extension, in insertion order.
    pub fn platforms(&self) -> impl Iterator<Item = PlatformTag> + '_ {
        self.entries.iter().map(Extension::platform)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Extension> {
        self.entries.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
