//! JVM member signatures.
//!
//! Signatures are opaque to the extension model: they are stored, compared
//! and printed, never interpreted. The printed forms match the ones used in
//! compiled metadata:
//! - method: `name(params)ret`, e.g. `run()V`
//! - field: `name:desc`, e.g. `count:I`

use std::fmt;
use std::str::FromStr;

/// Error when parsing a signature from its printed form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    /// Method signature without a `(` starting the descriptor.
    #[error("method signature `{0}` has no parameter list")]
    MissingParameterList(String),
    /// Field signature without a `:` separating name and descriptor.
    #[error("field signature `{0}` has no `:` separator")]
    MissingSeparator(String),
    #[error("signature `{0}` has an empty name")]
    EmptyName(String),
    #[error("signature `{0}` has an empty descriptor")]
    EmptyDescriptor(String),
}

/// Signature of a JVM method: name plus method descriptor.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct JvmMethodSignature {
    name: String,
    descriptor: String,
}

impl JvmMethodSignature {
    pub fn new(name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        JvmMethodSignature {
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Method descriptor, e.g. `(ILjava/lang/String;)V`.
    #[inline]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}

impl fmt::Display for JvmMethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.descriptor)
    }
}

impl FromStr for JvmMethodSignature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let open = s
            .find('(')
            .ok_or_else(|| SignatureError::MissingParameterList(s.to_owned()))?;
        let (name, descriptor) = s.split_at(open);
        if name.is_empty() {
            return Err(SignatureError::EmptyName(s.to_owned()));
        }
        Ok(JvmMethodSignature::new(name, descriptor))
    }
}

/// Signature of a JVM field: name plus field descriptor.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct JvmFieldSignature {
    name: String,
    descriptor: String,
}

impl JvmFieldSignature {
    pub fn new(name: impl Into<String>, descriptor: impl Into<String>) -> Self {
        JvmFieldSignature {
            name: name.into(),
            descriptor: descriptor.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field descriptor, e.g. `Ljava/lang/String;`.
    #[inline]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }
}

impl fmt::Display for JvmFieldSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.descriptor)
    }
}

impl FromStr for JvmFieldSignature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, descriptor) = s
            .split_once(':')
            .ok_or_else(|| SignatureError::MissingSeparator(s.to_owned()))?;
        if name.is_empty() {
            return Err(SignatureError::EmptyName(s.to_owned()));
        }
        if descriptor.is_empty() {
            return Err(SignatureError::EmptyDescriptor(s.to_owned()));
        }
        Ok(JvmFieldSignature::new(name, descriptor))
    }
}

#[cfg(test)]
mod tests;
