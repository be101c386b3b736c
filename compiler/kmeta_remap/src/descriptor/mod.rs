//! JVM descriptor rewriting.
//!
//! Rewrites every `L<internal name>;` reference in a field or method
//! descriptor through a [`Remapper`]. Primitive codes, array brackets and
//! parentheses are copied as-is. Tokens are validated, overall structure
//! (one return type, balanced parentheses) is not.

use crate::Remapper;

/// Error when a descriptor contains something that is not a JVM type token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    #[error("empty descriptor")]
    Empty,
    /// `L` without a closing `;`.
    #[error("unterminated class reference at byte {offset}")]
    UnterminatedClass { offset: usize },
    /// `L;` with nothing in between.
    #[error("empty class name at byte {offset}")]
    EmptyClassName { offset: usize },
    #[error("unexpected character `{ch}` at byte {offset}")]
    UnexpectedChar { ch: char, offset: usize },
}

/// Remap every class reference inside `descriptor`.
pub fn remap_descriptor<R: Remapper + ?Sized>(
    descriptor: &str,
    remapper: &R,
) -> Result<String, DescriptorError> {
    if descriptor.is_empty() {
        return Err(DescriptorError::Empty);
    }

    let mut out = String::with_capacity(descriptor.len());
    let mut offset = 0;
    while let Some(ch) = descriptor[offset..].chars().next() {
        match ch {
            'B' | 'C' | 'D' | 'F' | 'I' | 'J' | 'S' | 'Z' | 'V' | '[' | '(' | ')' => {
                out.push(ch);
                offset += 1;
            }
            'L' => {
                let body = &descriptor[offset + 1..];
                let end = body
                    .find(';')
                    .ok_or(DescriptorError::UnterminatedClass { offset })?;
                let name = &body[..end];
                if name.is_empty() {
                    return Err(DescriptorError::EmptyClassName { offset });
                }
                out.push('L');
                out.push_str(remapper.map_class(name).unwrap_or(name));
                out.push(';');
                offset += end + 2;
            }
            other => {
                return Err(DescriptorError::UnexpectedChar { ch: other, offset });
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests;
