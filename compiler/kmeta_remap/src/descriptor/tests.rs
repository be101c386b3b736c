#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::{IdentityRemapper, MappingTable};
use pretty_assertions::assert_eq;

fn table() -> MappingTable {
    let mut table = MappingTable::new();
    table.add_class("a", "org/example/Widget");
    table.add_class("b", "org/example/Gadget");
    table
}

#[test]
fn test_primitives_unchanged() {
    assert_eq!(remap_descriptor("(IJZ)V", &table()).unwrap(), "(IJZ)V");
}

#[test]
fn test_class_references_remapped() {
    assert_eq!(
        remap_descriptor("(La;[[Lb;Ljava/lang/String;)La;", &table()).unwrap(),
        "(Lorg/example/Widget;[[Lorg/example/Gadget;Ljava/lang/String;)Lorg/example/Widget;"
    );
}

#[test]
fn test_field_descriptor() {
    assert_eq!(remap_descriptor("[La;", &table()).unwrap(), "[Lorg/example/Widget;");
}

#[test]
fn test_identity_is_unchanged() {
    let desc = "(Ljava/util/List;I)[Ljava/lang/Object;";
    assert_eq!(remap_descriptor(desc, &IdentityRemapper).unwrap(), desc);
}

#[test]
fn test_errors() {
    assert_eq!(remap_descriptor("", &table()), Err(DescriptorError::Empty));
    assert_eq!(
        remap_descriptor("(La", &table()),
        Err(DescriptorError::UnterminatedClass { offset: 1 })
    );
    assert_eq!(
        remap_descriptor("L;", &table()),
        Err(DescriptorError::EmptyClassName { offset: 0 })
    );
    assert_eq!(
        remap_descriptor("(Q)V", &table()),
        Err(DescriptorError::UnexpectedChar { ch: 'Q', offset: 1 })
    );
}
