#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::{
    JvmClassExtension, JvmFunctionExtension, JvmTypeExtension, PlatformTag,
};
use pretty_assertions::assert_eq;

#[test]
fn test_node_slot_kind_matches_node() {
    assert_eq!(ClassNode::new("A").extensions().kind(), ClassNode::KIND);
    assert_eq!(PackageNode::new().extensions().kind(), PackageNode::KIND);
    assert_eq!(
        FunctionNode::new("f", TypeNode::new("kotlin/Unit")).extensions().kind(),
        FunctionNode::KIND
    );
    assert_eq!(
        PropertyNode::new("p", TypeNode::new("kotlin/Int")).extensions().kind(),
        PropertyNode::KIND
    );
    assert_eq!(ConstructorNode::new().extensions().kind(), ConstructorNode::KIND);
    assert_eq!(
        TypeParameterNode::new(0, "T").extensions().kind(),
        TypeParameterNode::KIND
    );
    assert_eq!(TypeNode::new("kotlin/Any").extensions().kind(), TypeNode::KIND);
}

#[test]
fn test_with_extension_attaches() {
    let class = ClassNode::new("org/example/Widget")
        .with_extension(JvmClassExtension::new())
        .unwrap();
    assert_eq!(
        class.extensions().platforms().collect::<Vec<_>>(),
        vec![PlatformTag::Jvm]
    );
}

#[test]
fn test_with_extension_rejects_wrong_kind() {
    let result = TypeNode::new("kotlin/Any").with_extension(JvmFunctionExtension::new());
    assert_eq!(
        result.unwrap_err(),
        SlotError::KindMismatch {
            slot: DeclarationKind::Type,
            extension: DeclarationKind::Function,
        }
    );
}

#[test]
fn test_nested_types_own_their_extensions() {
    let list = TypeNode::new("java/util/List")
        .with_extension(JvmTypeExtension::new().with_raw(true))
        .unwrap()
        .with_argument(TypeNode::new("kotlin/String"));

    assert_eq!(list.extensions().len(), 1);
    assert!(list.arguments[0].extensions().is_empty());
}
