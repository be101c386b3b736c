use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_kind_display() {
    assert_eq!(DeclarationKind::Class.to_string(), "class");
    assert_eq!(DeclarationKind::TypeParameter.to_string(), "type parameter");
}

#[test]
fn test_all_kinds_distinct() {
    use std::collections::HashSet;
    let set: HashSet<_> = DeclarationKind::ALL.iter().copied().collect();
    assert_eq!(set.len(), DeclarationKind::ALL.len());
}

#[test]
fn test_only_jvm_understood() {
    assert!(PlatformTag::Jvm.is_understood());
    assert!(!PlatformTag::Js.is_understood());
    assert!(!PlatformTag::Native.is_understood());
    assert!(!PlatformTag::Wasm.is_understood());
}

#[test]
fn test_platform_display() {
    assert_eq!(PlatformTag::Jvm.to_string(), "jvm");
    assert_eq!(PlatformTag::Wasm.to_string(), "wasm");
}
