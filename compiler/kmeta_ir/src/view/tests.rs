#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::{DeclarationKind, ForeignExtension};
use pretty_assertions::assert_eq;

fn sig(s: &str) -> JvmMethodSignature {
    s.parse().unwrap()
}

/// One JVM extension of every kind.
fn all_jvm_extensions() -> Vec<Extension> {
    vec![
        JvmClassExtension::new().into(),
        JvmPackageExtension::new().into(),
        JvmFunctionExtension::new().into(),
        JvmPropertyExtension::new().into(),
        JvmConstructorExtension::new().into(),
        JvmTypeParameterExtension::new().into(),
        JvmTypeExtension::new().into(),
    ]
}

/// Kinds for which each view narrows successfully.
fn narrowed_kinds(ext: &Extension) -> Vec<DeclarationKind> {
    let e = Some(ext);
    let mut kinds = Vec::new();
    if JvmClassView::narrow(e).is_some() {
        kinds.push(DeclarationKind::Class);
    }
    if JvmPackageView::narrow(e).is_some() {
        kinds.push(DeclarationKind::Package);
    }
    if JvmFunctionView::narrow(e).is_some() {
        kinds.push(DeclarationKind::Function);
    }
    if JvmPropertyView::narrow(e).is_some() {
        kinds.push(DeclarationKind::Property);
    }
    if JvmConstructorView::narrow(e).is_some() {
        kinds.push(DeclarationKind::Constructor);
    }
    if JvmTypeParameterView::narrow(e).is_some() {
        kinds.push(DeclarationKind::TypeParameter);
    }
    if JvmTypeView::narrow(e).is_some() {
        kinds.push(DeclarationKind::Type);
    }
    kinds
}

#[test]
fn test_each_extension_narrows_only_to_its_kind() {
    for ext in all_jvm_extensions() {
        assert_eq!(narrowed_kinds(&ext), vec![ext.kind()]);
    }
}

#[test]
fn test_foreign_platform_never_narrows() {
    for kind in DeclarationKind::ALL {
        for platform in [PlatformTag::Js, PlatformTag::Native, PlatformTag::Wasm] {
            let ext = Extension::from(ForeignExtension::new(kind, platform, Vec::new()).unwrap());
            assert_eq!(narrowed_kinds(&ext), Vec::new());
        }
    }
}

#[test]
fn test_absent_never_narrows() {
    assert!(JvmClassView::narrow(None).is_none());
    assert!(JvmPackageView::narrow(None).is_none());
    assert!(JvmFunctionView::narrow_mut(None).is_none());
    assert!(JvmPropertyView::narrow_mut(None).is_none());
    assert!(JvmConstructorView::narrow(None).is_none());
    assert!(JvmTypeParameterView::narrow(None).is_none());
    assert!(JvmTypeView::narrow_mut(None).is_none());
}

#[test]
fn test_function_not_reinterpreted_as_constructor() {
    let mut ext = Extension::from(JvmFunctionExtension::new().with_signature(sig("run()V")));
    assert!(JvmConstructorView::narrow(Some(&ext)).is_none());
    assert!(JvmConstructorView::narrow_mut(Some(&mut ext)).is_none());
}

#[test]
fn test_class_view_setters() {
    let mut node = ClassNode::new("org/example/Widget")
        .with_extension(JvmClassExtension::new())
        .unwrap();

    let mut view = node.jvm_mut().unwrap();
    view.set_module_name(Some("app".to_owned()));
    view.set_anonymous_object_origin_name(Some("org/example/Widget$1".to_owned()));
    view.set_jvm_flags(0x3);

    let view = node.jvm().unwrap();
    assert_eq!(view.module_name(), Some("app"));
    assert_eq!(view.anonymous_object_origin_name(), Some("org/example/Widget$1"));
    assert_eq!(view.jvm_flags(), 0x3);
    assert_eq!(view.flags(), JvmClassFlags::all());
}

#[test]
fn test_flags_accept_any_value() {
    let mut node = PropertyNode::new("x", TypeNode::new("kotlin/Int"))
        .with_extension(JvmPropertyExtension::new())
        .unwrap();
    node.jvm_mut().unwrap().set_jvm_flags(u32::MAX);
    assert_eq!(node.jvm().unwrap().jvm_flags(), u32::MAX);
    assert_eq!(node.jvm().unwrap().flags().bits(), u32::MAX);
}

#[test]
fn test_package_view_setters() {
    let mut node = PackageNode::new()
        .with_extension(JvmPackageExtension::new().with_module_name("core"))
        .unwrap();
    assert_eq!(node.jvm().unwrap().module_name(), Some("core"));

    node.jvm_mut().unwrap().set_module_name(None);
    assert_eq!(node.jvm().unwrap().module_name(), None);
}

#[test]
fn test_function_view_setters() {
    let mut node = FunctionNode::new("run", TypeNode::new("kotlin/Unit"))
        .with_extension(JvmFunctionExtension::new())
        .unwrap();

    let mut view = node.jvm_mut().unwrap();
    view.set_lambda_class_origin_name(Some("org/example/Main$run$1".to_owned()));
    view.set_signature(Some(sig("run()V")));

    let view = node.jvm().unwrap();
    assert_eq!(view.signature(), Some(&sig("run()V")));
    assert_eq!(view.lambda_class_origin_name(), Some("org/example/Main$run$1"));
}

#[test]
fn test_property_view_optional_signatures_are_independent() {
    let mut node = PropertyNode::new("x", TypeNode::new("kotlin/Int"))
        .with_extension(JvmPropertyExtension::new())
        .unwrap();

    let mut view = node.jvm_mut().unwrap();
    view.set_field_signature(Some("x:I".parse().unwrap()));
    view.set_synthetic_method_for_annotations(Some(sig("getX$annotations()V")));
    view.set_synthetic_method_for_delegate(Some(sig("getX$delegate()Ljava/lang/Object;")));
    view.set_synthetic_method_for_annotations(None);

    let view = node.jvm().unwrap();
    assert_eq!(view.field_signature(), Some(&JvmFieldSignature::new("x", "I")));
    assert_eq!(view.getter_signature(), None);
    assert_eq!(view.setter_signature(), None);
    assert_eq!(view.synthetic_method_for_annotations(), None);
    assert_eq!(
        view.synthetic_method_for_delegate(),
        Some(&sig("getX$delegate()Ljava/lang/Object;"))
    );
}

#[test]
fn test_constructor_view_setters() {
    let mut node = ConstructorNode::new()
        .with_extension(JvmConstructorExtension::new())
        .unwrap();
    node.jvm_mut().unwrap().set_signature(Some(sig("<init>()V")));
    assert_eq!(node.jvm().unwrap().signature(), Some(&sig("<init>()V")));
}

#[test]
fn test_type_view_setters() {
    let mut node = TypeNode::new("java/util/List")
        .with_extension(
            JvmTypeExtension::new().with_annotation(Annotation::marker("org/example/Ann")),
        )
        .unwrap();
    node.jvm_mut().unwrap().set_raw(true);

    let view = node.jvm().unwrap();
    assert!(view.is_raw());
    assert_eq!(view.annotations(), &[Annotation::marker("org/example/Ann")]);
}

#[test]
fn test_view_reflects_later_model_changes() {
    let mut node = TypeParameterNode::new(0, "T")
        .with_extension(JvmTypeParameterExtension::new())
        .unwrap();
    assert!(node.jvm().unwrap().annotations().is_empty());

    node.jvm_mut()
        .unwrap()
        .into_inner()
        .annotations_mut()
        .push(Annotation::marker("org/example/Ann"));
    assert_eq!(node.jvm().unwrap().annotations().len(), 1);
}

#[test]
fn test_node_shortcut_skips_foreign_extension() {
    let node = FunctionNode::new("f", TypeNode::new("kotlin/Unit"))
        .with_extension(
            ForeignExtension::new(DeclarationKind::Function, PlatformTag::Native, vec![0]).unwrap(),
        )
        .unwrap();
    assert!(node.jvm().is_none());
    assert_eq!(node.extensions().len(), 1);
}

#[test]
fn test_extension_accessor_matches_view() {
    let node = ConstructorNode::new()
        .with_extension(JvmConstructorExtension::new().with_signature(sig("<init>(I)V")))
        .unwrap();
    let view = node.jvm().unwrap();
    assert_eq!(view.extension().signature(), view.signature());
}
