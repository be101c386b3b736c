#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_method_display() {
    let sig = JvmMethodSignature::new("run", "()V");
    assert_eq!(sig.to_string(), "run()V");
}

#[test]
fn test_method_parse() {
    let sig: JvmMethodSignature = "getX()I".parse().unwrap();
    assert_eq!(sig.name(), "getX");
    assert_eq!(sig.descriptor(), "()I");
}

#[test]
fn test_constructor_parse() {
    let sig: JvmMethodSignature = "<init>(Ljava/lang/String;)V".parse().unwrap();
    assert_eq!(sig.name(), "<init>");
    assert_eq!(sig.descriptor(), "(Ljava/lang/String;)V");
}

#[test]
fn test_method_parse_errors() {
    assert_eq!(
        "run".parse::<JvmMethodSignature>(),
        Err(SignatureError::MissingParameterList("run".to_owned()))
    );
    assert_eq!(
        "()V".parse::<JvmMethodSignature>(),
        Err(SignatureError::EmptyName("()V".to_owned()))
    );
}

#[test]
fn test_field_display_and_parse() {
    let sig: JvmFieldSignature = "count:I".parse().unwrap();
    assert_eq!(sig, JvmFieldSignature::new("count", "I"));
    assert_eq!(sig.to_string(), "count:I");
}

#[test]
fn test_field_parse_errors() {
    assert_eq!(
        "count".parse::<JvmFieldSignature>(),
        Err(SignatureError::MissingSeparator("count".to_owned()))
    );
    assert_eq!(
        ":I".parse::<JvmFieldSignature>(),
        Err(SignatureError::EmptyName(":I".to_owned()))
    );
    assert_eq!(
        "count:".parse::<JvmFieldSignature>(),
        Err(SignatureError::EmptyDescriptor("count:".to_owned()))
    );
}

#[test]
fn test_error_message() {
    let err = "run".parse::<JvmMethodSignature>().unwrap_err();
    assert_eq!(err.to_string(), "method signature `run` has no parameter list");
}
