use super::*;
use pretty_assertions::assert_eq;

fn table() -> MappingTable {
    let mut table = MappingTable::new();
    table
        .add_class("a", "org/example/Widget")
        .add_method("a", "b", "()V", "refresh")
        .add_field("a", "c", "I", "count");
    table
}

#[test]
fn test_table_lookups() {
    let table = table();
    assert_eq!(table.map_class("a"), Some("org/example/Widget"));
    assert_eq!(table.map_method("a", "b", "()V"), Some("refresh"));
    assert_eq!(table.map_field("a", "c", "I"), Some("count"));
    assert_eq!(table.len(), 3);
}

#[test]
fn test_member_lookup_requires_exact_descriptor() {
    let table = table();
    assert_eq!(table.map_method("a", "b", "(I)V"), None);
    assert_eq!(table.map_field("a", "c", "J"), None);
    assert_eq!(table.map_method("z", "b", "()V"), None);
}

#[test]
fn test_identity_maps_nothing() {
    assert_eq!(IdentityRemapper.map_class("a"), None);
    assert_eq!(IdentityRemapper.map_method("a", "b", "()V"), None);
    assert_eq!(IdentityRemapper.map_field("a", "c", "I"), None);
}

#[test]
fn test_empty_table() {
    assert!(MappingTable::new().is_empty());
}
