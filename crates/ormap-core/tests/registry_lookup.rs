use ormap_core::schema::{Mapping, ObjectType, SourceInfo, TypeCatalog, TypeDef};
use ormap_core::Registry;
use pretty_assertions::assert_eq;
use std_util::prelude::*;

fn registry() -> Registry {
    let catalog: TypeCatalog = [
        TypeDef::class("Customer"),
        TypeDef::class("Order"),
        TypeDef::class("Invoice"),
    ]
    .into_iter()
    .collect();

    assert_ok!(Registry::new(
        &catalog,
        [
            Mapping::new("Customer", "Sales").table_name("Customers"),
            Mapping::new("Order", "Sales"),
            Mapping::new("Customer", "Reporting")
                .table_name("Customer")
                .prefix("rpt_"),
        ]
    ))
}

#[test]
fn unknown_type_has_no_mappings() {
    let registry = registry();
    assert_empty!(registry.mappings(&"Invoice".into()));
    assert_empty!(registry.mappings(&"NeverDeclared".into()));
}

#[test]
fn unknown_database_has_empty_structure() {
    let registry = registry();
    let graph = registry.structure(&"Archive".into());
    assert_eq!(graph.len(), 0);
    assert_empty!(graph.edges());
}

#[test]
fn mappings_of_a_type_keep_input_order() {
    let registry = registry();
    let databases: Vec<_> = registry
        .mappings(&"Customer".into())
        .iter()
        .map(|m| m.database.to_string())
        .collect();
    assert_eq!(databases, vec!["Sales", "Reporting"]);
}

#[test]
fn mapping_is_selected_by_source_database() {
    let registry = registry();
    let customer = ObjectType::new("Customer");

    let sales = SourceInfo::new("primary", "Sales");
    let mapping = registry.mapping(&customer, &sales).unwrap();
    assert_eq!(mapping.qualified_table_name(), "Customers");
    assert!(mapping.is(&customer, &sales.database));
    assert!(!mapping.is(&customer, &"Reporting".into()));

    let reporting = SourceInfo::new("replica", "Reporting").read_only();
    let mapping = registry.mapping(&customer, &reporting).unwrap();
    assert_eq!(mapping.qualified_table_name(), "rpt_Customer");
}

#[test]
fn mapping_is_none_without_matching_database() {
    let registry = registry();

    let reporting = SourceInfo::new("replica", "Reporting");
    assert_none!(registry.mapping(&"Order".into(), &reporting));

    let archive = SourceInfo::new("cold", "Archive");
    assert_none!(registry.mapping(&"Customer".into(), &archive));
    assert_none!(registry.mapping(&"Invoice".into(), &archive));
}

#[test]
fn display_lists_sorted_groups() {
    let registry = registry();
    assert_eq!(
        registry.to_string(),
        "Mappers: Customer -> Customers (Sales),Customer -> rpt_Customer (Reporting),Order -> Order (Sales)\n"
    );
}

#[test]
fn source_info_deserializes_with_defaults() {
    let source: SourceInfo = assert_ok!(serde_json::from_str(
        r#"{ "name": "primary", "database": "Sales", "connection": "Server=db1" }"#
    ));

    assert_eq!(source, SourceInfo::new("primary", "Sales").connection("Server=db1"));
    assert_eq!(source.parameter_prefix, "@");
    assert!(source.readable && source.writable);

    let json = assert_ok!(serde_json::to_value(&source));
    assert_eq!(json["database"], "Sales");
}
