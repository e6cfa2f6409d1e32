use ormap_sql::{select, Config, ParamType, Parameter, Select, Value};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn select_distinct_with_filter() {
    init_logging();

    let stmt = assert_ok!(select("Test")
        .distinct()
        .filter("Value1=@0", "@", ["Test"])
        .build());

    assert_eq!(stmt.sql(), "SELECT DISTINCT * FROM Test WHERE Value1=@0");
    assert!(stmt.params().contains(&Parameter::string("@0", "Test", 4)));
    assert_eq!(stmt.params().len(), 1);
}

#[test]
fn without_filter_there_is_no_where_clause() {
    let stmt = assert_ok!(select("Users").build());
    assert_eq!(stmt.sql(), "SELECT * FROM Users");
    assert_empty!(stmt.params());
}

#[test]
fn without_distinct_there_is_no_distinct_keyword() {
    let stmt = assert_ok!(select("Users").filter("Id=@0", "@", [7]).build());
    assert_eq!(stmt.sql(), "SELECT * FROM Users WHERE Id=@0");
    assert_eq!(stmt.params(), &[Parameter::new("@0", 7, ParamType::I32)]);
}

#[test]
fn distinct_is_idempotent() {
    let stmt = assert_ok!(select("Users").distinct().distinct().build());
    assert_eq!(stmt.sql(), "SELECT DISTINCT * FROM Users");
}

#[test]
fn several_filters_are_conjoined_in_call_order() {
    let stmt = assert_ok!(select("Orders")
        .filter("Status=@0", "@", ["open"])
        .filter("Total>@1 AND Total<@2", "@", [10_i64, 500_i64])
        .filter("Region=@3", "@", ["EU"])
        .build());

    assert_eq!(
        stmt.sql(),
        "SELECT * FROM Orders WHERE (Status=@0) AND (Total>@1 AND Total<@2) AND (Region=@3)"
    );

    let names: Vec<_> = stmt.params().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["@0", "@1", "@2", "@3"]);

    let values: Vec<_> = stmt.params().iter().map(|p| p.value.clone()).collect();
    assert_eq!(
        values,
        vec![
            Value::from("open"),
            Value::I64(10),
            Value::I64(500),
            Value::from("EU"),
        ]
    );
}

#[test]
fn filter_without_values_binds_nothing() {
    let stmt = assert_ok!(select("Users")
        .filter("Deleted IS NULL", "@", Vec::<Value>::new())
        .filter("Name=@0", "@", ["bob"])
        .build());

    assert_eq!(
        stmt.sql(),
        "SELECT * FROM Users WHERE (Deleted IS NULL) AND (Name=@0)"
    );
    assert_eq!(stmt.params()[0].name, "@0");
}

#[test]
fn mixed_value_kinds_are_tagged() {
    let date = chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

    let stmt = assert_ok!(select("Events")
        .filter(
            "Name=@0 AND Day=@1 AND Active=@2 AND Score>@3",
            "@",
            [
                Value::from("launch"),
                Value::from(date),
                Value::from(true),
                Value::from(0.5),
            ]
        )
        .build());

    let tags: Vec<_> = stmt.params().iter().map(|p| p.ty).collect();
    assert_eq!(
        tags,
        vec![
            ParamType::String { length: 4 },
            ParamType::Date,
            ParamType::Bool,
            ParamType::F64,
        ]
    );
}

#[test]
fn columns_and_ordering() {
    let stmt = assert_ok!(select("Users")
        .columns(["Id", "Name"])
        .filter("Age>=@0", "@", [18])
        .order_by("Name")
        .order_by_desc("Id")
        .build());

    assert_eq!(
        stmt.sql(),
        "SELECT Id, Name FROM Users WHERE Age>=@0 ORDER BY Name, Id DESC"
    );
}

#[test]
fn custom_prefix_is_used_for_names() {
    let stmt = assert_ok!(select("Users")
        .filter("Id=:p0", ":p", [1])
        .filter("Name=:p1", ":p", ["x"])
        .build());

    assert_eq!(
        stmt.sql(),
        "SELECT * FROM Users WHERE (Id=:p0) AND (Name=:p1)"
    );
    assert_eq!(stmt.params()[1].name, ":p1");
}

#[test]
fn predicate_text_is_emitted_verbatim() {
    let stmt = assert_ok!(select("Users")
        .filter("Active=@0", "@", [true])
        .filter("Email='ops@1.example' AND Id=@1", "@", [5])
        .build());

    assert_eq!(
        stmt.sql(),
        "SELECT * FROM Users WHERE (Active=@0) AND (Email='ops@1.example' AND Id=@1)"
    );

    let names: Vec<_> = stmt.params().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["@0", "@1"]);
}

#[test]
fn oversized_placeholder_lookalike_is_left_alone() {
    let stmt = assert_ok!(select("T")
        .filter("A=@0", "@", [1])
        .filter("B='@18446744073709551615'", "@", Vec::<i32>::new())
        .build());

    assert_eq!(
        stmt.sql(),
        "SELECT * FROM T WHERE (A=@0) AND (B='@18446744073709551615')"
    );
    assert_eq!(stmt.params().len(), 1);
}

#[test]
fn config_drives_defaults() {
    let config = Config::new()
        .default_string_length(255)
        .parameter_prefix("$");

    let stmt = assert_ok!(Select::new("Users")
        .with_config(config)
        .filter_default("Name=$0", ["a much longer string"])
        .build());

    assert_eq!(stmt.sql(), "SELECT * FROM Users WHERE Name=$0");
    assert_eq!(
        stmt.params(),
        &[Parameter::string("$0", "a much longer string", 255)]
    );
}

#[test]
fn values_never_appear_in_text() {
    let hostile = "x'; DROP TABLE Users; --";
    let stmt = assert_ok!(select("Users").filter("Name=@0", "@", [hostile]).build());

    assert!(!stmt.sql().contains("DROP"));
    assert_eq!(stmt.params()[0].value.as_str(), Some(hostile));
}

#[test]
fn empty_relation_is_rejected() {
    let err = assert_err!(select("").build());
    assert!(err.is_invalid_statement());

    let err = assert_err!(select("   ").distinct().build());
    assert!(err.is_invalid_statement());
}

#[test]
fn into_parts_hands_over_ownership() {
    let stmt = assert_ok!(select("T").filter("A=@0", "@", [None::<i64>]).build());
    let (sql, params) = stmt.into_parts();

    assert_eq!(sql, "SELECT * FROM T WHERE A=@0");
    assert!(params[0].value.is_null());
    assert_eq!(params, vec![Parameter::new("@0", Value::Null, ParamType::Null)]);
}
