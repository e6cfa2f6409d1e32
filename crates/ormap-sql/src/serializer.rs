#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

// Fragment serializers
mod select;

use crate::Select;

/// Where serialized SQL is written
struct Formatter<'a> {
    dst: &'a mut String,
}

/// Serializes a `SELECT` builder into statement text.
///
/// Relation, column and predicate text is emitted as given. Values never
/// reach the text; only their placeholders do.
pub fn serialize(stmt: &Select) -> String {
    let mut ret = String::new();

    let mut f = Formatter { dst: &mut ret };
    stmt.to_sql(&mut f);

    ret
}
