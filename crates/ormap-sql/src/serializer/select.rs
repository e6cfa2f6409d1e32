use super::{Comma, Delimited, Formatter, ToSql};

use crate::select::{Direction, OrderBy};
use crate::Select;

/// Column list, or `*` when no columns were chosen
struct Projection<'a>(&'a [String]);

/// `WHERE` clause. A single predicate is emitted bare; several are
/// parenthesized and joined with `AND`.
struct Filter<'a>(&'a [String]);

struct Parenthesized<'a>(&'a str);

struct OrderByClause<'a>(&'a [OrderBy]);

impl ToSql for &Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let distinct = if self.distinct { "DISTINCT " } else { "" };
        let projection = Projection(&self.columns);
        let relation = &self.relation;
        let filter = Filter(&self.filters);
        let order_by = OrderByClause(&self.order_by);

        fmt!(f, "SELECT " distinct projection " FROM " relation filter order_by);
    }
}

impl ToSql for Projection<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.0.is_empty() {
            fmt!(f, "*");
        } else {
            let columns = Comma(self.0);
            fmt!(f, columns);
        }
    }
}

impl ToSql for Filter<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self.0 {
            [] => {}
            [predicate] => fmt!(f, " WHERE " predicate),
            predicates => {
                let predicates = Delimited(
                    predicates.iter().map(|predicate| Parenthesized(predicate)),
                    " AND ",
                );
                fmt!(f, " WHERE " predicates);
            }
        }
    }
}

impl ToSql for Parenthesized<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let inner = self.0;
        fmt!(f, "(" inner ")");
    }
}

impl ToSql for OrderByClause<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if !self.0.is_empty() {
            let exprs = Comma(self.0);
            fmt!(f, " ORDER BY " exprs);
        }
    }
}

impl ToSql for &OrderBy {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = &self.column;

        match self.direction {
            Direction::Asc => fmt!(f, column),
            Direction::Desc => fmt!(f, column " DESC"),
        }
    }
}
