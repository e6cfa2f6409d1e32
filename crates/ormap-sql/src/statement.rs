use crate::Parameter;

/// Final query text and its ordered parameters.
///
/// Parameter `i` binds the placeholder named `params()[i].name`. Values are
/// never interpolated into the text; the execution layer binds them.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<Parameter>,
}

impl Statement {
    pub(crate) fn new(sql: String, params: Vec<Parameter>) -> Statement {
        Statement { sql, params }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Vec<Parameter>) {
        (self.sql, self.params)
    }
}
