use crate::{serializer, Config, ParamType, Parameter, Statement, Value};
use ormap_core::{Error, Result};

/// Builds a `SELECT` statement.
///
/// Every mutator consumes the builder and hands it back, and [`build`]
/// consumes it for good, so a builder produces exactly one [`Statement`]. A
/// builder is owned by a single caller; it is not meant to be shared.
///
/// ```
/// use ormap_sql::select;
///
/// let stmt = select("Users")
///     .distinct()
///     .filter("Name=@0", "@", ["alice"])
///     .build()
///     .unwrap();
///
/// assert_eq!(stmt.sql(), "SELECT DISTINCT * FROM Users WHERE Name=@0");
/// ```
///
/// [`build`]: Select::build
#[derive(Debug, Clone)]
pub struct Select {
    pub(crate) config: Config,

    /// Relation the rows come from
    pub(crate) relation: String,

    /// Projected columns. Empty means `*`.
    pub(crate) columns: Vec<String>,

    pub(crate) distinct: bool,

    /// Predicates, conjoined with `AND`
    pub(crate) filters: Vec<String>,

    pub(crate) order_by: Vec<OrderBy>,

    pub(crate) params: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Starts a `SELECT *` against `relation`.
pub fn select(relation: impl Into<String>) -> Select {
    Select::new(relation)
}

impl Select {
    pub fn new(relation: impl Into<String>) -> Select {
        Select {
            config: Config::default(),
            relation: relation.into(),
            columns: vec![],
            distinct: false,
            filters: vec![],
            order_by: vec![],
            params: vec![],
        }
    }

    pub fn with_config(mut self, config: Config) -> Select {
        self.config = config;
        self
    }

    /// Projects the given columns instead of `*`.
    pub fn columns<I>(mut self, columns: I) -> Select
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn distinct(mut self) -> Select {
        self.distinct = true;
        self
    }

    /// Adds a predicate and binds one parameter per value.
    ///
    /// The predicate text is emitted unchanged; it is never rewritten.
    /// Parameters are numbered globally across all `filter` calls on this
    /// builder: the n-th value bound overall (counting from 0) is named
    /// `prefix` followed by `n`. A predicate added after two values were
    /// already bound therefore refers to its own values as `@2`, `@3`, ...
    ///
    /// ```
    /// use ormap_sql::select;
    ///
    /// let stmt = select("Orders")
    ///     .filter("Status=@0", "@", ["open"])
    ///     .filter("Total>@1", "@", [10])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(stmt.sql(), "SELECT * FROM Orders WHERE (Status=@0) AND (Total>@1)");
    /// assert_eq!(stmt.params()[1].name, "@1");
    /// ```
    pub fn filter<I>(mut self, predicate: impl AsRef<str>, prefix: &str, values: I) -> Select
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.filters.push(predicate.as_ref().to_string());

        for value in values {
            let value = value.into();
            let ty = ParamType::infer(&value, &self.config);

            self.params.push(Parameter {
                name: format!("{prefix}{}", self.params.len()),
                value,
                ty,
            });
        }

        self
    }

    /// Like [`filter`](Select::filter), using the configured parameter prefix.
    pub fn filter_default<I>(self, predicate: impl AsRef<str>, values: I) -> Select
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let prefix = self.config.parameter_prefix.clone();
        self.filter(predicate, &prefix, values)
    }

    pub fn order_by(mut self, column: impl Into<String>) -> Select {
        self.order_by.push(OrderBy {
            column: column.into(),
            direction: Direction::Asc,
        });
        self
    }

    pub fn order_by_desc(mut self, column: impl Into<String>) -> Select {
        self.order_by.push(OrderBy {
            column: column.into(),
            direction: Direction::Desc,
        });
        self
    }

    /// Assembles the statement text and hands over the parameters.
    pub fn build(self) -> Result<Statement> {
        if self.relation.trim().is_empty() {
            return Err(Error::invalid_statement("relation name is empty"));
        }

        let sql = serializer::serialize(&self);
        log::trace!("built statement; sql={sql:?} params={}", self.params.len());

        Ok(Statement::new(sql, self.params))
    }
}
