//! SelectBuilder：构建单表 SELECT 语句。

use crate::error::{BuildError, Result};
use crate::escape::{quote, quote_all};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;
use crate::where_clause::WhereClause;

/// 单表 SELECT。
///
/// 子句固定按 `WHERE`、`GROUP BY`、`HAVING`、`ORDER BY`、`LIMIT` 的顺序输出，
/// 未设置的子句不会出现在结果中。
#[derive(Debug, Clone, PartialEq)]
pub struct SelectBuilder {
    table: String,
    select_cols: Vec<String>,
    where_clause: WhereClause,
    group_by_cols: Vec<String>,
    having_expr: Option<String>,
    order_by_cols: Vec<String>,
    limit: Option<u64>,
}

/// `select(table, columns)` 的快捷入口，其余子句通过链式调用补充。
///
/// ```
/// let sql = uzisql::select("user_profile", ["name", "sex"])
///     .filter("sex", "M")
///     .order_by(["name"])
///     .limit(10)
///     .build()
///     .unwrap();
/// assert_eq!(
///     sql,
///     "SELECT `name`, `sex` FROM `user_profile` WHERE `sex` = 'M' ORDER BY `name` LIMIT 10"
/// );
/// ```
pub fn select(
    table: impl Into<String>,
    columns: impl IntoIterator<Item = impl Into<String>>,
) -> SelectBuilder {
    SelectBuilder::new(table).columns(columns)
}

impl SelectBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            select_cols: Vec::new(),
            where_clause: WhereClause::new(),
            group_by_cols: Vec::new(),
            having_expr: None,
            order_by_cols: Vec::new(),
            limit: None,
        }
    }

    pub fn columns(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.select_cols.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn filter(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.where_clause.add(column, value);
        self
    }

    pub fn filters<K, V>(mut self, filters: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<SqlValue>,
    {
        self.where_clause.extend(filters);
        self
    }

    pub fn group_by(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.group_by_cols.extend(columns.into_iter().map(Into::into));
        self
    }

    /// 原样拼接在 `HAVING` 之后，不做任何校验与转义。
    pub fn having(mut self, expr: impl Into<String>) -> Self {
        self.having_expr = Some(expr.into());
        self
    }

    pub fn order_by(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.order_by_cols.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn build(&self) -> Result<String> {
        let table = quote(&self.table)?;
        if self.select_cols.is_empty() {
            return Err(BuildError::empty("columns"));
        }
        let cols = quote_all(&self.select_cols)?;
        let where_expr = self.where_clause.build()?;
        let group_by = quote_all(&self.group_by_cols)?;
        let order_by = quote_all(&self.order_by_cols)?;

        let mut buf = StringBuilder::new();
        buf.write_clause("SELECT", &cols.join(", "));
        buf.write_clause("FROM", &table);
        buf.write_clause("WHERE", &where_expr);
        buf.write_clause("GROUP BY", &group_by.join(", "));
        if let Some(having) = &self.having_expr {
            buf.write_clause("HAVING", having.trim());
        }
        buf.write_clause("ORDER BY", &order_by.join(", "));
        if let Some(limit) = self.limit {
            buf.write_clause("LIMIT", &limit.to_string());
        }
        Ok(buf.into_string())
    }
}
