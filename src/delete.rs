//! DeleteBuilder：构建单表 DELETE 语句。

use crate::error::Result;
use crate::escape::{quote, quote_all};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;
use crate::where_clause::WhereClause;

/// 不带任何过滤条件时会生成删除整表的语句，调用方需自行确认。
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteBuilder {
    table: String,
    where_clause: WhereClause,
    order_by_cols: Vec<String>,
    limit: Option<u64>,
}

/// `delete(table)` 的快捷入口。
///
/// ```
/// let sql = uzisql::delete("user_profile")
///     .filters(uzisql::values! { "sex" => "F", "age" => 18 })
///     .limit(10)
///     .build()
///     .unwrap();
/// assert_eq!(sql, "DELETE FROM `user_profile` WHERE `sex` = 'F' AND `age` = 18 LIMIT 10");
/// ```
pub fn delete(table: impl Into<String>) -> DeleteBuilder {
    DeleteBuilder::new(table)
}

impl DeleteBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            where_clause: WhereClause::new(),
            order_by_cols: Vec::new(),
            limit: None,
        }
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
        let where_expr = self.where_clause.build()?;
        let order_by = quote_all(&self.order_by_cols)?;

        let mut buf = StringBuilder::new();
        buf.write_clause("DELETE FROM", &table);
        buf.write_clause("WHERE", &where_expr);
        buf.write_clause("ORDER BY", &order_by.join(", "));
        if let Some(limit) = self.limit {
            buf.write_clause("LIMIT", &limit.to_string());
        }
        Ok(buf.into_string())
    }
}
