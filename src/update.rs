//! UpdateBuilder：构建单表 UPDATE 语句。

use crate::error::{BuildError, Result};
use crate::escape::{escape_value, quote, quote_all};
use crate::string_builder::StringBuilder;
use crate::value::{SqlValue, ValueMap};
use crate::where_clause::WhereClause;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBuilder {
    table: String,
    assignments: ValueMap,
    where_clause: WhereClause,
    order_by_cols: Vec<String>,
    limit: Option<u64>,
}

/// `update(table, columns)` 的快捷入口。
///
/// ```
/// let sql = uzisql::update("user_profile", [("sex", "F")])
///     .filter("name", "minnie")
///     .build()
///     .unwrap();
/// assert_eq!(sql, "UPDATE `user_profile` SET `sex` = 'F' WHERE `name` = 'minnie'");
/// ```
pub fn update<K, V>(
    table: impl Into<String>,
    columns: impl IntoIterator<Item = (K, V)>,
) -> UpdateBuilder
where
    K: Into<String>,
    V: Into<SqlValue>,
{
    UpdateBuilder::new(table).set_more(columns)
}

impl UpdateBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            assignments: ValueMap::new(),
            where_clause: WhereClause::new(),
            order_by_cols: Vec::new(),
            limit: None,
        }
    }

    /// 追加一个 `col = value` 赋值。
    pub fn set(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.assignments.insert(column.into(), value.into());
        self
    }

    pub fn set_more<K, V>(mut self, columns: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<SqlValue>,
    {
        for (column, value) in columns {
            self.assignments.insert(column.into(), value.into());
        }
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
        if self.assignments.is_empty() {
            return Err(BuildError::empty("columns assignment"));
        }
        let assigns = self
            .assignments
            .iter()
            .map(|(column, value)| -> Result<String> {
                Ok(format!("{} = {}", quote(column)?, escape_value(value)?))
            })
            .collect::<Result<Vec<_>>>()?;
        let where_expr = self.where_clause.build()?;
        let order_by = quote_all(&self.order_by_cols)?;

        let mut buf = StringBuilder::new();
        buf.write_clause("UPDATE", &table);
        buf.write_clause("SET", &assigns.join(", "));
        buf.write_clause("WHERE", &where_expr);
        buf.write_clause("ORDER BY", &order_by.join(", "));
        if let Some(limit) = self.limit {
            buf.write_clause("LIMIT", &limit.to_string());
        }
        Ok(buf.into_string())
    }
}
