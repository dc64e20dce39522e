//! InsertBuilder：构建单行 INSERT 语句。

use crate::error::{BuildError, Result};
use crate::escape::{escape_value, quote};
use crate::string_builder::StringBuilder;
use crate::value::{SqlValue, ValueMap};

/// 单行 INSERT；列名列表与值列表始终按同一顺序输出。
#[derive(Debug, Clone, PartialEq)]
pub struct InsertBuilder {
    table: String,
    values: ValueMap,
}

/// `insert(table, columns)` 的快捷入口。
///
/// ```
/// let sql = uzisql::insert("user_profile", uzisql::values! { "name" => "mickey", "age" => 18 })
///     .build()
///     .unwrap();
/// assert_eq!(sql, "INSERT INTO `user_profile`(`name`, `age`) VALUES ('mickey', 18)");
/// ```
pub fn insert<K, V>(
    table: impl Into<String>,
    columns: impl IntoIterator<Item = (K, V)>,
) -> InsertBuilder
where
    K: Into<String>,
    V: Into<SqlValue>,
{
    InsertBuilder::new(table).values(columns)
}

impl InsertBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            values: ValueMap::new(),
        }
    }

    /// 追加一列；同名列保留首次出现的位置，值以最后一次为准。
    pub fn value(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.values.insert(column.into(), value.into());
        self
    }

    pub fn values<K, V>(mut self, columns: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<SqlValue>,
    {
        for (column, value) in columns {
            self.values.insert(column.into(), value.into());
        }
        self
    }

    pub fn build(&self) -> Result<String> {
        let table = quote(&self.table)?;
        if self.values.is_empty() {
            return Err(BuildError::empty("columns"));
        }

        let mut cols = Vec::with_capacity(self.values.len());
        let mut vals = Vec::with_capacity(self.values.len());
        for (column, value) in &self.values {
            cols.push(quote(column)?);
            vals.push(escape_value(value)?);
        }

        let mut buf = StringBuilder::new();
        buf.write_leading("INSERT INTO");
        buf.write_leading(&table);
        buf.write_str("(");
        buf.write_str(&cols.join(", "));
        buf.write_str(")");
        buf.write_clause("VALUES", &format!("({})", vals.join(", ")));
        Ok(buf.into_string())
    }
}
