//! WhereClause：按插入顺序保存的等值过滤条件，条件之间以 AND 连接。

use crate::error::Result;
use crate::escape::{escape_value, quote};
use crate::string_builder::StringBuilder;
use crate::value::{SqlValue, ValueMap};

/// 只支持 `col = value` 形式的等值条件。
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WhereClause {
    filters: ValueMap,
}

impl WhereClause {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个等值条件；同名列保留首次出现的位置，值以最后一次为准。
    pub fn add(&mut self, column: impl Into<String>, value: impl Into<SqlValue>) {
        self.filters.insert(column.into(), value.into());
    }

    pub fn extend<K, V>(&mut self, filters: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<SqlValue>,
    {
        for (column, value) in filters {
            self.add(column, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// 生成 `WHERE` 之后的条件文本；没有条件时返回空字符串。
    pub fn build(&self) -> Result<String> {
        let exprs = self
            .filters
            .iter()
            .map(|(column, value)| -> Result<String> {
                Ok(format!("{} = {}", quote(column)?, escape_value(value)?))
            })
            .collect::<Result<Vec<_>>>()?;
        let mut buf = StringBuilder::new();
        buf.write_strings(&exprs, " AND ");
        Ok(buf.into_string())
    }
}

impl<K: Into<String>, V: Into<SqlValue>> FromIterator<(K, V)> for WhereClause {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut wc = Self::new();
        wc.extend(iter);
        wc
    }
}

#[cfg(test)]
mod tests {
    use super::WhereClause;
    use crate::error::ErrorKind;
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_clause_builds_nothing() {
        let wc = WhereClause::new();
        assert!(wc.is_empty());
        assert_eq!(wc.build().unwrap(), "");
    }

    #[test]
    fn predicates_joined_in_insertion_order() {
        let mut wc = WhereClause::new();
        wc.add("b", 1);
        wc.add("c", "x");
        wc.add("a", SqlValue::Null);
        assert_eq!(wc.build().unwrap(), "`b` = 1 AND `c` = 'x' AND `a` = NULL");
    }

    #[test]
    fn repeated_column_keeps_first_position() {
        let wc: WhereClause = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        assert_eq!(wc.len(), 2);
        assert_eq!(wc.build().unwrap(), "`a` = 3 AND `b` = 2");
    }

    #[test]
    fn unsupported_value_fails() {
        let mut wc = WhereClause::new();
        wc.add("flag", true);
        assert_eq!(wc.build().unwrap_err().kind(), ErrorKind::Type);
    }
}
