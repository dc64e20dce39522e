//! 标识符 Quote 与字面量转义：所有语句构建都经由这里产出 SQL 片段。
//!
//! 安全警告：文本值只做首尾去空白与单引号包裹，内部的 `'` 与 `\` 不会被转义；
//! 不要把不可信输入直接交给本模块。

use crate::error::{BuildError, Result};
use crate::value::SqlValue;
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATE_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// 去掉首尾空白后用反引号包裹标识符。
///
/// ```
/// assert_eq!(uzisql::quote("  name ").unwrap(), "`name`");
/// ```
pub fn quote(ident: &str) -> Result<String> {
    let ident = ident.trim();
    if ident.is_empty() {
        return Err(BuildError::empty("identifier"));
    }
    Ok(format!("`{ident}`"))
}

/// 批量 Quote，保持原有顺序与长度。
pub fn quote_all(idents: impl IntoIterator<Item = impl AsRef<str>>) -> Result<Vec<String>> {
    idents.into_iter().map(|s| quote(s.as_ref())).collect()
}

/// 把一个标量转成 SQL 字面量。
///
/// - `Null` => `NULL`
/// - 整数与浮点数 => 十进制文本，不加引号
/// - 文本 => 去掉首尾空白后加单引号（不转义内部引号）
/// - 日期时间 => `'YYYY-MM-DD HH:MM:SS'`
///
/// `Bool`、`Bytes` 返回类型错误；NaN 与无穷大返回取值错误。
pub fn escape(value: impl Into<SqlValue>) -> Result<String> {
    escape_value(&value.into())
}

/// 批量转义；任意一个元素失败则整体失败。单个标量直接使用 [`escape`]。
pub fn escape_all(values: impl IntoIterator<Item = impl Into<SqlValue>>) -> Result<Vec<String>> {
    values.into_iter().map(escape).collect()
}

pub(crate) fn escape_value(value: &SqlValue) -> Result<String> {
    match value {
        SqlValue::Null => Ok("NULL".to_string()),
        SqlValue::I64(n) => Ok(n.to_string()),
        SqlValue::U64(n) => Ok(n.to_string()),
        SqlValue::F64(n) if n.is_finite() => Ok(n.to_string()),
        SqlValue::F64(n) => Err(BuildError::NonFinite(n.to_string())),
        SqlValue::String(s) => Ok(format!("'{}'", s.trim())),
        SqlValue::DateTime(dt) => format_date_time(dt),
        SqlValue::Bool(_) | SqlValue::Bytes(_) => Err(BuildError::UnsupportedType {
            type_name: value.type_name(),
        }),
    }
}

fn format_date_time(dt: &PrimitiveDateTime) -> Result<String> {
    let s = dt
        .format(DATE_TIME_FORMAT)
        .map_err(|e| BuildError::DateTimeFormat(e.to_string()))?;
    Ok(format!("'{s}'"))
}

#[cfg(test)]
mod tests {
    use super::{escape, escape_all, quote, quote_all};
    use crate::error::{BuildError, ErrorKind};
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    #[test]
    fn quote_trims_and_wraps() {
        assert_eq!(quote("name").unwrap(), "`name`");
        assert_eq!(quote("  name  ").unwrap(), "`name`");
        assert_eq!(quote("\tuser_profile\n").unwrap(), "`user_profile`");
    }

    #[test]
    fn quote_rejects_blank_identifier() {
        let err = quote("   ").unwrap_err();
        assert_eq!(err, BuildError::Empty { what: "identifier" });
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn quote_all_keeps_order_and_length() {
        assert_eq!(quote_all(["a", "b"]).unwrap(), vec!["`a`", "`b`"]);
        assert_eq!(
            quote_all(vec![String::from(" z "), String::from("y")]).unwrap(),
            vec!["`z`", "`y`"]
        );
        assert!(quote_all(Vec::<&str>::new()).unwrap().is_empty());
        assert!(quote_all(["a", ""]).is_err());
    }

    #[test]
    fn escape_scalars() {
        assert_eq!(escape(SqlValue::Null).unwrap(), "NULL");
        assert_eq!(escape(None::<i64>).unwrap(), "NULL");
        assert_eq!(escape(5).unwrap(), "5");
        assert_eq!(escape(-42_i64).unwrap(), "-42");
        assert_eq!(escape(u64::MAX).unwrap(), "18446744073709551615");
        assert_eq!(escape(5.5).unwrap(), "5.5");
        assert_eq!(escape(5.1_f32).unwrap(), "5.1");
        assert_eq!(escape(0.1_f32).unwrap(), "0.1");
        assert_eq!(escape("x").unwrap(), "'x'");
        assert_eq!(escape("  padded ").unwrap(), "'padded'");
    }

    #[test]
    fn escape_date_time() {
        assert_eq!(
            escape(datetime!(2024-01-02 03:04:05)).unwrap(),
            "'2024-01-02 03:04:05'"
        );
        assert_eq!(
            escape(datetime!(2024-12-31 23:59:59.999)).unwrap(),
            "'2024-12-31 23:59:59'"
        );
        assert_eq!(
            escape(datetime!(2024-01-02 03:04:05 -5)).unwrap(),
            "'2024-01-02 03:04:05'"
        );
    }

    #[test]
    fn escape_leaves_embedded_quotes_untouched() {
        assert_eq!(escape("O'Brien").unwrap(), "'O'Brien'");
        assert_eq!(escape(r"a\b").unwrap(), r"'a\b'");
    }

    #[test]
    fn escape_rejects_unsupported_types() {
        let err = escape(true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(
            escape(vec![0_u8, 1]).unwrap_err(),
            BuildError::UnsupportedType { type_name: "bytes" }
        );
    }

    #[test]
    fn escape_rejects_non_finite() {
        assert_eq!(escape(f64::NAN).unwrap_err().kind(), ErrorKind::Value);
        assert!(escape(f64::INFINITY).is_err());
    }

    #[test]
    fn escape_all_elementwise() {
        let values = vec![SqlValue::from(1), SqlValue::from("a"), SqlValue::Null];
        assert_eq!(escape_all(values).unwrap(), vec!["1", "'a'", "NULL"]);
        assert_eq!(escape_all([1.5, 2.0]).unwrap(), vec!["1.5", "2"]);
        assert!(escape_all([SqlValue::from(1), SqlValue::from(false)]).is_err());
    }
}
