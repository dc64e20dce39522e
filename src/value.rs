//! SQL 标量值类型。

use indexmap::IndexMap;
use std::borrow::Cow;
use time::{OffsetDateTime, PrimitiveDateTime};

/// SQL 标量值。
///
/// `Bool` 与 `Bytes` 可以被表达，但没有对应的字面量，转义时会返回类型错误。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Cow<'static, str>),
    Bytes(Vec<u8>),
    DateTime(PrimitiveDateTime),
}

/// 按插入顺序保存的 `列名 -> 值` 映射，用于过滤条件与赋值列表。
pub type ValueMap = IndexMap<String, SqlValue>;

impl SqlValue {
    /// 将 `Option<T>` 映射为 `SqlValue`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<SqlValue>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// 类型名，用于错误信息。
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::I64(_) | Self::U64(_) => "integer",
            Self::F64(_) => "float",
            Self::String(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::DateTime(_) => "date-time",
        }
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        Self::from_option(v)
    }
}

impl From<()> for SqlValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u8> for SqlValue {
    fn from(v: u8) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u64> for SqlValue {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

/// 经由 `f32` 的最短十进制文本转换，避免 `5.1_f32` 变成 `5.099999904632568`。
impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::F64(v.to_string().parse().unwrap_or(v as f64))
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

/// 任意生命周期的 `&str` 都会被复制成自有字符串。
impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::String(Cow::Owned(v.to_owned()))
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<PrimitiveDateTime> for SqlValue {
    fn from(v: PrimitiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

/// 保留 `OffsetDateTime` 自身的日期与时刻，丢弃时区偏移。
impl From<OffsetDateTime> for SqlValue {
    fn from(v: OffsetDateTime) -> Self {
        Self::DateTime(PrimitiveDateTime::new(v.date(), v.time()))
    }
}
