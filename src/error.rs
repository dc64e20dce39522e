//! 构建错误：类型不支持（Type）与取值非法（Value）两类。

/// 错误分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 参数类型没有对应的 SQL 表示。
    Type,
    /// 参数类型正确，但取值非法（例如空列表）。
    Value,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("unsupported argument type: {type_name}")]
    UnsupportedType { type_name: &'static str },
    #[error("{what} cannot be empty")]
    Empty { what: &'static str },
    #[error("non-finite number has no sql literal: {0}")]
    NonFinite(String),
    #[error("date-time formatting failed: {0}")]
    DateTimeFormat(String),
}

impl BuildError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedType { .. } => ErrorKind::Type,
            Self::Empty { .. } | Self::NonFinite(_) | Self::DateTimeFormat(_) => ErrorKind::Value,
        }
    }

    pub(crate) fn empty(what: &'static str) -> Self {
        Self::Empty { what }
    }
}

pub type Result<T, E = BuildError> = std::result::Result<T, E>;
