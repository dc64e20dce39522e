//! uzisql：无状态的 SQL 语句拼接库。
//!
//! 所有标识符经由 [`quote`] 加反引号，所有值经由 [`escape`] 转成字面量，
//! 再由 [`select`] / [`insert`] / [`update`] / [`delete`] 按固定顺序拼出完整语句。
//! 本库不连接数据库，也不做参数绑定。

pub mod delete;
pub mod error;
pub mod escape;
pub mod insert;
pub mod macros;
pub mod select;
mod string_builder;
pub mod update;
pub mod value;
pub mod where_clause;

pub use crate::delete::{DeleteBuilder, delete};
pub use crate::error::{BuildError, ErrorKind, Result};
pub use crate::escape::{escape, escape_all, quote, quote_all};
pub use crate::insert::{InsertBuilder, insert};
pub use crate::select::{SelectBuilder, select};
pub use crate::update::{UpdateBuilder, update};
pub use crate::value::{SqlValue, ValueMap};
pub use crate::where_clause::WhereClause;

/// 推荐的便捷命名空间：允许 `use uzisql::sqlbuilder::{...}` 形式导入。
pub mod sqlbuilder {
    pub use crate::*;
}
