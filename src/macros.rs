//! 宏集合：用字面量形式书写按顺序排列的 `列名 => 值` 映射。

/// 构建一个 [`ValueMap`](crate::ValueMap)，保持书写顺序，值经由 `SqlValue::from` 转换。
///
/// ```
/// use uzisql::{SqlValue, values};
///
/// let m = values! { "name" => "mickey", "age" => 18, "nick" => None::<String> };
/// let cols: Vec<&str> = m.keys().map(String::as_str).collect();
/// assert_eq!(cols, ["name", "age", "nick"]);
/// assert_eq!(m["nick"], SqlValue::Null);
/// ```
#[macro_export]
macro_rules! values {
    () => {
        $crate::ValueMap::new()
    };
    ($($column:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::ValueMap::new();
        $(
            map.insert(::std::string::String::from($column), $crate::SqlValue::from($value));
        )+
        map
    }};
}
