//! 宏集合：用不定长、不同类型的参数直接构造参数列表或值。

/// 构造 `Vec<Arg>`：`args![1, "name", skip(), SqlValue::Null]`。
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($value)),+]
    };
}

/// 构造 `SqlValue::List`，元素可以是不同类型：`sql_list![1, "a", ()]`。
#[macro_export]
macro_rules! sql_list {
    ($($value:expr),* $(,)?) => {
        $crate::SqlValue::List(::std::vec![$($crate::SqlValue::from($value)),*])
    };
}

/// 构造保持书写顺序的 `SqlValue::Map`：`sql_map!{"a" => 1, "b" => "x"}`。
#[macro_export]
macro_rules! sql_map {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::SqlValue::Map(::std::vec![
            $((::std::string::String::from($key), $crate::SqlValue::from($value))),*
        ])
    };
}
