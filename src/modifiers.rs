//! 占位符修饰符、skip 哨兵与动态参数类型。

use crate::error::BuildError;
use crate::value::SqlValue;
use crate::valuer::SqlValuer;
use std::fmt;

/// 占位符种类，对应模板里的 `?d` / `?f` / `?#` / `?a` / `?`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `?d`
    Int,
    /// `?f`
    Float,
    /// `?#`
    Identifier,
    /// `?a`
    Array,
    /// `?`
    Base,
}

impl Modifier {
    pub const ALL: [Modifier; 5] = [
        Self::Int,
        Self::Float,
        Self::Identifier,
        Self::Array,
        Self::Base,
    ];

    /// 模板中的写法。
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Int => "?d",
            Self::Float => "?f",
            Self::Identifier => "?#",
            Self::Array => "?a",
            Self::Base => "?",
        }
    }

    /// `?` 之后的后缀字符；不是已知后缀时返回 `None`（按 `?` 处理）。
    pub(crate) fn from_suffix(c: u8) -> Option<Self> {
        match c {
            b'd' => Some(Self::Int),
            b'f' => Some(Self::Float),
            b'#' => Some(Self::Identifier),
            b'a' => Some(Self::Array),
            _ => None,
        }
    }

    /// 按完整写法查找修饰符。
    pub fn from_symbol(symbol: &str) -> Result<Self, BuildError> {
        Self::ALL
            .into_iter()
            .find(|m| m.symbol() == symbol)
            .ok_or_else(|| BuildError::UnknownModifier(symbol.to_string()))
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// skip 哨兵：作为条件块 `{...}` 的参数时，整个块被省略。
///
/// 它不是 `NULL`；传给普通占位符会得到该占位符的类型错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Skip;

/// 全局唯一的 skip 值。
pub const SKIP: Skip = Skip;

/// 返回 skip 哨兵。
pub fn skip() -> Skip {
    SKIP
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<skip>")
    }
}

/// `build_query` 使用的位置参数。
#[derive(Clone)]
pub enum Arg {
    Value(SqlValue),
    Valuer(Box<dyn SqlValuer>),
    Skip(Skip),
}

impl Arg {
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip(_))
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Valuer(_) => f.write_str("Valuer(..)"),
            Self::Skip(_) => f.write_str("Skip"),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{v}"),
            Self::Valuer(_) => f.write_str("<valuer>"),
            Self::Skip(s) => write!(f, "{s}"),
        }
    }
}

impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Skip(_), Self::Skip(_)) => true,
            _ => false,
        }
    }
}

impl From<Skip> for Arg {
    fn from(v: Skip) -> Self {
        Self::Skip(v)
    }
}

impl From<Box<dyn SqlValuer>> for Arg {
    fn from(v: Box<dyn SqlValuer>) -> Self {
        Self::Valuer(v)
    }
}

impl From<SqlValue> for Arg {
    fn from(v: SqlValue) -> Self {
        Self::Value(v)
    }
}

macro_rules! arg_from_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Arg {
                fn from(v: $t) -> Self {
                    SqlValue::from(v).into()
                }
            }
        )*
    };
}

arg_from_value!(
    (),
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    &'static str,
);

impl<T: Into<SqlValue>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        SqlValue::from_option(v).into()
    }
}

impl<T: Into<SqlValue>> From<Vec<T>> for Arg {
    fn from(v: Vec<T>) -> Self {
        SqlValue::list(v).into()
    }
}

impl<T: Into<SqlValue>, const N: usize> From<[T; N]> for Arg {
    fn from(v: [T; N]) -> Self {
        SqlValue::list(v).into()
    }
}
