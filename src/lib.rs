//! halo-query-template：带类型占位符与条件块的 SQL 模板拼接库。
//!
//! ```
//! use halo_space::{args, build_query, skip};
//!
//! let sql = build_query("SELECT ?# FROM t{ WHERE id = ?d}", args!["name", skip()]).unwrap();
//! assert_eq!(sql, "SELECT `name` FROM t");
//! ```

pub mod builder;
pub mod error;
pub mod interpolate;
#[cfg(test)]
mod interpolate_tests;
pub mod macros;
#[cfg(test)]
mod macros_tests;
pub mod modifiers;
pub(crate) mod string_builder;
pub mod template;
pub mod value;
pub mod valuer;

pub use crate::builder::{Database, build_query};
pub use crate::error::BuildError;
pub use crate::modifiers::{Arg, Modifier, SKIP, Skip, skip};
pub use crate::template::{Conditional, Segment, Template};
pub use crate::value::SqlValue;
pub use crate::valuer::{FnValuer, SqlValuer, ValuerError, lazy};

/// 便捷命名空间：允许 `use halo_space::query::{...}` 形式导入。
pub mod query {
    pub use crate::*;
}
