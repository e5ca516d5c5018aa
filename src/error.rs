//! 模板构建错误。

use crate::modifiers::Modifier;
use crate::valuer::ValuerError;

/// `build_query` 的全部失败情形；任何一种都会中止整次构建，不返回部分结果。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// 模板中的占位符数量与传入参数数量不一致。
    #[error("query expect {expected} arguments but {passed} passed.")]
    ArgumentCountMismatch { expected: usize, passed: usize },

    /// 模板结构非法（未闭合/多余的花括号、条件块内占位符数量不为 1 等）。
    #[error("probably invalid query string at byte {position}: {reason}")]
    MalformedTemplate {
        position: usize,
        reason: &'static str,
    },

    /// 参数类型不被该占位符接受；`value` 是原始参数的诊断文本。
    #[error("Unexpected variable for modifier `{modifier}` -> passed `{value}`")]
    TypeMismatch { modifier: Modifier, value: String },

    /// `?a` 的某个元素无法按基础规则转换。
    #[error("Only scalar values supported in array for `?a` modifier.")]
    ArrayElementTypeMismatch {
        #[source]
        source: Box<BuildError>,
    },

    /// 没有对应转换规则的修饰符。
    #[error("Unexpected modifier: `{0}`")]
    UnknownModifier(String),

    #[error("{0}")]
    Valuer(#[from] ValuerError),
}

impl BuildError {
    pub(crate) fn malformed(position: usize, reason: &'static str) -> Self {
        Self::MalformedTemplate { position, reason }
    }

    pub(crate) fn mismatch(modifier: Modifier, value: impl ToString) -> Self {
        Self::TypeMismatch {
            modifier,
            value: value.to_string(),
        }
    }
}
