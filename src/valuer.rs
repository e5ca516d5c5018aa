//! SqlValuer：在解析占位符时才计算实际值的参数。
//!
//! 值在其占位符被解析的那一刻求值一次；求值失败会中止整个 `build_query`。

use crate::value::SqlValue;

/// Valuer 错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("template valuer error: {0}")]
pub struct ValuerError(pub String);

/// 可在解析阶段动态计算实际值的 trait。
pub trait SqlValuer: dyn_clone::DynClone + std::fmt::Debug {
    fn value(&self) -> Result<SqlValue, ValuerError>;
}

dyn_clone::clone_trait_object!(SqlValuer);

/// 用闭包实现的 valuer，见 [`lazy`]。
#[derive(Clone)]
pub struct FnValuer<F> {
    f: F,
}

impl<F> std::fmt::Debug for FnValuer<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnValuer(..)")
    }
}

impl<F> SqlValuer for FnValuer<F>
where
    F: Fn() -> Result<SqlValue, ValuerError> + Clone,
{
    fn value(&self) -> Result<SqlValue, ValuerError> {
        (self.f)()
    }
}

/// 把闭包包装成延迟求值的参数。
pub fn lazy<F>(f: F) -> Box<dyn SqlValuer>
where
    F: Fn() -> Result<SqlValue, ValuerError> + Clone + 'static,
{
    Box::new(FnValuer { f })
}
