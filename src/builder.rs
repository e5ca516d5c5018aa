//! 解析模板并按位置代入参数，得到最终 SQL。

use crate::error::BuildError;
use crate::interpolate::encode_value;
use crate::modifiers::{Arg, Modifier, Skip, skip};
use crate::string_builder::StringBuilder;
use crate::template::{Segment, Template};

impl Template<'_> {
    /// 用 `args` 依次代入各占位符。
    ///
    /// 参数个数必须与 [`Template::placeholder_count`] 相同；任何一个参数转换失败都会
    /// 直接返回错误。条件块的参数为 [`Skip`] 时整个块（含花括号内的字面量）被省略。
    pub fn resolve(&self, args: &[Arg]) -> Result<String, BuildError> {
        let expected = self.placeholder_count();
        if expected != args.len() {
            return Err(BuildError::ArgumentCountMismatch {
                expected,
                passed: args.len(),
            });
        }

        let mut out = StringBuilder::with_capacity(self.source().len() + args.len() * 16);
        let mut args = args.iter();
        for segment in self.segments() {
            match segment {
                Segment::Literal(s) => out.write_str(s),
                Segment::Placeholder(m) => {
                    let arg = next_arg(&mut args, expected)?;
                    write_arg(&mut out, *m, arg)?;
                }
                Segment::Conditional(c) => {
                    let arg = next_arg(&mut args, expected)?;
                    if arg.is_skip() {
                        continue;
                    }
                    out.write_str(c.prefix);
                    write_arg(&mut out, c.modifier, arg)?;
                    out.write_str(c.suffix);
                }
            }
        }

        Ok(out.into_string())
    }
}

fn next_arg<'a>(
    args: &mut std::slice::Iter<'a, Arg>,
    expected: usize,
) -> Result<&'a Arg, BuildError> {
    let passed = args.len();
    args.next()
        .ok_or(BuildError::ArgumentCountMismatch { expected, passed })
}

fn write_arg(out: &mut StringBuilder, modifier: Modifier, arg: &Arg) -> Result<(), BuildError> {
    match arg {
        Arg::Value(v) => encode_value(out, modifier, v),
        Arg::Valuer(v) => {
            let vv = v.value()?;
            encode_value(out, modifier, &vv)
        }
        Arg::Skip(s) => Err(BuildError::mismatch(modifier, s)),
    }
}

/// 解析 `query` 并代入 `args`，返回完整 SQL。
pub fn build_query(
    query: &str,
    args: impl IntoIterator<Item = impl Into<Arg>>,
) -> Result<String, BuildError> {
    let template = Template::parse(query)?;
    let args: Vec<Arg> = args.into_iter().map(Into::into).collect();
    template.resolve(&args)
}

/// 持有外部注入的连接句柄的查询构建器。
///
/// 连接只被保存以便调用方取回，构建查询不会访问它。
#[derive(Debug, Clone, Default)]
pub struct Database<C> {
    conn: C,
}

impl<C> Database<C> {
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &C {
        &self.conn
    }

    pub fn into_connection(self) -> C {
        self.conn
    }

    /// 见 [`build_query`]。
    pub fn build_query(
        &self,
        query: &str,
        args: impl IntoIterator<Item = impl Into<Arg>>,
    ) -> Result<String, BuildError> {
        build_query(query, args)
    }

    /// 返回用于省略条件块的 skip 哨兵。
    pub fn skip(&self) -> Skip {
        skip()
    }
}
