//! 模板切分：把查询模板拆成字面量、占位符与条件块。
//!
//! 识别规则（从左到右）：
//! - `{ ... }`：条件块，到第一个 `}` 为止，内部恰好一个占位符，不允许嵌套；
//! - `?d` / `?f` / `?a` / `?#`：带类型的占位符；
//! - `?`：通用占位符；`?` 后跟其它字符时也按 `?` 处理，后面的字符留作字面量。

use crate::error::BuildError;
use crate::modifiers::Modifier;
use std::fmt;

/// 条件块 `{prefix<marker>suffix}`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conditional<'a> {
    pub prefix: &'a str,
    pub modifier: Modifier,
    pub suffix: &'a str,
}

/// 模板片段。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(Modifier),
    Conditional(Conditional<'a>),
}

impl Segment<'_> {
    /// 是否消耗一个位置参数。
    pub fn is_marker(&self) -> bool {
        !matches!(self, Self::Literal(_))
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.write_str(s),
            Self::Placeholder(m) => f.write_str(m.symbol()),
            Self::Conditional(c) => write!(f, "{{{}{}{}}}", c.prefix, c.modifier, c.suffix),
        }
    }
}

/// 解析后的模板，可重复用于不同的参数列表。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    source: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> Template<'a> {
    pub fn parse(source: &'a str) -> Result<Self, BuildError> {
        let bytes = source.as_bytes();
        let mut segments = Vec::new();
        let mut literal_start = 0usize;
        let mut i = 0usize;

        while i < bytes.len() {
            match bytes[i] {
                b'?' => {
                    push_literal(&mut segments, &source[literal_start..i]);
                    let (modifier, len) = marker_at(bytes, i);
                    segments.push(Segment::Placeholder(modifier));
                    i += len;
                    literal_start = i;
                }
                b'{' => {
                    push_literal(&mut segments, &source[literal_start..i]);
                    let Some(close) = source[i + 1..].find('}').map(|p| i + 1 + p) else {
                        return Err(BuildError::malformed(i, "unclosed `{`"));
                    };
                    let cond = parse_conditional(&source[i + 1..close], i + 1)?;
                    segments.push(Segment::Conditional(cond));
                    i = close + 1;
                    literal_start = i;
                }
                b'}' => return Err(BuildError::malformed(i, "unmatched `}`")),
                _ => i += 1,
            }
        }
        push_literal(&mut segments, &source[literal_start..]);

        Ok(Self { source, segments })
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// 需要的参数个数（占位符与条件块各算一个）。
    pub fn placeholder_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_marker()).count()
    }
}

impl<'a> TryFrom<&'a str> for Template<'a> {
    type Error = BuildError;

    fn try_from(source: &'a str) -> Result<Self, Self::Error> {
        Self::parse(source)
    }
}

impl fmt::Display for Template<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.segments {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

fn push_literal<'a>(segments: &mut Vec<Segment<'a>>, s: &'a str) {
    if !s.is_empty() {
        segments.push(Segment::Literal(s));
    }
}

/// `bytes[at] == b'?'`；返回修饰符与标记长度。
fn marker_at(bytes: &[u8], at: usize) -> (Modifier, usize) {
    match bytes.get(at + 1).copied().and_then(Modifier::from_suffix) {
        Some(m) => (m, 2),
        None => (Modifier::Base, 1),
    }
}

fn parse_conditional(body: &str, offset: usize) -> Result<Conditional<'_>, BuildError> {
    if let Some(p) = body.find('{') {
        return Err(BuildError::malformed(
            offset + p,
            "nested conditional blocks are not supported",
        ));
    }

    let mut marks = body.match_indices('?').map(|(p, _)| p);
    let Some(at) = marks.next() else {
        return Err(BuildError::malformed(
            offset,
            "conditional block without placeholder",
        ));
    };
    if let Some(extra) = marks.next() {
        return Err(BuildError::malformed(
            offset + extra,
            "conditional block with more than one placeholder",
        ));
    }

    let (modifier, len) = marker_at(body.as_bytes(), at);
    Ok(Conditional {
        prefix: &body[..at],
        modifier,
        suffix: &body[at + len..],
    })
}
