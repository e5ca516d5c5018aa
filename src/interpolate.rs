//! 值转换：按占位符种类把参数值写成 SQL 字面量。
//!
//! 安全警告：字符串只做单引号包裹，不做任何转义；本库不是参数绑定的替代品。

use crate::error::BuildError;
use crate::modifiers::Modifier;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

impl Modifier {
    /// 按本修饰符的规则转换单个值。
    ///
    /// 浮点数按 `Display` 输出：`1e300` 会展开成完整的十进制数字，`NaN`/`inf` 原样输出，
    /// 都不是合法的 SQL 字面量，需要调用方自行避免。
    pub fn encode(self, value: &SqlValue) -> Result<String, BuildError> {
        let mut out = StringBuilder::default();
        encode_value(&mut out, self, value)?;
        Ok(out.into_string())
    }
}

pub(crate) fn encode_value(
    out: &mut StringBuilder,
    modifier: Modifier,
    value: &SqlValue,
) -> Result<(), BuildError> {
    match modifier {
        Modifier::Int => encode_int(out, value),
        Modifier::Float => encode_float(out, value),
        Modifier::Identifier => encode_identifiers(out, value),
        Modifier::Array => encode_array(out, value),
        Modifier::Base => encode_base(out, value),
    }
}

fn encode_int(out: &mut StringBuilder, value: &SqlValue) -> Result<(), BuildError> {
    let n = match value {
        SqlValue::Null => {
            out.write_str("NULL");
            return Ok(());
        }
        SqlValue::U64(n) => {
            out.write_str(&n.to_string());
            return Ok(());
        }
        SqlValue::Bool(b) => Some(i64::from(*b)),
        SqlValue::I64(n) => Some(*n),
        SqlValue::F64(f) => integral(*f),
        SqlValue::String(s) => match parse_numeric(s) {
            Some(Numeric::Int(n)) => Some(n),
            Some(Numeric::Float(f)) => integral(f),
            None => None,
        },
        SqlValue::List(_) | SqlValue::Map(_) => None,
    };
    let n = n.ok_or_else(|| BuildError::mismatch(Modifier::Int, value))?;
    out.write_str(&n.to_string());
    Ok(())
}

// 浮点数原样输出；布尔与数字字符串按整数截断输出。
fn encode_float(out: &mut StringBuilder, value: &SqlValue) -> Result<(), BuildError> {
    match value {
        SqlValue::Null => out.write_str("NULL"),
        SqlValue::F64(f) => out.write_str(&f.to_string()),
        SqlValue::Bool(b) => out.write_char(if *b { '1' } else { '0' }),
        SqlValue::I64(n) => out.write_str(&n.to_string()),
        SqlValue::U64(n) => out.write_str(&n.to_string()),
        SqlValue::String(s) => {
            let n = match parse_numeric(s) {
                Some(Numeric::Int(n)) => Some(n),
                // 超出 i64 范围时饱和截断
                Some(Numeric::Float(f)) => Some(f.trunc() as i64),
                None => None,
            }
            .ok_or_else(|| BuildError::mismatch(Modifier::Float, value))?;
            out.write_str(&n.to_string());
        }
        SqlValue::List(_) | SqlValue::Map(_) => {
            return Err(BuildError::mismatch(Modifier::Float, value));
        }
    }
    Ok(())
}

// 列表整体只包一对反引号，元素之间用 "`, `" 连接。
fn encode_identifiers(out: &mut StringBuilder, value: &SqlValue) -> Result<(), BuildError> {
    match value {
        SqlValue::String(s) => {
            out.write_char('`');
            out.write_str(s);
            out.write_char('`');
        }
        SqlValue::List(items) => {
            let names = items
                .iter()
                .map(|v| match v {
                    SqlValue::String(s) => Some(&**s),
                    _ => None,
                })
                .collect::<Option<Vec<&str>>>()
                .ok_or_else(|| BuildError::mismatch(Modifier::Identifier, value))?;
            out.write_char('`');
            out.write_joined(&names, "`, `");
            out.write_char('`');
        }
        _ => return Err(BuildError::mismatch(Modifier::Identifier, value)),
    }
    Ok(())
}

fn encode_array(out: &mut StringBuilder, value: &SqlValue) -> Result<(), BuildError> {
    match value {
        SqlValue::List(items) => {
            for (i, v) in items.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ");
                }
                encode_base(out, v).map_err(in_array)?;
            }
        }
        SqlValue::Map(entries) => {
            for (i, (k, v)) in entries.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ");
                }
                out.write_char('`');
                out.write_str(k);
                out.write_str("` = ");
                encode_base(out, v).map_err(in_array)?;
            }
        }
        _ => return Err(BuildError::mismatch(Modifier::Array, value)),
    }
    Ok(())
}

fn in_array(e: BuildError) -> BuildError {
    BuildError::ArrayElementTypeMismatch {
        source: Box::new(e),
    }
}

fn encode_base(out: &mut StringBuilder, value: &SqlValue) -> Result<(), BuildError> {
    match value {
        SqlValue::String(s) => {
            out.write_char('\'');
            out.write_str(s);
            out.write_char('\'');
        }
        SqlValue::I64(n) => out.write_str(&n.to_string()),
        SqlValue::U64(n) => out.write_str(&n.to_string()),
        SqlValue::F64(f) => out.write_str(&f.to_string()),
        SqlValue::Bool(b) => out.write_char(if *b { '1' } else { '0' }),
        SqlValue::Null => out.write_str("NULL"),
        SqlValue::List(_) | SqlValue::Map(_) => {
            return Err(BuildError::mismatch(Modifier::Base, value));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Numeric {
    Int(i64),
    Float(f64),
}

/// 数字字符串：可带首尾空白、符号、小数点与指数；不接受 `inf`/`nan`/十六进制。
fn parse_numeric(s: &str) -> Option<Numeric> {
    let t = s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'));
    let bytes = t.as_bytes();
    if !bytes.iter().any(u8::is_ascii_digit)
        || !bytes
            .iter()
            .all(|&b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    if let Ok(n) = t.parse::<i64>() {
        return Some(Numeric::Int(n));
    }
    t.parse::<f64>().ok().map(Numeric::Float)
}

const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

fn truncated(f: f64) -> Option<i64> {
    let t = f.trunc();
    (t.is_finite() && (-I64_BOUND..I64_BOUND).contains(&t)).then_some(t as i64)
}

fn integral(f: f64) -> Option<i64> {
    truncated(f).filter(|&n| n as f64 == f)
}
