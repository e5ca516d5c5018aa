//! 拼接输出用的字符串缓冲。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            buf: String::with_capacity(n),
        }
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub(crate) fn write_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// 用 `sep` 连接 `items`，空串同样参与拼接。
    pub(crate) fn write_joined<S: AsRef<str>>(&mut self, items: &[S], sep: &str) {
        for (i, s) in items.iter().enumerate() {
            if i > 0 {
                self.buf.push_str(sep);
            }
            self.buf.push_str(s.as_ref());
        }
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}
