//! 子句拼接工具：子句之间恰好一个空格，缺省子句不留痕迹。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn new() -> Self {
        Self { buf: String::new() }
    }

    /// 写入 `s`；如果不是首次写入，会先写入一个空格。
    pub(crate) fn write_leading(&mut self, s: &str) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(s);
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// 写入 `KEYWORD body`；`body` 为空时整个子句被跳过。
    pub(crate) fn write_clause(&mut self, keyword: &str, body: &str) {
        if body.is_empty() {
            return;
        }
        self.write_leading(keyword);
        self.buf.push(' ');
        self.buf.push_str(body);
    }

    /// 以 `sep` 连接非空片段写入。
    pub(crate) fn write_strings(&mut self, items: &[String], sep: &str) {
        let mut first_added = false;
        for s in items {
            if s.is_empty() {
                continue;
            }
            if first_added {
                self.buf.push_str(sep);
            }
            self.buf.push_str(s);
            first_added = true;
        }
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}
