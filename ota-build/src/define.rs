use std::borrow::Cow;
use std::fmt::Write;

/// How a raw value turns into macro replacement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefineKind {
    /// `dev` becomes `"dev"`
    Stringified,
    /// `2` stays `2`
    Raw,
}

/// One preprocessor definition handed to the downstream compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    name: String,
    raw: String,
    kind: DefineKind,
}

impl Define {
    pub fn new(name: impl Into<String>, raw: impl Into<String>, kind: DefineKind) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
            kind,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// The value as it was read from the environment.
    pub fn raw(&self) -> &str {
        &self.raw
    }
    pub fn kind(&self) -> DefineKind {
        self.kind
    }
    /// Macro replacement text.
    pub fn value(&self) -> Cow<'_, str> {
        match self.kind {
            DefineKind::Stringified => Cow::Owned(stringify_macro(&self.raw)),
            DefineKind::Raw => Cow::Borrowed(&self.raw),
        }
    }
    /// `-DNAME=value`, as a single argument (not shell quoted).
    pub fn compiler_flag(&self) -> String {
        format!("-D{}={}", self.name, self.value())
    }
    /// `#define NAME value`
    pub fn header_line(&self) -> String {
        format!("#define {} {}", self.name, self.value())
    }
}

/// Turn `value` into a C string literal.
pub fn stringify_macro(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => {
                // octal keeps the escape from swallowing following hex digits
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
