use miette::SourceSpan;
use serde::Serialize;

#[derive(Debug, PartialEq, Clone)]
pub struct BecDocument {
    pub root: Dictionary,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(untagged)]
pub enum BecValue {
    Number(i64),
    String(String),
    Dictionary(Dictionary),
}

impl BecValue {
    /// The value's kind as it is named in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            BecValue::Number(_) => "a number",
            BecValue::String(_) => "a string",
            BecValue::Dictionary(_) => "a dictionary",
        }
    }
}

/// A mapping from keys to values that keeps insertion order. Key order is
/// part of the document's meaning and survives into the JSON output, so a
/// sorted map will not do here.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Dictionary {
    entries: Vec<(String, BecValue)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. The parser rejects duplicate keys before calling
    /// this, so no existing entry is ever shadowed.
    pub fn insert(&mut self, key: String, value: BecValue) {
        self.entries.push((key, value));
    }

    pub fn get(&self, key: &str) -> Option<&BecValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BecValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
}

impl BinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
        }
    }
}

/// A constant expression as parsed between `|` delimiters. Every node keeps
/// the span of the source text it was read from.
#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Number {
        value: i64,
        span: SourceSpan,
    },
    StringLit {
        value: String,
        span: SourceSpan,
    },
    Name {
        name: String,
        span: SourceSpan,
    },
    Ord {
        arg: Box<Expr>,
        span: SourceSpan,
    },
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        span: SourceSpan,
    },
}

impl Expr {
    pub fn span(&self) -> SourceSpan {
        match self {
            Expr::Number { span, .. }
            | Expr::StringLit { span, .. }
            | Expr::Name { span, .. }
            | Expr::Ord { span, .. }
            | Expr::Binary { span, .. } => *span,
        }
    }
}
