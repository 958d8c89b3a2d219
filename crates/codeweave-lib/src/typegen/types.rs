//! TypeScript type model produced by the synthesizer.

/// A TypeScript type expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TsType {
    /// `string`, `number`, `boolean`, `any`, `null`
    Keyword(&'static str),
    /// `T[]`
    Array(Box<TsType>),
    /// `A | B`
    Union(Vec<TsType>),
    /// Inline type literal.
    Object(Vec<Member>),
    /// `{ [key: string]: T }`
    Index { key: String, value: Box<TsType> },
    /// Named type, used for circular relations.
    Reference(String),
}

impl TsType {
    /// `self | null`
    pub fn nullable(self) -> Self {
        TsType::Union(vec![self, TsType::Keyword("null")])
    }

    pub fn is_union(&self) -> bool {
        matches!(self, TsType::Union(_))
    }
}

/// A property signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub ty: TsType,
    pub optional: bool,
}

impl Member {
    pub fn new(name: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
        }
    }

    pub fn optional(mut self, value: bool) -> Self {
        self.optional = value;
        self
    }
}

/// An `interface` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub members: Vec<Member>,
}
