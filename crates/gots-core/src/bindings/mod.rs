//! Intermediate TypeScript declaration graph.
//!
//! Nodes are plain owned values. A node never shares a child with another
//! node, so a pass that rewrites one expression cannot reach into a sibling.

mod walk;

#[cfg(test)]
mod bindings_tests;

pub use walk::{walk_declaration_mut, walk_expression_mut};

use std::fmt;

/// A name in the generated namespace.
///
/// `package` is the Go import path the name comes from; builtins and type
/// parameters have none. The emitted name is `prefix + name`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Identifier {
    pub name: String,
    pub package: Option<String>,
    pub prefix: String,
}

impl Identifier {
    /// An identifier that belongs to no package.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            prefix: String::new(),
        }
    }

    pub fn qualified(
        package: impl Into<String>,
        name: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            package: Some(package.into()),
            prefix: prefix.into(),
        }
    }

    /// Name used in the generated code and as the store key.
    pub fn reference(&self) -> String {
        format!("{}{}", self.prefix, self.name)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    Export,
    Readonly,
    Declare,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Modifier::Export => "export",
            Modifier::Readonly => "readonly",
            Modifier::Declare => "declare",
        }
    }
}

/// Primitive type keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Void,
    Any,
    Boolean,
    Number,
    String,
    Undefined,
    Unknown,
    Never,
    BigInt,
    Object,
    Symbol,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Void => "void",
            Keyword::Any => "any",
            Keyword::Boolean => "boolean",
            Keyword::Number => "number",
            Keyword::String => "string",
            Keyword::Undefined => "undefined",
            Keyword::Unknown => "unknown",
            Keyword::Never => "never",
            Keyword::BigInt => "bigint",
            Keyword::Object => "object",
            Keyword::Symbol => "symbol",
        }
    }
}

/// Constant value carried by a literal type.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl LiteralValue {
    /// Two literals of the same kind can share an enum value list.
    pub fn same_kind(&self, other: &LiteralValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorKeyword {
    Readonly,
    Unique,
    KeyOf,
}

impl OperatorKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            OperatorKeyword::Readonly => "readonly",
            OperatorKeyword::Unique => "unique",
            OperatorKeyword::KeyOf => "keyof",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reference {
    pub name: Identifier,
    pub args: Vec<Expression>,
}

/// Type-level expressions.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Keyword(Keyword),
    Literal(LiteralValue),
    Reference(Reference),
    Array(Box<Expression>),
    Tuple { elem: Box<Expression>, length: usize },
    ArrayLiteral(Vec<Expression>),
    Union(Vec<Expression>),
    Intersection(Vec<Expression>),
    Null,
    Operator {
        keyword: OperatorKeyword,
        inner: Box<Expression>,
    },
    TypeLiteral(Vec<PropertySignature>),
}

impl Expression {
    pub fn keyword(keyword: Keyword) -> Self {
        Expression::Keyword(keyword)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::Literal(LiteralValue::String(value.into()))
    }

    pub fn reference(name: Identifier, args: Vec<Expression>) -> Self {
        Expression::Reference(Reference { name, args })
    }

    /// Reference to a name outside any package, such as `Record`.
    pub fn builtin(name: &str, args: Vec<Expression>) -> Self {
        Expression::reference(Identifier::new(name), args)
    }

    pub fn array(elem: Expression) -> Self {
        Expression::Array(Box::new(elem))
    }

    pub fn union(members: Vec<Expression>) -> Self {
        Expression::Union(members)
    }

    pub fn nullable(inner: Expression) -> Self {
        Expression::Union(vec![inner, Expression::Null])
    }

    pub fn readonly(inner: Expression) -> Self {
        Expression::Operator {
            keyword: OperatorKeyword::Readonly,
            inner: Box::new(inner),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Expression::Null)
    }

    /// Reference name if this is `Name<...>`.
    pub fn reference_name(&self) -> Option<&Identifier> {
        match self {
            Expression::Reference(r) => Some(&r.name),
            _ => None,
        }
    }

    /// Direct children, in source order.
    pub fn children_mut(&mut self) -> Vec<&mut Expression> {
        match self {
            Expression::Keyword(_) | Expression::Literal(_) | Expression::Null => Vec::new(),
            Expression::Reference(r) => r.args.iter_mut().collect(),
            Expression::Array(elem) => vec![elem.as_mut()],
            Expression::Tuple { elem, .. } => vec![elem.as_mut()],
            Expression::Operator { inner, .. } => vec![inner.as_mut()],
            Expression::ArrayLiteral(items)
            | Expression::Union(items)
            | Expression::Intersection(items) => items.iter_mut().collect(),
            Expression::TypeLiteral(members) => members.iter_mut().map(|m| &mut m.ty).collect(),
        }
    }
}

/// A comment the generator attaches to a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntheticComment {
    /// Printed before the node when set, after it otherwise.
    pub leading: bool,
    pub single_line: bool,
    /// Comment body without `//` or `/* */` markers.
    pub text: String,
    pub trailing_newline: bool,
}

impl SyntheticComment {
    pub fn leading(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            leading: true,
            single_line: !text.contains('\n'),
            text,
            trailing_newline: true,
        }
    }

    pub fn trailing(text: impl Into<String>) -> Self {
        Self {
            leading: false,
            ..Self::leading(text)
        }
    }

    /// Strip Go comment markers from raw comment text.
    pub fn from_go(raw: &str, leading: bool) -> Self {
        let text = raw.strip_prefix("//").unwrap_or(raw);
        let text = text.strip_prefix("/*").unwrap_or(text);
        let text = text.strip_suffix("*/").unwrap_or(text);
        Self {
            leading,
            single_line: !raw.contains('\n'),
            text: text.to_string(),
            trailing_newline: true,
        }
    }
}

/// Go file a declaration was generated from, as `pkgname/file.go`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Source {
    pub file: String,
}

impl Source {
    pub fn comment(&self) -> SyntheticComment {
        SyntheticComment::leading(format!(" From {}", self.file))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeParameter {
    pub name: Identifier,
    pub modifiers: Vec<Modifier>,
    pub constraint: Option<Expression>,
    pub default: Option<Expression>,
}

impl TypeParameter {
    pub fn new(name: Identifier, constraint: Option<Expression>) -> Self {
        Self {
            name,
            modifiers: Vec::new(),
            constraint,
            default: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeritageKind {
    Extends,
    Implements,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeritageClause {
    pub kind: HeritageKind,
    pub args: Vec<Expression>,
}

impl HeritageClause {
    pub fn extends(args: Vec<Expression>) -> Self {
        Self {
            kind: HeritageKind::Extends,
            args,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertySignature {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub optional: bool,
    pub ty: Expression,
    pub comments: Vec<SyntheticComment>,
}

impl PropertySignature {
    pub fn new(name: impl Into<String>, ty: Expression) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            optional: false,
            ty,
            comments: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumMember {
    pub name: String,
    pub value: Option<Expression>,
    pub comments: Vec<SyntheticComment>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alias {
    pub name: Identifier,
    pub modifiers: Vec<Modifier>,
    pub type_params: Vec<TypeParameter>,
    pub ty: Expression,
    pub source: Option<Source>,
    pub comments: Vec<SyntheticComment>,
}

/// Structural object type, emitted as an `interface`.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub name: Identifier,
    pub modifiers: Vec<Modifier>,
    pub type_params: Vec<TypeParameter>,
    pub heritage: Vec<HeritageClause>,
    pub fields: Vec<PropertySignature>,
    pub source: Option<Source>,
    pub comments: Vec<SyntheticComment>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enum {
    pub name: Identifier,
    pub modifiers: Vec<Modifier>,
    pub members: Vec<EnumMember>,
    pub source: Option<Source>,
    pub comments: Vec<SyntheticComment>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VariableFlags {
    #[default]
    Var,
    Let,
    Const,
}

impl VariableFlags {
    pub fn keyword(self) -> &'static str {
        match self {
            VariableFlags::Var => "var",
            VariableFlags::Let => "let",
            VariableFlags::Const => "const",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDeclaration {
    pub name: Identifier,
    pub exclamation: bool,
    pub ty: Option<Expression>,
    pub initializer: Option<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDeclarationList {
    pub declarations: Vec<VariableDeclaration>,
    pub flags: VariableFlags,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableStatement {
    pub modifiers: Vec<Modifier>,
    pub declarations: VariableDeclarationList,
    pub source: Option<Source>,
    pub comments: Vec<SyntheticComment>,
}

impl VariableStatement {
    /// `const <name>: <ty> = <initializer>;`
    pub fn constant(name: Identifier, ty: Option<Expression>, initializer: Expression) -> Self {
        Self {
            modifiers: Vec::new(),
            declarations: VariableDeclarationList {
                declarations: vec![VariableDeclaration {
                    name,
                    exclamation: false,
                    ty,
                    initializer: Some(initializer),
                }],
                flags: VariableFlags::Const,
            },
            source: None,
            comments: Vec::new(),
        }
    }
}

/// Top-level named constructs.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    Alias(Alias),
    Record(Record),
    Enum(Enum),
    Variable(VariableStatement),
}

impl Declaration {
    pub fn kind(&self) -> &'static str {
        match self {
            Declaration::Alias(_) => "alias",
            Declaration::Record(_) => "record",
            Declaration::Enum(_) => "enum",
            Declaration::Variable(_) => "variable statement",
        }
    }

    /// Declared name. A variable statement answers with its first binding.
    pub fn name(&self) -> Option<&Identifier> {
        match self {
            Declaration::Alias(a) => Some(&a.name),
            Declaration::Record(r) => Some(&r.name),
            Declaration::Enum(e) => Some(&e.name),
            Declaration::Variable(v) => v.declarations.declarations.first().map(|d| &d.name),
        }
    }

    pub fn modifiers(&self) -> &[Modifier] {
        match self {
            Declaration::Alias(a) => &a.modifiers,
            Declaration::Record(r) => &r.modifiers,
            Declaration::Enum(e) => &e.modifiers,
            Declaration::Variable(v) => &v.modifiers,
        }
    }

    pub fn modifiers_mut(&mut self) -> &mut Vec<Modifier> {
        match self {
            Declaration::Alias(a) => &mut a.modifiers,
            Declaration::Record(r) => &mut r.modifiers,
            Declaration::Enum(e) => &mut e.modifiers,
            Declaration::Variable(v) => &mut v.modifiers,
        }
    }

    pub fn comments(&self) -> &[SyntheticComment] {
        match self {
            Declaration::Alias(a) => &a.comments,
            Declaration::Record(r) => &r.comments,
            Declaration::Enum(e) => &e.comments,
            Declaration::Variable(v) => &v.comments,
        }
    }

    pub fn comments_mut(&mut self) -> &mut Vec<SyntheticComment> {
        match self {
            Declaration::Alias(a) => &mut a.comments,
            Declaration::Record(r) => &mut r.comments,
            Declaration::Enum(e) => &mut e.comments,
            Declaration::Variable(v) => &mut v.comments,
        }
    }

    pub fn source(&self) -> Option<&Source> {
        match self {
            Declaration::Alias(a) => a.source.as_ref(),
            Declaration::Record(r) => r.source.as_ref(),
            Declaration::Enum(e) => e.source.as_ref(),
            Declaration::Variable(v) => v.source.as_ref(),
        }
    }

    pub fn type_params(&self) -> &[TypeParameter] {
        match self {
            Declaration::Alias(a) => &a.type_params,
            Declaration::Record(r) => &r.type_params,
            Declaration::Enum(_) | Declaration::Variable(_) => &[],
        }
    }
}

impl From<Alias> for Declaration {
    fn from(value: Alias) -> Self {
        Declaration::Alias(value)
    }
}

impl From<Record> for Declaration {
    fn from(value: Record) -> Self {
        Declaration::Record(value)
    }
}

impl From<Enum> for Declaration {
    fn from(value: Enum) -> Self {
        Declaration::Enum(value)
    }
}

impl From<VariableStatement> for Declaration {
    fn from(value: VariableStatement) -> Self {
        Declaration::Variable(value)
    }
}
