//! Snapshot of Go packages as a type checker sees them.
//!
//! The converter never reads Go source. An external introspector resolves
//! every type and dumps the result in this shape, usually as JSON.

pub mod expr;


use serde::{Deserialize, Serialize};

/// All packages handed to one conversion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub packages: Vec<Package>,
}

impl Program {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Import path, e.g. `github.com/acme/sdk`.
    pub path: String,
    /// Package clause name, e.g. `sdk`.
    pub name: String,
    #[serde(default)]
    pub mode: PackageMode,
    /// Prepended to every generated name from this package.
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub objects: Vec<Object>,
    /// Every comment line in the package's files, markers included.
    #[serde(default)]
    pub comments: Vec<String>,
    /// Load diagnostics reported by the type checker.
    #[serde(default)]
    pub errors: Vec<String>,
}

/// How a package takes part in conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageMode {
    /// Every declaration is generated.
    #[default]
    Generate,
    /// Only declarations reachable from generated packages are generated.
    Reference,
}

impl Package {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|o| o.name() == name)
    }
}

/// Declared position of an object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub file: String,
    #[serde(default)]
    pub line: u32,
}

impl Position {
    /// File name without directories.
    pub fn base_name(&self) -> &str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file.as_str())
    }
}

/// A comment attached to a declaration or field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Raw text including `//` or `/* */`.
    pub text: String,
    /// Set for a comment on the same line after the declaration.
    #[serde(default)]
    pub trailing: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Object {
    TypeName(TypeDecl),
    Const(ConstDecl),
    Var(ValueDecl),
    Func(ValueDecl),
}

impl Object {
    pub fn name(&self) -> &str {
        match self {
            Object::TypeName(t) => &t.name,
            Object::Const(c) => &c.name,
            Object::Var(v) | Object::Func(v) => &v.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    #[serde(default)]
    pub type_params: Vec<TypeParamDecl>,
    /// Fully resolved underlying type.
    pub underlying: SourceType,
    #[serde(default)]
    pub doc: Vec<Comment>,
    #[serde(default)]
    pub position: Option<Position>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeParamDecl {
    pub name: String,
    pub constraint: SourceType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstDecl {
    pub name: String,
    /// Declared type. Untyped constants carry their default basic type.
    #[serde(rename = "type")]
    pub ty: SourceType,
    pub value: ConstValue,
    #[serde(default)]
    pub doc: Vec<Comment>,
    #[serde(default)]
    pub position: Option<Position>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueDecl {
    pub name: String,
    #[serde(default)]
    pub position: Option<Position>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

/// Go basic kinds, plus the `byte` and `rune` spellings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasicKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    Byte,
    Rune,
    UnsafePointer,
    UntypedBool,
    UntypedInt,
    UntypedRune,
    UntypedFloat,
    UntypedString,
    UntypedNil,
    Invalid,
}

impl BasicKind {
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "bool" => BasicKind::Bool,
            "int" => BasicKind::Int,
            "int8" => BasicKind::Int8,
            "int16" => BasicKind::Int16,
            "int32" => BasicKind::Int32,
            "int64" => BasicKind::Int64,
            "uint" => BasicKind::Uint,
            "uint8" => BasicKind::Uint8,
            "uint16" => BasicKind::Uint16,
            "uint32" => BasicKind::Uint32,
            "uint64" => BasicKind::Uint64,
            "uintptr" => BasicKind::Uintptr,
            "float32" => BasicKind::Float32,
            "float64" => BasicKind::Float64,
            "complex64" => BasicKind::Complex64,
            "complex128" => BasicKind::Complex128,
            "string" => BasicKind::String,
            "byte" => BasicKind::Byte,
            "rune" => BasicKind::Rune,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_numeric(self) -> bool {
        use BasicKind::*;
        matches!(
            self,
            Int | Int8
                | Int16
                | Int32
                | Int64
                | Uint
                | Uint8
                | Uint16
                | Uint32
                | Uint64
                | Uintptr
                | Float32
                | Float64
                | Complex64
                | Complex128
                | Byte
                | Rune
                | UntypedInt
                | UntypedRune
                | UntypedFloat
        )
    }

    pub fn is_boolean(self) -> bool {
        matches!(self, BasicKind::Bool | BasicKind::UntypedBool)
    }

    pub fn is_string(self) -> bool {
        matches!(self, BasicKind::String | BasicKind::UntypedString)
    }
}

/// Reference to a declared type, possibly instantiated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedType {
    /// Import path; `None` for universe types such as `error`.
    #[serde(default)]
    pub package: Option<String>,
    pub name: String,
    #[serde(default)]
    pub type_args: Vec<SourceType>,
    /// Resolved underlying type. Required for types outside the converted
    /// packages; may be omitted otherwise.
    #[serde(default)]
    pub underlying: Option<Box<SourceType>>,
}

impl NamedType {
    pub fn new(package: Option<&str>, name: &str) -> Self {
        Self {
            package: package.map(str::to_string),
            name: name.to_string(),
            type_args: Vec::new(),
            underlying: None,
        }
    }

    /// `path/to/pkg.Name`, the key custom mappings are registered under.
    pub fn qualified_name(&self) -> String {
        match &self.package {
            Some(pkg) => format!("{}.{}", pkg, self.name),
            None => self.name.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: SourceType,
    #[serde(default)]
    pub embedded: bool,
    /// Raw struct tag, without backquotes.
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub doc: Vec<Comment>,
}

impl Field {
    pub fn is_exported(&self) -> bool {
        self.name.chars().next().is_some_and(char::is_uppercase)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Term {
    #[serde(default)]
    pub tilde: bool,
    #[serde(rename = "type")]
    pub ty: SourceType,
}

/// Resolved Go type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceType {
    Basic {
        name: BasicKind,
    },
    Named(NamedType),
    Pointer {
        elem: Box<SourceType>,
    },
    Slice {
        elem: Box<SourceType>,
    },
    Array {
        len: u64,
        elem: Box<SourceType>,
    },
    Map {
        key: Box<SourceType>,
        value: Box<SourceType>,
    },
    Struct {
        #[serde(default)]
        fields: Vec<Field>,
    },
    Interface {
        #[serde(default)]
        embeddeds: Vec<SourceType>,
        #[serde(default)]
        methods: Vec<String>,
    },
    Union {
        terms: Vec<Term>,
    },
    TypeParam {
        name: String,
        constraint: Box<SourceType>,
    },
    Signature,
    Chan {
        elem: Box<SourceType>,
    },
}

impl SourceType {
    pub fn basic(kind: BasicKind) -> Self {
        SourceType::Basic { name: kind }
    }

    pub fn named(package: Option<&str>, name: &str) -> Self {
        SourceType::Named(NamedType::new(package, name))
    }

    pub fn pointer(elem: SourceType) -> Self {
        SourceType::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: SourceType) -> Self {
        SourceType::Slice {
            elem: Box::new(elem),
        }
    }

    pub fn map(key: SourceType, value: SourceType) -> Self {
        SourceType::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// `interface{}` / `any`.
    pub fn empty_interface() -> Self {
        SourceType::Interface {
            embeddeds: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Short description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            SourceType::Basic { name } => format!("{name:?}").to_lowercase(),
            SourceType::Named(n) => n.qualified_name(),
            SourceType::Pointer { elem } => format!("*{}", elem.describe()),
            SourceType::Slice { elem } => format!("[]{}", elem.describe()),
            SourceType::Array { len, elem } => format!("[{len}]{}", elem.describe()),
            SourceType::Map { key, value } => {
                format!("map[{}]{}", key.describe(), value.describe())
            }
            SourceType::Struct { .. } => "struct{...}".to_string(),
            SourceType::Interface { .. } => "interface{...}".to_string(),
            SourceType::Union { terms } => terms
                .iter()
                .map(|t| {
                    let tilde = if t.tilde { "~" } else { "" };
                    format!("{tilde}{}", t.ty.describe())
                })
                .collect::<Vec<_>>()
                .join(" | "),
            SourceType::TypeParam { name, .. } => name.clone(),
            SourceType::Signature => "func(...)".to_string(),
            SourceType::Chan { elem } => format!("chan {}", elem.describe()),
        }
    }
}
