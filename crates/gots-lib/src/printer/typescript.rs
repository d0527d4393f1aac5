//! TypeScript source rendering.

use gots_core::bindings::{
    Alias, Declaration, Enum, EnumMember, Expression, HeritageClause, HeritageKind, LiteralValue,
    Modifier, PropertySignature, Record, SyntheticComment, TypeParameter, VariableStatement,
};

use super::{PrintError, Printer};
use crate::serialize::HEADER;

/// Printer configuration and entry point.
#[derive(Clone, Debug)]
pub struct TypeScriptPrinter {
    indent: usize,
    banner: String,
}

impl Default for TypeScriptPrinter {
    fn default() -> Self {
        Self {
            indent: 4,
            banner: HEADER.to_string(),
        }
    }
}

impl TypeScriptPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of spaces per nesting level.
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    /// Set the text emitted before the first declaration.
    pub fn banner(mut self, text: impl Into<String>) -> Self {
        self.banner = text.into();
        self
    }

    fn pad(&self, depth: usize) -> String {
        " ".repeat(self.indent * depth)
    }

    fn declaration(&self, decl: &Declaration) -> Result<String, PrintError> {
        match decl {
            Declaration::Alias(alias) => self.alias(alias),
            Declaration::Record(record) => self.record(record),
            Declaration::Enum(e) => self.enumeration(e),
            Declaration::Variable(stmt) => self.variable(stmt),
        }
    }

    fn alias(&self, alias: &Alias) -> Result<String, PrintError> {
        let name = non_empty(&alias.name.reference())?;
        Ok(format!(
            "{}type {}{} = {};",
            modifiers(&alias.modifiers),
            name,
            self.type_params(&alias.type_params)?,
            self.expr(&alias.ty, 0)?
        ))
    }

    fn record(&self, record: &Record) -> Result<String, PrintError> {
        let name = non_empty(&record.name.reference())?;
        let mut out = format!(
            "{}interface {}{}{} {{\n",
            modifiers(&record.modifiers),
            name,
            self.type_params(&record.type_params)?,
            self.heritage(&record.heritage)?
        );
        for field in &record.fields {
            out.push_str(&self.property(field, 1)?);
        }
        out.push('}');
        Ok(out)
    }

    fn enumeration(&self, e: &Enum) -> Result<String, PrintError> {
        let name = non_empty(&e.name.reference())?;
        let mut out = format!("{}enum {} {{\n", modifiers(&e.modifiers), name);
        let pad = self.pad(1);
        for (i, member) in e.members.iter().enumerate() {
            let sep = if i + 1 < e.members.len() { "," } else { "" };
            out.push_str(&leading_comments(&member.comments, &pad));
            out.push_str(&pad);
            out.push_str(&self.enum_member(member)?);
            out.push_str(sep);
            out.push_str(&trailing_comments(&member.comments));
            out.push('\n');
        }
        out.push('}');
        Ok(out)
    }

    fn enum_member(&self, member: &EnumMember) -> Result<String, PrintError> {
        let name = property_name(&member.name);
        match &member.value {
            Some(value) => Ok(format!("{} = {}", name, self.expr(value, 1)?)),
            None => Ok(name),
        }
    }

    fn variable(&self, stmt: &VariableStatement) -> Result<String, PrintError> {
        let mut decls = Vec::with_capacity(stmt.declarations.declarations.len());
        for decl in &stmt.declarations.declarations {
            let mut out = non_empty(&decl.name.reference())?;
            if decl.exclamation {
                out.push('!');
            }
            if let Some(ty) = &decl.ty {
                out.push_str(": ");
                out.push_str(&self.expr(ty, 0)?);
            }
            if let Some(init) = &decl.initializer {
                out.push_str(" = ");
                out.push_str(&self.expr(init, 0)?);
            }
            decls.push(out);
        }
        Ok(format!(
            "{}{} {};",
            modifiers(&stmt.modifiers),
            stmt.declarations.flags.keyword(),
            decls.join(", ")
        ))
    }

    fn type_params(&self, params: &[TypeParameter]) -> Result<String, PrintError> {
        if params.is_empty() {
            return Ok(String::new());
        }
        let mut parts = Vec::with_capacity(params.len());
        for param in params {
            let mut out = format!("{}{}", modifiers(&param.modifiers), param.name);
            if let Some(constraint) = &param.constraint {
                out.push_str(" extends ");
                out.push_str(&self.expr(constraint, 0)?);
            }
            if let Some(default) = &param.default {
                out.push_str(" = ");
                out.push_str(&self.expr(default, 0)?);
            }
            parts.push(out);
        }
        Ok(format!("<{}>", parts.join(", ")))
    }

    fn heritage(&self, clauses: &[HeritageClause]) -> Result<String, PrintError> {
        let mut out = String::new();
        for clause in clauses.iter().filter(|c| !c.args.is_empty()) {
            let keyword = match clause.kind {
                HeritageKind::Extends => "extends",
                HeritageKind::Implements => "implements",
            };
            let args = self.list(&clause.args, 0)?;
            out.push_str(&format!(" {keyword} {}", args.join(", ")));
        }
        Ok(out)
    }

    fn property(&self, field: &PropertySignature, depth: usize) -> Result<String, PrintError> {
        let pad = self.pad(depth);
        let optional = if field.optional { "?" } else { "" };
        Ok(format!(
            "{}{}{}{}{}: {};{}\n",
            leading_comments(&field.comments, &pad),
            pad,
            modifiers(&field.modifiers),
            property_name(&field.name),
            optional,
            self.expr(&field.ty, depth)?,
            trailing_comments(&field.comments)
        ))
    }

    fn list(&self, items: &[Expression], depth: usize) -> Result<Vec<String>, PrintError> {
        items.iter().map(|e| self.expr(e, depth)).collect()
    }

    fn expr(&self, expr: &Expression, depth: usize) -> Result<String, PrintError> {
        let out = match expr {
            Expression::Keyword(k) => k.as_str().to_string(),
            Expression::Literal(value) => literal(value)?,
            Expression::Null => "null".to_string(),
            Expression::Reference(r) => {
                if r.args.is_empty() {
                    r.name.to_string()
                } else {
                    format!("{}<{}>", r.name, self.list(&r.args, depth)?.join(", "))
                }
            }
            Expression::Array(elem) => format!("{}[]", self.operand(elem, depth)?),
            Expression::Tuple { elem, length } => {
                let elem = self.expr(elem, depth)?;
                format!("[{}]", vec![elem; *length].join(", "))
            }
            Expression::ArrayLiteral(items) => format!("[{}]", self.list(items, depth)?.join(", ")),
            Expression::Union(members) => self.list(members, depth)?.join(" | "),
            Expression::Intersection(members) => {
                let mut parts = Vec::with_capacity(members.len());
                for member in members {
                    parts.push(match member {
                        Expression::Union(_) => format!("({})", self.expr(member, depth)?),
                        _ => self.expr(member, depth)?,
                    });
                }
                parts.join(" & ")
            }
            Expression::Operator { keyword, inner } => {
                format!("{} {}", keyword.as_str(), self.operand(inner, depth)?)
            }
            Expression::TypeLiteral(members) => {
                if members.is_empty() {
                    return Ok("{}".to_string());
                }
                let mut out = "{\n".to_string();
                for member in members {
                    out.push_str(&self.property(member, depth + 1)?);
                }
                out.push_str(&self.pad(depth));
                out.push('}');
                out
            }
        };
        Ok(out)
    }

    /// Operand of a postfix `[]` or prefix operator.
    fn operand(&self, expr: &Expression, depth: usize) -> Result<String, PrintError> {
        let inner = self.expr(expr, depth)?;
        match expr {
            Expression::Union(m) | Expression::Intersection(m) if m.len() > 1 => {
                Ok(format!("({inner})"))
            }
            Expression::Operator { .. } => Ok(format!("({inner})")),
            _ => Ok(inner),
        }
    }
}

impl Printer for TypeScriptPrinter {
    fn header(&self) -> &str {
        &self.banner
    }

    fn print(&self, decl: &Declaration) -> Result<String, PrintError> {
        let mut out = String::new();
        if let Some(source) = decl.source() {
            out.push_str(&leading_comments(&[source.comment()], ""));
        }
        out.push_str(&leading_comments(decl.comments(), ""));
        out.push_str(&self.declaration(decl)?);
        out.push_str(&trailing_comments(decl.comments()));
        Ok(out)
    }
}

fn modifiers(mods: &[Modifier]) -> String {
    mods.iter().map(|m| format!("{} ", m.keyword())).collect()
}

fn comment_text(comment: &SyntheticComment) -> String {
    if comment.single_line {
        format!("//{}", comment.text)
    } else {
        format!("/*{}*/", comment.text)
    }
}

fn leading_comments(comments: &[SyntheticComment], pad: &str) -> String {
    let mut out = String::new();
    for comment in comments.iter().filter(|c| c.leading) {
        out.push_str(pad);
        out.push_str(&comment_text(comment));
        out.push(if comment.trailing_newline || comment.single_line {
            '\n'
        } else {
            ' '
        });
    }
    out
}

fn trailing_comments(comments: &[SyntheticComment]) -> String {
    comments
        .iter()
        .filter(|c| !c.leading)
        .map(|c| format!(" {}", comment_text(c)))
        .collect()
}

fn non_empty(name: &str) -> Result<String, PrintError> {
    if name.is_empty() {
        return Err(PrintError::EmptyName);
    }
    Ok(name.to_string())
}

fn literal(value: &LiteralValue) -> Result<String, PrintError> {
    Ok(match value {
        LiteralValue::String(s) => quote(s),
        LiteralValue::Int(i) => i.to_string(),
        LiteralValue::Float(f) if !f.is_finite() => return Err(PrintError::NonFiniteFloat(*f)),
        LiteralValue::Float(f) => f.to_string(),
        LiteralValue::Bool(b) => b.to_string(),
    })
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Property names that are not identifiers are quoted.
fn property_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        quote(name)
    }
}
