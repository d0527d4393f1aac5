//! Go packages to the TypeScript declaration graph.
//!
//! Configure a [`GoParser`] with the packages to convert and any custom
//! mappings, then call [`GoParser::to_typescript`].

mod declarations;
mod diagnostics;
mod mapper;

#[cfg(test)]
mod diagnostics_tests;
#[cfg(test)]
mod mapper_tests;

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{debug, error};

use gots_core::bindings::Identifier;
use gots_core::source::{Object, Package, PackageMode, Program};

use crate::builtins::Builtins;
use crate::enums::PendingOperation;
use crate::overrides::{self, TypeOverride};
use crate::references::{ObjectRef, ReferenceTracker, Sweep};
use crate::store::{NodeStore, Typescript};
use crate::{Error, Result};

pub use diagnostics::{ignored_types, package_error_hint};

/// Converts Go packages into the intermediate TypeScript graph.
///
/// All configuration happens before [`GoParser::to_typescript`]; the parser
/// itself is not modified by conversion and may convert again.
#[derive(Clone, Debug)]
pub struct GoParser {
    packages: IndexMap<String, Package>,
    overrides: IndexMap<String, TypeOverride>,
    excluded: HashSet<String>,
}

impl Default for GoParser {
    fn default() -> Self {
        Self {
            packages: IndexMap::new(),
            overrides: overrides::default_overrides(),
            excluded: HashSet::new(),
        }
    }
}

impl GoParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate every declaration in the package.
    pub fn include_generate(&mut self, package: Package) -> Result<()> {
        self.include(package, PackageMode::Generate, String::new())
    }

    /// Generate every declaration, prefixing each emitted name.
    pub fn include_generate_with_prefix(
        &mut self,
        package: Package,
        prefix: impl Into<String>,
    ) -> Result<()> {
        self.include(package, PackageMode::Generate, prefix.into())
    }

    /// Generate only the declarations reachable from generated packages.
    pub fn include_reference(&mut self, package: Package, prefix: impl Into<String>) -> Result<()> {
        self.include(package, PackageMode::Reference, prefix.into())
    }

    /// Include every package of a dump with the mode and prefix it declares.
    pub fn include_program(&mut self, program: Program) -> Result<()> {
        for package in program.packages {
            let (mode, prefix) = (package.mode, package.prefix.clone());
            self.include(package, mode, prefix)?;
        }
        Ok(())
    }

    fn include(&mut self, mut package: Package, mode: PackageMode, prefix: String) -> Result<()> {
        if self.packages.contains_key(&package.path) {
            return Err(Error::DuplicatePackage(package.path));
        }
        for err in &package.errors {
            error!(
                error = %err,
                pkg = %package.path,
                "{}",
                package_error_hint(err)
            );
        }
        debug!(pkg = %package.path, ?mode, prefix = %prefix, "included package");
        package.mode = mode;
        package.prefix = prefix;
        self.packages.insert(package.path.clone(), package);
        Ok(())
    }

    /// Register overrides keyed by qualified Go name, e.g. `time.Time`.
    pub fn include_custom_declaration<I, K>(&mut self, mappings: I)
    where
        I: IntoIterator<Item = (K, TypeOverride)>,
        K: Into<String>,
    {
        for (key, value) in mappings {
            self.overrides.insert(key.into(), value);
        }
    }

    /// Register overrides where both sides are Go types:
    /// `"github.com/acme/sdk.ID" => "string"`.
    ///
    /// Every value is parsed up front; nothing is registered if one fails.
    pub fn include_custom<I, K, V>(&mut self, mappings: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let parsed = mappings
            .into_iter()
            .map(|(k, v)| Ok((k.into(), TypeOverride::parse_go(v.as_ref())?)))
            .collect::<Result<Vec<_>>>()?;
        self.include_custom_declaration(parsed);
        Ok(())
    }

    /// Skip one declaration by qualified Go name, e.g. `github.com/acme/sdk.Internal`.
    pub fn exclude_custom(&mut self, qualified: impl Into<String>) {
        self.excluded.insert(qualified.into());
    }

    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.packages.values()
    }

    /// Map every included declaration, generate referenced declarations, and
    /// finalize deferred enum assembly.
    pub fn to_typescript(&self) -> Result<Typescript> {
        let mut converter = Converter::new(self);
        converter.convert_packages()?;
        converter.finish()
    }

    pub(crate) fn package(&self, path: &str) -> Option<&Package> {
        self.packages.get(path)
    }

    pub(crate) fn identifier(&self, package: &str, name: &str) -> Identifier {
        let prefix = self
            .packages
            .get(package)
            .map(|p| p.prefix.clone())
            .unwrap_or_default();
        Identifier::qualified(package, name, prefix)
    }
}

/// State of one conversion run.
pub(crate) struct Converter<'p> {
    parser: &'p GoParser,
    store: NodeStore,
    references: ReferenceTracker,
    builtins: Builtins,
    /// `(package, name)` pairs skipped by ignore directives.
    ignored: HashSet<ObjectRef>,
    /// Override keys being expanded, to stop self-referential mappings.
    expanding: Vec<String>,
}

impl<'p> Converter<'p> {
    pub(crate) fn new(parser: &'p GoParser) -> Self {
        let mut ignored = HashSet::new();
        for package in parser.packages.values() {
            for name in ignored_types(&package.comments) {
                ignored.insert(ObjectRef::new(package.path.as_str(), name));
            }
        }
        for package in parser.packages.values() {
            for object in &package.objects {
                if parser
                    .excluded
                    .contains(&format!("{}.{}", package.path, object.name()))
                {
                    ignored.insert(ObjectRef::new(package.path.as_str(), object.name()));
                }
            }
        }

        Self {
            parser,
            store: NodeStore::new(),
            references: ReferenceTracker::new(),
            builtins: Builtins::default(),
            ignored,
            expanding: Vec::new(),
        }
    }

    fn convert_packages(&mut self) -> Result<()> {
        // Generated packages first so reference packages know what is wanted.
        let parser = self.parser;
        let packages: Vec<&'p Package> = {
            let all = parser.packages.values();
            let (generate, reference): (Vec<_>, Vec<_>) =
                all.partition(|p| p.mode == PackageMode::Generate);
            generate.into_iter().chain(reference).collect()
        };

        // Declaration order, so enum members keep the order of their constants.
        for package in packages {
            for object in &package.objects {
                let name = object.name();
                let obj = ObjectRef::new(package.path.as_str(), name);
                if self.ignored.contains(&obj) {
                    debug!(pkg = %package.path, name, "ignored by directive");
                    continue;
                }
                if package.mode == PackageMode::Reference && !self.wanted(package, object) {
                    continue;
                }
                if self.references.is_generated(&obj) {
                    continue;
                }

                self.parse(package, object).map_err(|source| Error::Object {
                    package: package.path.clone(),
                    name: name.to_string(),
                    source: Box::new(source),
                })?;
                self.references.mark_generated(&obj);
            }

            self.resolve_references()?;
        }
        Ok(())
    }

    /// Whether a reference-only package object should be generated.
    ///
    /// Constants follow their enum type: once the type is wanted, so are its
    /// values.
    fn wanted(&self, package: &Package, object: &Object) -> bool {
        let obj = ObjectRef::new(package.path.as_str(), object.name());
        if self.references.is_referenced(&obj) {
            return true;
        }
        match object {
            Object::Const(c) => declarations::enum_type_of(c)
                .is_some_and(|named| self.references.is_referenced(&named)),
            _ => false,
        }
    }

    fn resolve_references(&mut self) -> Result<()> {
        let parser = self.parser;
        let mut sweep = Sweep::default();
        loop {
            let pending = self.references.remaining(&mut sweep)?;
            if pending.is_empty() {
                return Ok(());
            }
            for obj in pending {
                if self.references.is_generated(&obj) {
                    continue;
                }
                if self.ignored.contains(&obj) {
                    debug!(pkg = %obj.package, name = %obj.name, "referenced type is ignored");
                    self.references.mark_generated(&obj);
                    continue;
                }
                let object = parser
                    .package(&obj.package)
                    .and_then(|p| p.lookup(&obj.name).map(|o| (p, o)));
                match object {
                    Some((package, object)) => {
                        debug!(pkg = %obj.package, name = %obj.name, "generating referenced type");
                        self.parse(package, object)
                            .map_err(|source| Error::Object {
                                package: obj.package.clone(),
                                name: obj.name.clone(),
                                source: Box::new(source),
                            })?;
                    }
                    None => {
                        debug!(pkg = %obj.package, name = %obj.name, "referenced object not found");
                    }
                }
                self.references.mark_generated(&obj);
            }
        }
    }

    fn finish(mut self) -> Result<Typescript> {
        for builtin in self.builtins.used() {
            if self.store.contains_key(builtin.name()) {
                tracing::warn!(
                    name = builtin.name(),
                    "builtin not emitted, a declaration with the same name exists"
                );
                continue;
            }
            self.store.set_node(builtin.name(), builtin.declaration())?;
        }
        self.store.finalize()
    }

    pub(crate) fn queue_enum_member(
        &mut self,
        key: String,
        member: gots_core::bindings::EnumMember,
    ) {
        self.store
            .update_node(key, |entry| entry.queue(PendingOperation::EnumUpgrade(member)));
    }
}
