//! The structural inventory of one source file.
//!
//! [`SourceBuilder`] accumulates records while a scan runs; [`Source`] is
//! the immutable result handed to consumers.
//!
//! Types and traits are identified by name, not by declaration order: an
//! `impl` block may be scanned before the type it names. Both lists are kept
//! in insertion order and indexed by name with get-or-create semantics so a
//! later declaration merges into the record the `impl` created.

use rustc_hash::FxHashMap;

use crate::{Enum, Function, Span, TestMarker, Trait, TypeDecl, UnsafeBlock};

/// Declarations found in one source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Source {
    functions: Vec<Function>,
    type_decls: Vec<TypeDecl>,
    type_index: FxHashMap<String, usize>,
    enums: Vec<Enum>,
    traits: Vec<Trait>,
    trait_index: FxHashMap<String, usize>,
    tests: Vec<TestMarker>,
    unsafe_blocks: Vec<UnsafeBlock>,
    test_module_line: Option<u32>,
    len: u32,
}

impl Source {
    /// Free functions and trait-body signatures, in scan order.
    ///
    /// Methods from `impl` blocks live on their [`TypeDecl`].
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// Free functions followed by every method, type by type.
    pub fn all_functions(&self) -> impl Iterator<Item = &Function> {
        self.functions
            .iter()
            .chain(self.type_decls.iter().flat_map(|t| t.methods.iter()))
    }

    pub fn type_decls(&self) -> &[TypeDecl] {
        &self.type_decls
    }

    pub fn type_decl(&self, name: &str) -> Option<&TypeDecl> {
        self.type_index.get(name).map(|&i| &self.type_decls[i])
    }

    pub fn enums(&self) -> &[Enum] {
        &self.enums
    }

    pub fn enum_decl(&self, name: &str) -> Option<&Enum> {
        self.enums.iter().find(|e| e.name == name)
    }

    pub fn traits(&self) -> &[Trait] {
        &self.traits
    }

    pub fn trait_decl(&self, name: &str) -> Option<&Trait> {
        self.trait_index.get(name).map(|&i| &self.traits[i])
    }

    pub fn tests(&self) -> &[TestMarker] {
        &self.tests
    }

    /// Returns `true` if a test with this name is already marked in the source.
    pub fn has_test(&self, name: &str) -> bool {
        self.tests.iter().any(|t| t.name == name)
    }

    pub fn unsafe_blocks(&self) -> &[UnsafeBlock] {
        &self.unsafe_blocks
    }

    /// Line of the first test-module attribute, if the file has one.
    pub fn test_module_line(&self) -> Option<u32> {
        self.test_module_line
    }

    /// Length in bytes of the scanned text.
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns `true` if the scanned text was empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Every span recorded anywhere in the inventory.
    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        let functions = self.all_functions().map(|f| f.span);
        let types = self.type_decls.iter().filter_map(|t| t.span);
        let enums = self.enums.iter().map(|e| e.span);
        let traits = self.traits.iter().filter_map(|t| t.span);
        let tests = self.tests.iter().map(|t| t.span);
        let blocks = self.unsafe_blocks.iter().map(|b| b.span);
        functions
            .chain(types)
            .chain(enums)
            .chain(traits)
            .chain(tests)
            .chain(blocks)
    }
}

/// Mutable accumulator used while a scan runs.
#[derive(Debug, Default)]
pub struct SourceBuilder {
    source: Source,
}

impl SourceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_function(&mut self, function: Function) {
        self.source.functions.push(function);
    }

    pub fn push_enum(&mut self, decl: Enum) {
        self.source.enums.push(decl);
    }

    pub fn push_test(&mut self, test: TestMarker) {
        self.source.tests.push(test);
    }

    pub fn push_unsafe_block(&mut self, block: UnsafeBlock) {
        self.source.unsafe_blocks.push(block);
    }

    pub fn extend_unsafe_blocks(&mut self, blocks: impl IntoIterator<Item = UnsafeBlock>) {
        self.source.unsafe_blocks.extend(blocks);
    }

    /// Record a test-module attribute line; only the first one is kept.
    pub fn mark_test_module(&mut self, line: u32) {
        self.source.test_module_line.get_or_insert(line);
    }

    /// Index of the type named `name`, creating an undeclared record if needed.
    pub fn type_index(&mut self, name: &str) -> usize {
        if let Some(&i) = self.source.type_index.get(name) {
            return i;
        }
        let i = self.source.type_decls.len();
        self.source.type_decls.push(TypeDecl::new(name));
        self.source.type_index.insert(name.to_owned(), i);
        i
    }

    /// Record a type's own declaration.
    ///
    /// Merges into a record created earlier by an `impl`; if the type was
    /// already declared, the first declaration's span is kept.
    pub fn declare_type(&mut self, name: &str, span: Span) -> usize {
        let i = self.type_index(name);
        self.source.type_decls[i].span.get_or_insert(span);
        i
    }

    pub fn type_decl_mut(&mut self, index: usize) -> &mut TypeDecl {
        &mut self.source.type_decls[index]
    }

    /// Index of the trait named `name`, creating an undeclared record if needed.
    pub fn trait_index(&mut self, name: &str) -> usize {
        if let Some(&i) = self.source.trait_index.get(name) {
            return i;
        }
        let i = self.source.traits.len();
        self.source.traits.push(Trait {
            name: name.to_owned(),
            span: None,
        });
        self.source.trait_index.insert(name.to_owned(), i);
        i
    }

    /// Record a trait's own declaration; the first declaration's span is kept.
    pub fn declare_trait(&mut self, name: &str, span: Span) -> usize {
        let i = self.trait_index(name);
        self.source.traits[i].span.get_or_insert(span);
        i
    }

    /// Attach `trait_name` to the type at `index`, once.
    pub fn add_type_trait(&mut self, index: usize, trait_name: &str) {
        let decl = &mut self.source.type_decls[index];
        if !decl.implements(trait_name) {
            decl.traits.push(trait_name.to_owned());
        }
    }

    /// Finish the scan of a text `len` bytes long.
    pub fn finish(mut self, len: u32) -> Source {
        self.source.len = len;
        self.source
    }
}
