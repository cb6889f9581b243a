//! Declaration records.
//!
//! Every record carries its name as written and the [`Span`] it occupies.
//! Text fragments (parameters, return types, variants) are kept raw: the
//! inventory is shallow and does not model types.

use crate::Span;

/// A function or method signature.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    pub name: String,
    /// Raw `name: type` fragments in declaration order, receiver included.
    pub params: Vec<String>,
    /// Return type text; empty when the signature has no `->`.
    pub ret: String,
    /// Ends after the body's `}`, or after the `;` of a bodiless signature.
    pub span: Span,
    /// The type an `impl` block attached this function to.
    pub owner_type: Option<String>,
    /// The trait whose body or `impl` block declared this function.
    pub owner_trait: Option<String>,
}

impl Function {
    /// The receiver parameter (`self`, `&self`, `&'a mut self`, `self: Box<Self>`), if any.
    pub fn receiver(&self) -> Option<&str> {
        let first = self.params.first()?;
        is_receiver(first).then_some(first.as_str())
    }

    /// Returns `true` if the function takes a receiver.
    pub fn is_method(&self) -> bool {
        self.receiver().is_some()
    }

    /// Parameters other than the receiver.
    pub fn value_params(&self) -> &[String] {
        if self.is_method() {
            &self.params[1..]
        } else {
            &self.params
        }
    }

    /// Returns `true` if the signature returns unit, written or implied.
    pub fn returns_unit(&self) -> bool {
        self.ret.is_empty() || self.ret == "()"
    }
}

fn is_receiver(param: &str) -> bool {
    let mut rest = param.trim_start();
    if let Some(r) = rest.strip_prefix('&') {
        rest = r.trim_start();
        if let Some(r) = rest.strip_prefix('\'') {
            let end = r
                .find(|c: char| !(c == '_' || c.is_alphanumeric()))
                .unwrap_or(r.len());
            rest = r[end..].trim_start();
        }
    }
    if let Some(r) = rest.strip_prefix("mut ") {
        rest = r.trim_start();
    }
    rest.strip_prefix("self")
        .is_some_and(|r| !r.starts_with(|c: char| c == '_' || c.is_alphanumeric()))
}

/// A struct-like type, created by its declaration or by the first `impl`
/// naming it, whichever is scanned first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDecl {
    pub name: String,
    /// `None` while the type is only known through `impl` blocks.
    pub span: Option<Span>,
    /// Methods from every `impl` block naming this type, in scan order.
    pub methods: Vec<Function>,
    /// Names of the traits implemented for this type, each listed once.
    pub traits: Vec<String>,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>) -> Self {
        TypeDecl {
            name: name.into(),
            span: None,
            methods: Vec::new(),
            traits: Vec::new(),
        }
    }

    /// Returns `true` once the type's own declaration has been scanned.
    pub fn is_declared(&self) -> bool {
        self.span.is_some()
    }

    pub fn implements(&self, trait_name: &str) -> bool {
        self.traits.iter().any(|t| t == trait_name)
    }
}

/// An enum and its variants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enum {
    pub name: String,
    pub span: Span,
    /// Raw variant text with payloads intact and comments removed,
    /// e.g. `Warning{ category: i32, message: String }`.
    pub variants: Vec<String>,
}

impl Enum {
    /// Bare variant names: each variant cut at its payload or discriminant.
    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| {
            let end = v.find([':', '{', '(', '=']).unwrap_or(v.len());
            v[..end].trim()
        })
    }
}

/// A trait, created by its declaration or by the first `impl ... for`
/// naming it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trait {
    pub name: String,
    /// `None` while the trait is only known through `impl` blocks.
    pub span: Option<Span>,
}

/// A function already marked as a test in the source.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestMarker {
    pub name: String,
    /// From the marking attribute through the end of the function body.
    pub span: Span,
}

/// A block under an `unsafe` marker; spans the braces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnsafeBlock {
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn function(params: &[&str], ret: &str) -> Function {
        Function {
            name: "f".to_owned(),
            params: params.iter().map(|p| (*p).to_owned()).collect(),
            ret: ret.to_owned(),
            span: Span::default(),
            owner_type: None,
            owner_trait: None,
        }
    }

    #[test]
    fn receivers() {
        for p in ["self", "&self", "&mut self", "mut self", "&'a self", "&'a mut self", "self: Box<Self>"] {
            assert_eq!(function(&[p, "x: i32"], "").receiver(), Some(p), "{p:?}");
        }
        for p in ["selfish: u8", "x: &Self", "s: &str"] {
            assert_eq!(function(&[p], "").receiver(), None, "{p:?}");
        }
    }

    #[test]
    fn value_params_skip_receiver() {
        let f = function(&["&self", "x: i32"], "");
        assert_eq!(f.value_params(), &["x: i32".to_owned()]);
        let g = function(&["x: i32"], "");
        assert_eq!(g.value_params().len(), 1);
    }

    #[test]
    fn unit_returns() {
        assert!(function(&[], "").returns_unit());
        assert!(function(&[], "()").returns_unit());
        assert!(!function(&[], "bool").returns_unit());
    }

    #[test]
    fn variant_names_strip_payloads() {
        let e = Enum {
            name: "FlashMessage".to_owned(),
            span: Span::default(),
            variants: vec![
                "Success".to_owned(),
                "Warning{ category: i32, message: String }".to_owned(),
                "Error(String)".to_owned(),
                "Code = 4".to_owned(),
            ],
        };
        assert_eq!(
            e.variant_names().collect::<Vec<_>>(),
            vec!["Success", "Warning", "Error", "Code"]
        );
    }
}
