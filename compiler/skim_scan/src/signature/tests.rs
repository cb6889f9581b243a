use super::*;
use pretty_assertions::assert_eq;

fn sig<'s>(name: &'s str, params: &[&'s str], ret: &'s str) -> FnSignature<'s> {
    FnSignature {
        name,
        params: params.to_vec(),
        ret,
    }
}

// ─── Functions ──────────────────────────────────────────────────

#[test]
fn plain_signatures() {
    assert_eq!(parse_fn_signature(" main() "), sig("main", &[], ""));
    assert_eq!(
        parse_fn_signature("is_divisible_by(lhs: u32, rhs: u32) -> bool "),
        sig("is_divisible_by", &["lhs: u32", "rhs: u32"], "bool")
    );
}

#[test]
fn unit_return_is_not_the_parameter_list() {
    assert_eq!(
        parse_fn_signature("fizzbuzz(n: u32) -> ()"),
        sig("fizzbuzz", &["n: u32"], "()")
    );
}

#[test]
fn receivers_and_trailing_commas() {
    assert_eq!(
        parse_fn_signature("value(&self,) -> &T"),
        sig("value", &["&self"], "&T")
    );
    assert_eq!(
        parse_fn_signature("set(&mut self,\n    v: u8,\n)"),
        sig("set", &["&mut self", "v: u8"], "")
    );
}

#[test]
fn generics_and_where_clause() {
    assert_eq!(
        parse_fn_signature("f<T: Into<String>>(x: T, y: Vec<(u8, u8)>) -> Vec<T> where T: Clone"),
        sig("f", &["x: T", "y: Vec<(u8, u8)>"], "Vec<T>")
    );
}

#[test]
fn closures_in_parameters() {
    assert_eq!(
        parse_fn_signature("apply(f: impl Fn(u8) -> u8, x: u8) -> u8"),
        sig("apply", &["f: impl Fn(u8) -> u8", "x: u8"], "u8")
    );
}

#[test]
fn truncated_signature_keeps_what_it_has() {
    assert_eq!(parse_fn_signature("half(a: u8"), sig("half", &["a: u8"], ""));
    assert_eq!(parse_fn_signature("lonely"), sig("lonely", &[], ""));
    assert_eq!(parse_fn_signature(""), sig("", &[], ""));
}

// ─── Impl Targets ───────────────────────────────────────────────

fn target<'s>(type_name: &'s str, trait_name: Option<&'s str>) -> Option<ImplTarget<'s>> {
    Some(ImplTarget {
        type_name,
        trait_name,
    })
}

#[test]
fn inherent_impls() {
    assert_eq!(resolve_impl_target(" Val "), target("Val", None));
    assert_eq!(resolve_impl_target("<T> GenVal<T> "), target("GenVal", None));
    assert_eq!(
        resolve_impl_target("<T> Wrapper<T>\nwhere\n    T: Clone\n"),
        target("Wrapper", None)
    );
}

#[test]
fn trait_impls() {
    assert_eq!(
        resolve_impl_target(" Display for Point "),
        target("Point", Some("Display"))
    );
    assert_eq!(
        resolve_impl_target("<T> From<Vec<T>> for Wrapper<T> where T: Clone "),
        target("Wrapper", Some("From"))
    );
    assert_eq!(
        resolve_impl_target(" fmt::Debug for Pair "),
        target("Pair", Some("fmt::Debug"))
    );
}

#[test]
fn reference_targets() {
    assert_eq!(
        resolve_impl_target("<'a> Iterator for &'a mut Walker<'a> "),
        target("Walker", Some("Iterator"))
    );
}

#[test]
fn tuple_and_array_targets() {
    assert_eq!(
        resolve_impl_target(" Trait for (A, B) "),
        target("(A, B)", Some("Trait"))
    );
    assert_eq!(
        resolve_impl_target("<const N: usize> Default for [u8; N] "),
        target("[u8; N]", Some("Default"))
    );
    assert_eq!(
        resolve_impl_target(" Marker for (Vec<(u8, u8)>, &str) where T: Clone "),
        target("(Vec<(u8, u8)>, &str)", Some("Marker"))
    );
}

#[test]
fn for_inside_a_name_is_not_a_split() {
    assert_eq!(resolve_impl_target(" Platform "), target("Platform", None));
    assert_eq!(
        resolve_impl_target(" Transform for Uniform "),
        target("Uniform", Some("Transform"))
    );
}

#[test]
fn unresolvable_targets() {
    assert_eq!(resolve_impl_target("  "), None);
    assert_eq!(resolve_impl_target("<T"), None);
}

// ─── Helpers ────────────────────────────────────────────────────

#[test]
fn split_respects_nesting() {
    assert_eq!(
        split_top_level("a: (u8, u8), b: [u8; 2], c: HashMap<K, V>", ','),
        vec!["a: (u8, u8)", " b: [u8; 2]", " c: HashMap<K, V>"]
    );
}

#[test]
fn where_is_stripped() {
    assert_eq!(strip_where("T where T: Copy"), "T");
    assert_eq!(strip_where("Somewhere"), "Somewhere");
    assert_eq!(strip_where("Vec<T> "), "Vec<T>");
}

#[test]
fn leading_names() {
    assert_eq!(leading_name(" Shape: Debug + Clone "), "Shape");
    assert_eq!(leading_name("Pair<T>"), "Pair");
    assert_eq!(leading_name("Nil"), "Nil");
    assert_eq!(leading_name("   "), "");
}
