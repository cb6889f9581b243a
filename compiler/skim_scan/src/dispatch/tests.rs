use super::*;
use pretty_assertions::assert_eq;
use skim_ir::Source;

fn scan(text: &str, config: &ScanConfig) -> Source {
    let mut out = SourceBuilder::new();
    scan_source(&mut Scanner::new(text), config, &mut out);
    out.finish(u32::try_from(text.len()).unwrap_or(u32::MAX))
}

fn function_names(source: &Source) -> Vec<&str> {
    source.functions().iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn macro_invocation_does_not_desynchronize() {
    let source = scan(
        "my_macro!{ a => b, c => { d } }\nfn after(x: u8) -> u8 { x }",
        &ScanConfig::default(),
    );
    assert_eq!(function_names(&source), vec!["after"]);
    assert_eq!(source.functions()[0].params, vec!["x: u8"]);
}

#[test]
fn macro_bodies_hide_items() {
    let source = scan(
        "thread_local! { static X: u8 = unsafe { 0 }; }
vec![fn_like(1), 2];
macro_rules! square {
    ($x:expr) => { fn fake() {} };
}
fn real() {}",
        &ScanConfig::default(),
    );
    assert_eq!(function_names(&source), vec!["real"]);
    assert!(source.unsafe_blocks().is_empty());
}

#[test]
fn negation_is_not_a_macro() {
    let source = scan(
        "const OK: bool = !false;\nfn g() -> bool { !OK }\nfn h() {}",
        &ScanConfig::default(),
    );
    assert_eq!(function_names(&source), vec!["g", "h"]);
}

#[test]
fn inner_attributes_and_derives_are_skipped() {
    let source = scan(
        "#![allow(dead_code)]\n#[derive(Debug, Clone)]\nstruct S;\n#[cfg(all(test, feature = \"x]\"))]\nfn f() {}",
        &ScanConfig::default(),
    );
    assert_eq!(source.type_decls().len(), 1);
    assert_eq!(function_names(&source), vec!["f"]);
    assert_eq!(source.test_module_line(), None);
}

#[test]
fn custom_markers() {
    let config = ScanConfig::default()
        .with_test_markers(["#[tokio::test]"])
        .with_test_module_markers(["#[cfg(any(test, doc))]"]);
    let source = scan(
        "#[cfg(test)]\nmod a {}\n#[cfg( any(test, doc) )]\nmod b {\n    #[tokio::test]\n    async fn t() {}\n    #[test]\n    fn plain() {}\n}",
        &config,
    );
    assert_eq!(source.test_module_line(), Some(3));
    assert!(source.has_test("t"));
    assert!(!source.has_test("plain"));
    assert_eq!(function_names(&source), vec!["plain"]);
}

#[test]
fn test_marker_without_function_records_nothing() {
    let source = scan("#[test]\nstruct NotATest;\nfn f() {}", &ScanConfig::default());
    assert!(source.tests().is_empty());
    assert_eq!(function_names(&source), vec!["f"]);
}

#[test]
fn keywords_inside_literals_and_comments_are_ignored() {
    let source = scan(
        "// fn commented() {}\nconst S: &str = \"fn quoted() {}\";\n/* struct Hidden; */\nfn seen() {}",
        &ScanConfig::default(),
    );
    assert_eq!(function_names(&source), vec!["seen"]);
    assert!(source.type_decls().is_empty());
}

#[test]
fn items_in_modules_are_found() {
    let source = scan(
        "mod inner {\n    pub struct Deep;\n    pub fn deep() {}\n}",
        &ScanConfig::default(),
    );
    assert!(source.type_decl("Deep").is_some());
    assert_eq!(function_names(&source), vec!["deep"]);
}

#[test]
fn truncated_input_yields_partial_inventory() {
    let source = scan("struct A;\nfn broken(x: u8 {\n  let y = {", &ScanConfig::default());
    assert!(source.type_decl("A").is_some());
    let broken = &source.functions()[0];
    assert_eq!(broken.name, "broken");
    assert_eq!(broken.span.end.offset, source.len());
}
