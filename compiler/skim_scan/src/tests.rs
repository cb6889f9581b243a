use super::*;
use pretty_assertions::assert_eq;

#[test]
fn reader_and_str_agree() {
    let text = "struct P;\nimpl P { fn get(&self) -> u8 { unsafe { 1 } } }\n";
    let from_reader = parse(text.as_bytes()).expect("slices are readable");
    assert_eq!(from_reader, parse_str(text));
}

#[test]
fn invalid_utf8_still_scans() {
    let mut bytes = b"fn before() {}\n// \xFF\xFE\nfn after() {}\n".to_vec();
    bytes.push(b'\n');
    let source = parse(bytes.as_slice()).expect("lossy decoding never fails");
    let names: Vec<_> = source.functions().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["before", "after"]);
}

#[test]
fn leading_bom_is_whitespace() {
    let source = parse("\u{FEFF}fn main() {}".as_bytes()).expect("readable");
    assert_eq!(source.functions().len(), 1);
    assert_eq!(source.functions()[0].span.start.offset, 3);
}

#[test]
fn missing_file_names_the_path() {
    let err = parse_file("definitely/not/here.rs").expect_err("file does not exist");
    match err {
        ScanError::ReadFile { path, .. } => assert_eq!(path, Path::new("definitely/not/here.rs")),
        ScanError::Read(e) => panic!("expected a path-bearing error, got {e}"),
    }
}

#[test]
fn failing_reader_is_an_error() {
    struct Broken;
    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk on fire"))
        }
    }
    assert!(matches!(parse(Broken), Err(ScanError::Read(_))));
}

#[test]
fn explicit_config_is_used() {
    let config = ScanConfig::default().with_test_markers(["#[rstest]"]);
    let text = "#[rstest]\nfn case() {}\n#[test]\nfn plain() {}";
    let source = parse_str_with(text, &config);
    assert!(source.has_test("case"));
    assert_eq!(source.functions().len(), 1);
    assert_eq!(parse_with(text.as_bytes(), &config).ok(), Some(source));
}

#[test]
fn empty_input() {
    let source = parse_str("");
    assert!(source.is_empty());
    assert!(source.functions().is_empty());
    assert!(source.unsafe_audit().ratio().abs() < f64::EPSILON);
}

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
}
