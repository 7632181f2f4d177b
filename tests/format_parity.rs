//! The same document written in TOML, JSON and YAML must translate to the
//! same bytes.

use conflang::conflang::loader::{DocumentLoader, LoadError};
use conflang::conflang::{ErrorKind, Number};
use rstest::rstest;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn expected() -> String {
    std::fs::read_to_string(fixture("server.conf")).unwrap()
}

#[rstest]
#[case("server.toml")]
#[case("server.json")]
#[case("server.yaml")]
fn test_fixture_translates_identically(#[case] name: &str) {
    let loader = DocumentLoader::new();
    let (text, scope) = loader.translate_file(fixture(name), None).unwrap();

    assert_eq!(text, expected());
    assert_eq!(
        scope.names(),
        vec!["backup_port", "port", "ratio", "root", "scaled", "workers"]
    );
    assert_eq!(scope.get("backup_port"), Some(Number::Int(8081)));
    assert_eq!(scope.get("root"), Some(Number::Float(2.0)));
}

#[test]
fn test_bad_key_fixture() {
    let loader = DocumentLoader::new();
    match loader.translate_file(fixture("bad_key.toml"), None).unwrap_err() {
        LoadError::Translation(err) => {
            assert_eq!(err.kind(), ErrorKind::Naming);
            assert!(err.to_string().contains("\"bad-key\""));
        }
        other => panic!("Expected translation error, got {other:?}"),
    }
}
