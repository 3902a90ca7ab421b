// tests/integration_tests/error_cases_test.rs
use crate::common::create_test_file;
use anyhow::Result;
use refcheck::CheckError;
use refcheck::core::walker::check_tree;
use std::path::Path;

#[test]
fn test_unresolved_reference_aborts_whole_tree() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    create_test_file(dir.path(), "bad.c", "// @ref missing_symbol")?;
    create_test_file(dir.path(), "good.c", "void fine(void) {} // @ref fine")?;

    let err = check_tree(dir.path()).unwrap_err();
    match err {
        CheckError::Unresolved { name, file, path } => {
            assert_eq!(name, "missing_symbol");
            assert_eq!(file, "bad.c");
            assert!(path.ends_with("bad.c"));
        }
        other => panic!("expected Unresolved, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_double_space_after_marker_is_a_format_error() -> Result<()> {
    let dir = tempfile::TempDir::new()?;
    create_test_file(
        dir.path(),
        "spaced.h",
        "void gadget(void);\n// @ref  gadget\n",
    )?;

    let err = check_tree(dir.path()).unwrap_err();
    assert!(matches!(err, CheckError::ExtraSpace { .. }));
    Ok(())
}

#[test]
fn test_missing_directory_is_an_io_error() {
    let err = check_tree(Path::new("/this/tree/does/not/exist")).unwrap_err();
    assert!(matches!(err, CheckError::Walk(_)));
}

#[test]
fn test_marker_self_mention_does_not_resolve() -> Result<()> {
    // The only occurrence of "foo" is inside the marker itself.
    let dir = tempfile::TempDir::new()?;
    create_test_file(dir.path(), "self.c", "/* @ref foo */")?;

    let err = check_tree(dir.path()).unwrap_err();
    assert!(matches!(err, CheckError::Unresolved { ref name, .. } if name == "foo"));
    Ok(())
}
