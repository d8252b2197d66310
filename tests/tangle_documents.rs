//! End-to-end tangling through the public library API.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use mdtangle::commands::{tangle, TangleOptions};
use mdtangle::model::{expand_all, tangle_document, BlockMap, PipelineOptions};
use mdtangle::readers::{extract, unindent};
use mdtangle::{Config, Context};

const LIST_DOCUMENT: &str = "\
# A list

The output file:

###### file:out.txt
    header
    - ###### items ###### -
    footer

And the items it lists:

###### items
    one
    two
";

#[test]
fn list_document_writes_wrapped_lines() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("list.md"), LIST_DOCUMENT).unwrap();

    let ctx = Context::default_for_dir(dir.path().to_path_buf());
    let run = tangle(&ctx, TangleOptions::default()).unwrap();

    assert!(run.is_success());
    assert_eq!(run.diagnostic_count(), 0);
    assert_eq!(
        fs::read_to_string(dir.path().join("out.txt")).unwrap(),
        "header\n- one -\n- two -\nfooter"
    );
}

#[test]
fn unresolved_reference_is_kept_and_reported_once() {
    let document = "###### file:out.txt\n    start\n    >> ###### ghost ###### <<\n    end\n";
    let tangled = tangle_document(document, PipelineOptions::default());

    assert_eq!(
        tangled.files[0].contents,
        "start\n>> ###### ghost ###### <<\nend"
    );
    assert_eq!(tangled.diagnostics.len(), 1);
    assert_eq!(tangled.diagnostics[0].missing_name(), "ghost");
}

#[test]
fn nested_references_resolve_with_configured_passes() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("nested.md"),
        "###### file:a.txt\n    ###### b\n\n###### b\n    [###### c ######]\n\n###### c\n    leaf\n",
    )
    .unwrap();

    let one_pass = Context::default_for_dir(dir.path().to_path_buf());
    tangle(&one_pass, TangleOptions::default()).unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("a.txt")).unwrap(),
        "[###### c ######]"
    );

    let two_passes = Context::new(Config::default().with_passes(2), dir.path().to_path_buf());
    tangle(&two_passes, TangleOptions::default()).unwrap();
    assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "[leaf]");
}

#[test]
fn escaping_output_path_fails_only_that_file() {
    let dir = tempdir().unwrap();
    let docs = dir.path().join("docs");
    fs::create_dir(&docs).unwrap();
    fs::write(
        docs.join("mixed.md"),
        "###### file:good.txt\n    ok\n\n###### file:../evil.txt\n    x\n",
    )
    .unwrap();

    let ctx = Context::default_for_dir(dir.path().to_path_buf());
    let run = tangle(&ctx, TangleOptions::default()).unwrap();

    assert!(!run.is_success());
    assert_eq!(run.errors().count(), 0);
    assert_eq!(fs::read_to_string(docs.join("good.txt")).unwrap(), "ok");
    assert!(!dir.path().join("evil.txt").exists());
}

#[test]
fn expansion_pass_reads_from_snapshot() {
    let document = "###### a\n    ###### b\n###### b\n    ###### c\n###### c\n    x\n";
    let blocks = BlockMap::concatenate(extract(document).into_iter().map(|block| {
        let body = unindent(&block.body);
        block.with_body(body)
    }));
    let (expanded, diagnostics) = expand_all(&blocks);

    assert!(diagnostics.is_empty());
    assert_eq!(expanded.get("a"), Some("###### c"));
    assert_eq!(expanded.get("b"), Some("x"));
}

#[test]
fn one_bad_document_does_not_block_others() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("good.md"), "###### file:good.txt\n    fine\n").unwrap();
    fs::write(dir.path().join("bad.md"), "###### file:/abs.txt\n    nope\n").unwrap();

    let ctx = Context::default_for_dir(dir.path().to_path_buf());
    let options = TangleOptions {
        files: vec![PathBuf::from("bad.md"), PathBuf::from("good.md")],
        ..Default::default()
    };
    let run = tangle(&ctx, options).unwrap();

    assert!(!run.is_success());
    assert_eq!(run.failed_documents(), 1);
    assert_eq!(run.file_failures().count(), 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("good.txt")).unwrap(),
        "fine"
    );
}
