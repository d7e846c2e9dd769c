use std::fs;

use clap::Parser;
use image_matrix_mgr::Args;
use image_matrix_mgr::discovery::aggregate::{DiscoveryOutcome, Matrix, ResolvedBuildTarget};
use image_matrix_mgr::output::{emit, render_lines};
use serde_json::Value;

fn outcome_with_one_entry() -> DiscoveryOutcome {
    DiscoveryOutcome {
        matrix: Matrix {
            include: vec![ResolvedBuildTarget {
                name: "foo".to_string(),
                tag: "1.29.1-debian-12-r0".to_string(),
                context: "containers/openami/foo/1.29/debian-12".to_string(),
                dockerfile: "containers/openami/foo/1.29/debian-12/Dockerfile".to_string(),
            }],
        },
        missing_dockerfile: vec![],
        missing_tags: vec![],
        missing_context: vec![],
    }
}

#[test]
fn channel_file_receives_all_four_keys() {
    let tmp = tempfile::tempdir().unwrap();
    let channel = tmp.path().join("gh_output");

    emit(&outcome_with_one_entry(), Some(&channel)).unwrap();

    let written = fs::read_to_string(&channel).unwrap();
    let keys: Vec<&str> = written
        .lines()
        .map(|l| l.split_once('=').unwrap().0)
        .collect();
    assert_eq!(
        keys,
        vec!["matrix", "missing_dockerfile", "missing_tags", "missing_context"]
    );
}

#[test]
fn matrix_value_is_compact_json_with_include() {
    let lines = render_lines(&outcome_with_one_entry()).unwrap();
    let matrix_line = lines.lines().next().unwrap();
    let value = matrix_line.strip_prefix("matrix=").unwrap();
    assert!(!value.contains('\n'));
    assert!(!value.contains(": "));

    let parsed: Value = serde_json::from_str(value).unwrap();
    let include = parsed["include"].as_array().unwrap();
    assert_eq!(include.len(), 1);
    assert_eq!(include[0]["name"], "foo");
    assert_eq!(include[0]["tag"], "1.29.1-debian-12-r0");
    assert_eq!(include[0]["context"], "containers/openami/foo/1.29/debian-12");
    assert_eq!(
        include[0]["dockerfile"],
        "containers/openami/foo/1.29/debian-12/Dockerfile"
    );
}

#[test]
fn channel_file_is_appended_not_truncated() {
    let tmp = tempfile::tempdir().unwrap();
    let channel = tmp.path().join("gh_output");
    fs::write(&channel, "earlier_step=1\n").unwrap();

    emit(&outcome_with_one_entry(), Some(&channel)).unwrap();

    let written = fs::read_to_string(&channel).unwrap();
    assert!(written.starts_with("earlier_step=1\n"));
    assert_eq!(written.lines().count(), 5);
}

#[test]
fn strict_failures_track_tags_and_context_only() {
    let mut outcome = outcome_with_one_entry();
    assert!(!outcome.strict_failures());

    outcome.missing_dockerfile.push("ignored".to_string());
    assert!(!outcome.strict_failures());

    outcome.missing_tags.push("bar".to_string());
    assert!(outcome.strict_failures());

    outcome.missing_tags.clear();
    outcome.missing_context.push("baz:1.0.0-r0".to_string());
    assert!(outcome.strict_failures());
}

#[test]
fn strict_is_the_default_and_no_strict_disables_it() {
    let args = Args::parse_from(["image-matrix-mgr"]);
    assert!(args.strict());

    let args = Args::parse_from(["image-matrix-mgr", "--no-strict"]);
    assert!(!args.strict());
}

#[test]
fn root_defaults_to_the_containers_convention() {
    // Clear the env override so the default is what gets parsed.
    // Safety: test processes here are single-threaded at this point.
    unsafe { std::env::remove_var("IMAGE_MATRIX_ROOT") };
    let args = Args::parse_from(["image-matrix-mgr"]);
    assert_eq!(args.root, std::path::PathBuf::from("containers/openami"));
}
