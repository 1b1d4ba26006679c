use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn translate_taxids(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_translate-taxids"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn setup(sample: &str, taxonomy: &str) -> (TempDir, [PathBuf; 3]) {
    let dir = tempfile::tempdir().unwrap();
    let paths = [
        dir.path().join("sample.tsv"),
        dir.path().join("taxonomy.tsv"),
        dir.path().join("output.tsv"),
    ];
    fs::write(&paths[0], sample).unwrap();
    fs::write(&paths[1], taxonomy).unwrap();
    (dir, paths)
}

fn arg(pb: &Path) -> &str {
    pb.to_str().unwrap()
}

#[test]
fn test_version() {
    let out = translate_taxids(&["--version"]);

    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "translate-taxids 0.0.2\n");
}

#[test]
fn test_version_comes_before_arguments() {
    let out = translate_taxids(&["--version", "does-not-exist.tsv"]);

    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("translate-taxids "));
}

#[test]
fn test_success_message() {
    let (_dir, [sample, taxonomy, output]) = setup(
        "sample_name\t561530\nS1\t3\n",
        "tax_id\tspecies\tgenus\n561530\tEscherichia coli\tEscherichia\n",
    );

    let out = translate_taxids(&[arg(&sample), arg(&taxonomy), arg(&output)]);

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        format!("Output written to {}\n", output.display())
    );
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "sample_name\tEscherichia coli\nS1\t3\n"
    );
}

#[test]
fn test_passthrough_warns_on_stderr() {
    let (_dir, [sample, taxonomy, output]) = setup(
        "sample_name\t561530\nS1\t3\n",
        "identifier\tspecies\n561530\tEscherichia coli\n",
    );

    let out = translate_taxids(&[arg(&sample), arg(&taxonomy), arg(&output)]);

    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Could not find a tax_id column"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "sample_name\t561530\nS1\t3\n");
}

#[test]
fn test_strict_fails() {
    let (_dir, [sample, taxonomy, output]) = setup(
        "sample_name\t561530\nS1\t3\n",
        "identifier\tspecies\n561530\tEscherichia coli\n",
    );

    let out = translate_taxids(&["--strict", arg(&sample), arg(&taxonomy), arg(&output)]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Could not find a tax_id column"));
    assert!(!output.exists());
}

#[test]
fn test_missing_arguments() {
    let out = translate_taxids(&["only-one.tsv"]);

    assert!(!out.status.success());
}
