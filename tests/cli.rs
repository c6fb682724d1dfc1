//! Integration tests driving the real freqplan binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn freqplan_cmd() -> Command {
    Command::cargo_bin("freqplan").unwrap()
}

const RULES: &str = "rule count\n  command = count $in > $out\n";

fn write_rules(dir: &TempDir) -> String {
    let path = dir.path().join("rules.ninja");
    fs::write(&path, RULES).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn help_describes_the_tool() {
    freqplan_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Plan the build graph for multilingual word frequency lists",
        ));
}

#[test]
fn missing_rules_file_fails_with_no_output() {
    freqplan_cmd()
        .arg("no-such-rules.ninja")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("read rules file"));
}

#[test]
fn default_corpus_plan_reaches_stdout() {
    let dir = TempDir::new().unwrap();
    let rules = write_rules(&dir);

    freqplan_cmd()
        .arg(&rules)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "# This file is automatically generated by freqplan.",
        ))
        // The rules block is copied in verbatim.
        .stdout(predicate::str::contains(RULES))
        // The plan rebuilds itself from the rules file.
        .stdout(predicate::str::contains(format!(
            "build build.ninja: regen_plan {rules}"
        )))
        // A couple of landmarks from the default corpus.
        .stdout(predicate::str::contains(
            "data/generated/combined/combined_en.txt",
        ))
        .stdout(predicate::str::contains("default data/dist/combined_en.msgpack.gz"))
        .stdout(predicate::str::contains("default data/dist/segdict_zh.txt"));
}

#[test]
fn two_runs_emit_byte_identical_plans() {
    let dir = TempDir::new().unwrap();
    let rules = write_rules(&dir);

    let first = freqplan_cmd().arg(&rules).assert().success();
    let second = freqplan_cmd().arg(&rules).assert().success();
    assert_eq!(
        first.get_output().stdout,
        second.get_output().stdout
    );
}

#[test]
fn out_flag_writes_the_plan_to_a_file() {
    let dir = TempDir::new().unwrap();
    let rules = write_rules(&dir);
    let out = dir.path().join("build.ninja");

    freqplan_cmd()
        .arg(&rules)
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("default data/dist/segdict_zh.txt"));
}

#[test]
fn config_file_is_honored_and_becomes_a_bootstrap_dep() {
    let dir = TempDir::new().unwrap();
    let rules = write_rules(&dir);
    let config = dir.path().join("corpus.json");
    fs::write(
        &config,
        r#"{
            "sources": {"subtitles": ["fr"], "webcorpus": ["fr"]},
            "wordlist_paths": {
                "subtitles": "generated/subtitles/subtitles_{lang}.{ext}",
                "webcorpus": "generated/webcorpus/webcorpus_{lang}.{ext}",
                "combined": "generated/combined/combined_{lang}.{ext}",
                "combined-dist": "dist/combined_{lang}.{ext}",
                "social-dist": "dist/social_{lang}.{ext}",
                "segdict-dist": "dist/segdict_{lang}.{ext}"
            }
        }"#,
    )
    .unwrap();

    freqplan_cmd()
        .arg(&rules)
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "build build.ninja: regen_plan {rules} | {}",
            config.display()
        )))
        .stdout(predicate::str::contains("combined_fr"))
        .stdout(predicate::str::contains("subtitles_fr.counts.txt"));
}

#[test]
fn restricted_source_violation_exits_nonzero_with_no_output() {
    let dir = TempDir::new().unwrap();
    let rules = write_rules(&dir);
    let config = dir.path().join("corpus.json");
    fs::write(
        &config,
        r#"{
            "sources": {"segdict": ["ja"]},
            "wordlist_paths": {"segdict": "generated/segdict/segdict_{lang}.{ext}"}
        }"#,
    )
    .unwrap();

    freqplan_cmd()
        .arg(&rules)
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Chinese-only"));
}
