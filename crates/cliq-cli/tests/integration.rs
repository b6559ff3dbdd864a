#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cliq(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cliq").unwrap();
    cmd.current_dir(dir.path())
        .env("CLIQ_CONFIG_DIR", dir.path().join("config"))
        .env_remove("CLIQ_CLIQ_HUB_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

const TOOLS: &str = r#"name: Echo tools
description: Small echo helpers
version: "1.0"
author: tests
cliq_template_version: "1.0"
cmds:
  - id: greet
    name: Greet
    description: Say hello
    command: echo hello {{who}}
    variables:
      - name: who
        type: text
        label: Who
        description: Person to greet
        required: true
  - id: shout
    name: Shout
    description: Say it loud
    command: echo {{word}} {{word}} --count {{repeat_number}}
    variables:
      - name: word
        type: text
        label: Word
        description: Word to repeat
        required: true
      - name: repeat_number
        type: number
        label: Repeat number
        description: How often
        required: false
"#;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn favorites_dir(dir: &TempDir) -> PathBuf {
    dir.path().join("config/fav_templates")
}

fn hashed_files(dir: &Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// cliq infer
// ---------------------------------------------------------------------------

#[test]
fn infer_prints_yaml_with_typed_variables() {
    let dir = TempDir::new().unwrap();
    let out = cliq(&dir)
        .args([
            "infer",
            "convert {{input_file}} {{output_file}} --quality {{quality_number}}",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let doc: serde_yaml::Value = serde_yaml::from_slice(&out).unwrap();
    let vars = &doc["cmds"][0]["variables"];
    assert_eq!(vars[0]["type"], "file_input");
    assert_eq!(vars[1]["type"], "file_output");
    assert_eq!(vars[2]["type"], "number");
    assert_eq!(vars[2]["options"]["max"], 100);
}

#[test]
fn infer_accepts_unquoted_command_words() {
    let dir = TempDir::new().unwrap();
    let out = cliq(&dir)
        .args(["infer", "--name", "Resize", "resize", "--width", "{{width}}"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let doc: serde_yaml::Value = serde_yaml::from_slice(&out).unwrap();
    assert_eq!(doc["name"], "Resize");
    assert_eq!(doc["cmds"][0]["command"], "resize --width {{width}}");
    assert_eq!(doc["cmds"][0]["variables"][0]["type"], "number");
}

#[test]
fn infer_writes_output_file_that_validates() {
    let dir = TempDir::new().unwrap();
    cliq(&dir)
        .args(["infer", "-o", "gen.cliqfile.yaml", "ls {{show_hidden}}"])
        .assert()
        .success();
    assert!(dir.path().join("gen.cliqfile.yaml").exists());

    cliq(&dir)
        .args(["validate", "--strict", "gen.cliqfile.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid: Generated Template"));
}

// ---------------------------------------------------------------------------
// cliq validate / sanitize
// ---------------------------------------------------------------------------

#[test]
fn validate_reports_location_of_error() {
    let dir = TempDir::new().unwrap();
    let bad = TOOLS.replace("type: number", "type: integer");
    write_file(&dir, "bad.yaml", &bad);

    cliq(&dir)
        .args(["validate", "bad.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("command #2"))
        .stderr(predicate::str::contains("'integer'"));
}

#[test]
fn validate_rejects_duplicate_variables() {
    let dir = TempDir::new().unwrap();
    let dup = TOOLS.replace("name: repeat_number", "name: word");
    write_file(&dir, "dup.yaml", &dup);

    cliq(&dir)
        .args(["validate", "dup.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate variable name 'word'"));
}

#[test]
fn sanitize_strips_fences_from_stdin() {
    let dir = TempDir::new().unwrap();
    let wrapped = format!("<think>drafting</think>\n```yaml\n{TOOLS}```\n");
    cliq(&dir)
        .args(["sanitize", "-", "--strict"])
        .write_stdin(wrapped)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name: Echo tools"))
        .stdout(predicate::str::contains("```").not());
}

#[test]
fn sanitize_rejects_unknown_encoding() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "t.yaml", TOOLS);
    cliq(&dir)
        .args(["sanitize", "t.yaml", "--encoding", "hex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown encoding"));
}

// ---------------------------------------------------------------------------
// cliq preview / run
// ---------------------------------------------------------------------------

#[test]
fn preview_substitutes_and_keeps_missing_placeholders() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "tools.yaml", TOOLS);

    cliq(&dir)
        .args(["preview", "tools.yaml", "--cmd", "shout", "--var", "word=hey"])
        .assert()
        .success()
        .stdout("echo hey hey --count {{repeat_number}}\n");
}

#[test]
fn preview_requires_cmd_when_ambiguous() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "tools.yaml", TOOLS);

    cliq(&dir)
        .args(["preview", "tools.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greet, shout"));
}

#[test]
fn preview_unknown_command_fails() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "tools.yaml", TOOLS);

    cliq(&dir)
        .args(["preview", "tools.yaml", "--cmd", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("command not found: nope"));
}

#[test]
fn preview_json_lists_argv() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "tools.yaml", TOOLS);

    let out = cliq(&dir)
        .args([
            "--json", "preview", "tools.yaml", "--cmd", "greet", "--var", "who=big world",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(v["argv"], serde_json::json!(["echo", "hello", "big", "world"]));
}

#[cfg(unix)]
#[test]
fn run_executes_command() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "tools.yaml", TOOLS);

    cliq(&dir)
        .args(["run", "tools.yaml", "--cmd", "greet", "--var", "who=there"])
        .assert()
        .success()
        .stdout("hello there\n");
}

#[test]
fn run_reports_missing_program() {
    let dir = TempDir::new().unwrap();
    let doc = TOOLS.replace("echo hello {{who}}", "cliq-no-such-program {{who}}");
    write_file(&dir, "tools.yaml", &doc);

    cliq(&dir)
        .args(["run", "tools.yaml", "--cmd", "greet", "--var", "who=x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cliq-no-such-program"));
}

// ---------------------------------------------------------------------------
// cliq fav
// ---------------------------------------------------------------------------

#[test]
fn fav_save_list_show_delete() {
    let dir = TempDir::new().unwrap();
    write_file(&dir, "tools.yaml", TOOLS);

    cliq(&dir)
        .args(["fav", "save", "tools.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved favorite: Echo tools"));

    let files = hashed_files(&favorites_dir(&dir));
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with(".cliqfile.yaml"));
    assert_eq!(files[0].len(), 32 + ".cliqfile.yaml".len());

    cliq(&dir)
        .args(["fav", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Echo tools"));

    cliq(&dir)
        .args(["fav", "show", "Echo tools"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id: greet"));

    cliq(&dir)
        .args(["fav", "delete", "Echo tools"])
        .assert()
        .success();

    cliq(&dir)
        .args(["fav", "show", "Echo tools"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn fav_list_empty() {
    let dir = TempDir::new().unwrap();
    cliq(&dir)
        .args(["fav", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No favorites yet."));
}

#[test]
fn fav_rename_moves_favorite() {
    let dir = TempDir::new().unwrap();
    let draft = TOOLS.replace("name: Echo tools", "name: draft");
    write_file(&dir, "draft.yaml", &draft);
    cliq(&dir).args(["fav", "save", "draft.yaml"]).assert().success();

    cliq(&dir)
        .args(["fav", "rename", "draft", "final"])
        .assert()
        .success();

    cliq(&dir).args(["fav", "show", "draft"]).assert().failure();
    cliq(&dir)
        .args(["fav", "show", "final"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: final"));
    assert_eq!(hashed_files(&favorites_dir(&dir)).len(), 1);
}

#[test]
fn fav_reads_legacy_file_names() {
    let dir = TempDir::new().unwrap();
    let fav_dir = favorites_dir(&dir);
    std::fs::create_dir_all(&fav_dir).unwrap();
    let legacy = TOOLS.replace("name: Echo tools", "name: old");
    std::fs::write(fav_dir.join("old.cliqfile.yaml"), legacy).unwrap();

    cliq(&dir)
        .args(["fav", "path", "old"])
        .assert()
        .success()
        .stdout(predicate::str::contains("old.cliqfile.yaml"));

    cliq(&dir)
        .args(["preview", "--fav", "old", "--cmd", "greet", "--var", "who=legacy"])
        .assert()
        .success()
        .stdout("echo hello legacy\n");
}

// ---------------------------------------------------------------------------
// cliq config
// ---------------------------------------------------------------------------

#[test]
fn config_show_and_set_hub_url() {
    let dir = TempDir::new().unwrap();
    cliq(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:8080"));
    assert!(dir.path().join("config/settings.yaml").exists());

    cliq(&dir)
        .args(["config", "set-hub-url", "https://hub.example.com"])
        .assert()
        .success();
    cliq(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://hub.example.com"));

    cliq(&dir)
        .args(["config", "set-hub-url", "ftp://nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("http or https"));
}
