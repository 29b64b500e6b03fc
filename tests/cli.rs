use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sketchboard_cmd() -> Command {
    Command::cargo_bin("sketchboard").expect("binary exists")
}

const RECTANGLE_SCRIPT: &str = r#"# red rectangle
{"type":"set_stroke_color","color":"red"}
{"type":"select_tool","tool":"rectangle"}

{"type":"pointer_down","x":10,"y":10}
{"type":"pointer_move","x":50,"y":40}
{"type":"pointer_up"}
"#;

#[test]
fn sketchboard_help_prints_usage() {
    sketchboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Whiteboard drawing engine with undo history",
        ));
}

#[test]
fn no_flags_prints_script_usage() {
    sketchboard_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("sketchboard --replay <FILE>"));
}

#[test]
fn output_requires_replay_flag() {
    sketchboard_cmd()
        .args(["--output", "board.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replay_writes_png_output() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("rect.jsonl");
    let output = temp.path().join("out").join("board.png");
    fs::write(&script, RECTANGLE_SCRIPT).unwrap();

    sketchboard_cmd()
        .env("SKETCHBOARD_CONFIG", temp.path().join("missing.toml"))
        .arg("--replay")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied 5 events (1 undoable, 0 redoable)"));

    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}

#[test]
fn replay_reports_bad_line_number() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad.jsonl");
    fs::write(&script, "{\"type\":\"undo\"}\n{\"type\":\"teleport\"}\n").unwrap();

    sketchboard_cmd()
        .env("SKETCHBOARD_CONFIG", temp.path().join("missing.toml"))
        .arg("--replay")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn invalid_mode_is_rejected() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("rect.jsonl");
    fs::write(&script, RECTANGLE_SCRIPT).unwrap();

    sketchboard_cmd()
        .env("SKETCHBOARD_CONFIG", temp.path().join("missing.toml"))
        .arg("--replay")
        .arg(&script)
        .args(["--mode", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid board mode 'sepia'"));
}

#[test]
fn init_config_uses_env_path_and_refuses_overwrite() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("sketchboard").join("config.toml");

    sketchboard_cmd()
        .env("SKETCHBOARD_CONFIG", &config_path)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("[drawing]"));

    sketchboard_cmd()
        .env("SKETCHBOARD_CONFIG", &config_path)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_flag_changes_canvas_size() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "[canvas]\nwidth = 64\nheight = 32\n").unwrap();
    let script = temp.path().join("rect.jsonl");
    fs::write(&script, RECTANGLE_SCRIPT).unwrap();
    let output = temp.path().join("board.png");

    sketchboard_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--replay")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    // IHDR width and height, big-endian
    let bytes = fs::read(&output).unwrap();
    assert_eq!(&bytes[16..24], &[0, 0, 0, 64, 0, 0, 0, 32]);
}

#[test]
fn schema_dump_lists_sections() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"history\""))
        .stdout(predicate::str::contains("\"grid\""));
}
