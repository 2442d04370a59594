use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchpad_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sketchpad").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

fn write_script(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("events.txt");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn sketchpad_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive line and rectangle sketching surface",
        ));
}

#[test]
fn no_script_prints_script_syntax() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("tool <none|selection|line|rectangle>"));
}

#[test]
fn replay_writes_png_and_dumps_moved_shape() {
    let temp = TempDir::new().unwrap();
    let script = write_script(
        &temp,
        "tool rectangle\ndown 10 10\nmove 50 30\nup\ntool selection\ndown 20 20\nmove 100 100\nup\n",
    );
    let output = temp.path().join("out/sketch.png");

    sketchpad_cmd(&temp)
        .args(["--size", "200x150", "--dump-shapes", "--script"])
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"rectangle\""))
        .stdout(predicate::str::contains("\"x1\": 100.0"))
        .stdout(predicate::str::contains("\"y2\": 120.0"));

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
}

#[test]
fn tool_flag_sets_initial_tool() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "down 0 0\nmove 10 0\nup\n");

    sketchpad_cmd(&temp)
        .args(["--size", "64x64", "--tool", "line", "--dump-shapes", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"line\""));
}

#[test]
fn invalid_script_reports_line() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "tool line\nscribble 1 2\n");

    sketchpad_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown command 'scribble'"));
}

#[test]
fn invalid_size_is_rejected() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd(&temp)
        .args(["--size", "wide", "--script", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid size 'wide'"));
}

#[test]
fn config_file_sets_default_tool() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(
        &config,
        "[canvas]\nwidth = 64\nheight = 64\n\n[drawing]\ndefault_tool = \"rectangle\"\n",
    )
    .unwrap();
    let script = write_script(&temp, "down 1 1\nmove 9 9\nup\n");

    sketchpad_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--dump-shapes")
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"rectangle\""));
}
