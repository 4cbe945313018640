use std::process::Command;

fn run_in(dir: &std::path::Path, extra: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_icon_cli"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(["--font", "no-such-font-anywhere.ttf"])
        .args(extra)
        .output()
        .unwrap()
}

#[test]
fn default_run_prints_one_line_per_icon_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "Created icon16.png",
            "Created icon48.png",
            "Created icon128.png",
            "All icons created successfully!",
        ]
    );
    for size in [16, 48, 128] {
        assert!(dir.path().join(format!("icon{size}.png")).is_file());
    }
}

#[test]
fn second_run_succeeds_over_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run_in(dir.path(), &["--sizes", "24"]).status.success());
    assert!(run_in(dir.path(), &["--sizes", "24"]).status.success());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn rejects_bad_color_and_zero_size() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!run_in(dir.path(), &["--background", "#12"]).status.success());
    assert!(!run_in(dir.path(), &["--sizes", "16,0"]).status.success());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
