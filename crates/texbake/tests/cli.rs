//! End-to-end runs of the `texbake` binary against a stand-in converter.
//!
//! The stand-in is a shell script, so these tests only run on Unix.
#![cfg(unix)]

use image::{Rgba, RgbaImage};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const INPUT_DIR: &str = "src/renderer/src/assets/avatars/character_avatars";

/// Copies a prepared PNG to `<out dir>/<stem>.png`, the way the real
/// converter names its output. Sources named `c.dds` fail.
const FAKE_CONVERTER: &str = r#"#!/bin/sh
out_dir="$5"
source="$6"
name=$(basename "$source")
if [ "$name" = "c.dds" ]; then
  echo "ERROR: cannot decode $name" >&2
  exit 1
fi
cp "$(dirname "$0")/fixture.png" "$out_dir/${name%.*}.png"
"#;

struct Repo {
    _dir: tempfile::TempDir,
    root: PathBuf,
}

impl Repo {
    fn new(sources: &[&str]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();

        let tool = root.join("texconv.exe");
        std::fs::write(&tool, FAKE_CONVERTER).unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 255, 0, 255]));
        img.save(root.join("fixture.png")).unwrap();

        let input = root.join(INPUT_DIR);
        std::fs::create_dir_all(&input).unwrap();
        for name in sources {
            std::fs::write(input.join(name), b"DDS ").unwrap();
        }

        Self { _dir: dir, root }
    }

    fn input(&self) -> PathBuf {
        self.root.join(INPUT_DIR)
    }

    fn run(&self) -> Output {
        self.run_with(&[])
    }

    fn run_with(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_texbake"))
            .arg("--root")
            .arg(&self.root)
            .args(args)
            .env("HOME", &self.root)
            .env_remove("XDG_CONFIG_HOME")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .output()
            .unwrap()
    }
}

fn names_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn assert_rotated(path: &Path) {
    let img = image::open(path).unwrap().to_rgba8();
    assert_eq!(img.get_pixel(0, 0), &Rgba([0, 255, 0, 255]));
    assert_eq!(img.get_pixel(1, 0), &Rgba([255, 0, 0, 255]));
}

#[test]
fn converts_renames_rotates_and_removes_sources() {
    let repo = Repo::new(&["a.dds", "b_r.dds"]);

    let output = repo.run();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(names_in(&repo.input()), vec!["A.png", "B.png"]);
    assert_rotated(&repo.input().join("A.png"));
    assert_rotated(&repo.input().join("B.png"));
}

#[test]
fn converter_failure_is_logged_and_exit_stays_zero() {
    let repo = Repo::new(&["a.dds", "c.dds"]);

    let output = repo.run();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(names_in(&repo.input()), vec!["A.png", "c.dds"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("c.dds"), "stderr: {stderr}");
    assert!(stderr.contains("cannot decode"), "stderr: {stderr}");
}

#[test]
fn missing_input_dir_exits_with_one() {
    let repo = Repo::new(&[]);
    std::fs::remove_dir_all(repo.root.join("src")).unwrap();

    let output = repo.run();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(names_in(&repo.root), vec!["fixture.png", "texconv.exe"]);
}

#[test]
fn missing_converter_exits_with_one() {
    let repo = Repo::new(&["a.dds"]);
    std::fs::remove_file(repo.root.join("texconv.exe")).unwrap();

    let output = repo.run();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(names_in(&repo.input()), vec!["a.dds"]);
}

#[test]
fn empty_directory_exits_cleanly() {
    let repo = Repo::new(&[]);

    let output = repo.run();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No .dds files found"), "stderr: {stderr}");
}

#[test]
fn config_show_prints_resolved_paths() {
    let repo = Repo::new(&[]);

    let output = repo.run_with(&["config", "show"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let input = format!("# input directory: {}", repo.input().display());
    let tool = repo.root.join("texconv.exe");
    let converter = format!("# converter:       {}", tool.display());
    assert!(stdout.lines().any(|l| l == input), "stdout: {stdout}");
    assert!(stdout.lines().any(|l| l == converter), "stdout: {stdout}");
}

#[test]
fn config_init_refuses_overwrite_without_force() {
    let repo = Repo::new(&[]);
    let path_output = repo.run_with(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&path_output.stdout);
    let config_file = PathBuf::from(stdout.lines().next().unwrap());
    assert!(config_file.starts_with(&repo.root));

    let first = repo.run_with(&["config", "init"]);
    assert!(first.status.success());
    assert!(config_file.is_file());

    std::fs::write(&config_file, "# stale\n").unwrap();
    let second = repo.run_with(&["config", "init"]);
    assert_eq!(second.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("already exists"), "stderr: {stderr}");
    assert_eq!(std::fs::read_to_string(&config_file).unwrap(), "# stale\n");

    let forced = repo.run_with(&["config", "init", "--force"]);
    assert!(forced.status.success());
    let written = std::fs::read_to_string(&config_file).unwrap();
    assert!(written.contains("[paths]"), "config: {written}");
    assert!(!written.contains("# stale"));
}
