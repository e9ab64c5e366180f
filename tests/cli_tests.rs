use assert_cmd::Command;
use predicates::prelude::*;

fn splitter() -> Command {
    Command::cargo_bin("video-splitter").unwrap()
}

#[test]
fn test_version_flag() {
    splitter()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_positional_arguments() {
    splitter().assert().failure();
}

#[test]
fn test_nonexistent_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    splitter()
        .arg(dir.path().join("missing.mp4"))
        .arg(dir.path().join("clips"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("doesn't exist"));
}

#[test]
fn test_unknown_melt_binary_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.mp4");
    std::fs::write(&input, b"").unwrap();

    splitter()
        .arg("--melt")
        .arg("/nonexistent/melt")
        .arg(&input)
        .arg(dir.path().join("clips"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("melt binary not found"));
    assert!(!dir.path().join("clips").exists());
}

#[test]
fn test_dotted_container_extension_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.mp4");
    std::fs::write(&input, b"").unwrap();

    splitter()
        .env_remove("VIDEO_SPLITTER_CONFIG")
        .arg("--container-extension")
        .arg(".avi")
        .arg(&input)
        .arg(dir.path().join("clips"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("bare extension"));
    assert!(!dir.path().join("clips").exists());
}

#[test]
fn test_remove_trailing_frame_help() {
    Command::cargo_bin("video-splitter-remove-trailing-frame")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("video-splitter-remove-trailing-frame"));
}

#[cfg(unix)]
mod with_fake_melt {
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    use super::*;

    const FAKE_MELT: &str = r#"#!/bin/sh
if [ "$1" = "-query" ]; then
  printf -- '---\nfilters:\n  - motion_est\n...\n'
  exit 0
fi
if [ "$2" = "-attach" ]; then
  cat <<'EOF'
<?xml version="1.0"?>
<mlt>
  <producer id="producer0" in="0" out="120">
    <property name="resource">input</property>
  </producer>
  <playlist id="playlist0">
    <property name="shot_change_list">10=1;40=1;95=1</property>
  </playlist>
</mlt>
EOF
  exit 0
fi
out="${5#avformat:}"
: > "$out"
"#;

    fn install_fake_melt(dir: &Path) -> PathBuf {
        let melt = dir.join("melt");
        std::fs::write(&melt, FAKE_MELT).unwrap();
        std::fs::set_permissions(&melt, std::fs::Permissions::from_mode(0o755)).unwrap();
        melt
    }

    #[test]
    fn test_end_to_end_split() {
        let dir = tempfile::tempdir().unwrap();
        let melt = install_fake_melt(dir.path());
        let videos = dir.path().join("videos");
        std::fs::create_dir(&videos).unwrap();
        std::fs::write(videos.join("a.mp4"), b"").unwrap();
        std::fs::write(videos.join("readme.txt"), b"").unwrap();
        let clips = dir.path().join("clips");

        splitter()
            .env("VIDEO_SPLITTER_MELT", &melt)
            .env_remove("VIDEO_SPLITTER_CONFIG")
            .arg("--json")
            .arg(&videos)
            .arg(&clips)
            .assert()
            .success()
            .stdout(predicate::str::contains("\"done\""));

        assert!(clips.join("a.mp4-10-39.avi").exists());
        assert!(clips.join("a.mp4-40-94.avi").exists());
        assert_eq!(std::fs::read_dir(&clips).unwrap().count(), 2);
    }

    #[test]
    fn test_container_extension_flag() {
        let dir = tempfile::tempdir().unwrap();
        let melt = install_fake_melt(dir.path());
        let input = dir.path().join("a.mp4");
        std::fs::write(&input, b"").unwrap();
        let clips = dir.path().join("clips");

        splitter()
            .arg("--melt")
            .arg(&melt)
            .arg("--container-extension")
            .arg("mkv")
            .arg(&input)
            .arg(&clips)
            .arg("--")
            .arg("vcodec=libx264")
            .assert()
            .success();

        assert!(clips.join("a.mp4-10-39.mkv").exists());
    }

    #[test]
    fn test_non_empty_output_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let melt = install_fake_melt(dir.path());
        let input = dir.path().join("a.mp4");
        std::fs::write(&input, b"").unwrap();
        let clips = dir.path().join("clips");
        std::fs::create_dir(&clips).unwrap();
        std::fs::write(clips.join("old.avi"), b"").unwrap();

        splitter()
            .arg("--melt")
            .arg(&melt)
            .arg(&input)
            .arg(&clips)
            .assert()
            .failure()
            .stderr(predicate::str::contains("not empty"));
    }

    #[test]
    fn test_remove_trailing_frame_keeps_name() {
        let dir = tempfile::tempdir().unwrap();
        let melt = install_fake_melt(dir.path());
        let input = dir.path().join("a.mp4-10-40.avi");
        std::fs::write(&input, b"").unwrap();
        let clips = dir.path().join("repaired");

        Command::cargo_bin("video-splitter-remove-trailing-frame")
            .unwrap()
            .arg("--melt")
            .arg(&melt)
            .arg(&input)
            .arg(&clips)
            .assert()
            .success();

        assert!(clips.join("a.mp4-10-40.avi").exists());
    }
}
