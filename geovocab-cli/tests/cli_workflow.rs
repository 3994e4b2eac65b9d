//! Integration tests for the geovocab binary.
//!
//! Each test writes a config file, dictionary and journal location into a
//! temporary directory and drives the CLI through `--config`, so nothing
//! touches `~/.geovocab`.
//!
//! Run with: `cargo test --test cli_workflow`

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Temporary GeoVocab home with config, dictionary and journal paths.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(
            dir.path().join("dictionary.csv"),
            "hashVal,word\n9q8,apple\nyyk,river\n8yt,canyon\ngcp,lantern\n",
        )
        .expect("Failed to write dictionary");

        let config = format!(
            concat!(
                "[dictionary]\npath = {}\n\n",
                "[premium]\njournal = {}\n\n",
                "[listing]\nper_page = 2\nmax_per_page = 3\n\n",
                "[logging]\nfile = {}\n",
            ),
            dir.path().join("dictionary.csv").display(),
            dir.path().join("premium.jsonl").display(),
            dir.path().join("logs").join("geovocab.log").display(),
        );
        fs::write(dir.path().join("config.ini"), config).expect("Failed to write config");

        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn config_path(&self) -> PathBuf {
        self.path().join("config.ini")
    }

    /// Run the CLI with `--config` pointing at this workspace.
    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_geovocab"))
            .arg("--config")
            .arg(self.config_path())
            .args(args)
            .output()
            .expect("Failed to execute CLI command")
    }
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({}):\nstdout: {}\nstderr: {}",
            e,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

/// Assert a command succeeded.
fn assert_success(output: &Output, context: &str) {
    if !output.status.success() {
        panic!(
            "{} failed:\nstdout: {}\nstderr: {}",
            context,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

#[test]
fn test_words_and_locate_round_trip() {
    let ws = Workspace::new();

    let words = ws.run(&["words", "--lat", "37.7749", "--lon", "-122.4194"]);
    assert_success(&words, "words");
    let body = stdout_json(&words);
    assert_eq!(body["status"], 200);
    assert_eq!(body["message"], "Here's the 3 magic words to your location");
    assert_eq!(body["data"]["geoVocab"], "apple-river-canyon");
    assert_eq!(body["data"]["geoHash"], "9q8yyk8yt");

    let locate = ws.run(&["locate", "apple-river-canyon"]);
    assert_success(&locate, "locate");
    let body = stdout_json(&locate);
    assert_eq!(body["data"]["latitude"], 37.77488);
    assert_eq!(body["data"]["longitude"], -122.419388);
}

#[test]
fn test_invalid_latitude_exits_nonzero() {
    let ws = Workspace::new();

    let output = ws.run(&["words", "--lat", "123", "--lon", "0"]);
    assert!(!output.status.success());
    let body = stdout_json(&output);
    assert_eq!(body["status"], 400);
    assert_eq!(body["message"], "Invalid Latitude");
    assert_eq!(body["data"], Value::Null);
    assert!(body.as_object().unwrap().contains_key("data"));
}

#[test]
fn test_premium_registration_persists_between_runs() {
    let ws = Workspace::new();

    let added = ws.run(&["premium", "9q8yyk8yt", "golden-gate-view"]);
    assert_success(&added, "premium");
    assert_eq!(
        stdout_json(&added)["message"],
        "Successfully added a premium GeoVocab"
    );

    let words = ws.run(&["words", "--lat", "37.7749", "--lon", "-122.4194"]);
    assert_success(&words, "words after premium");
    assert_eq!(stdout_json(&words)["data"]["geoVocab"], "golden-gate-view");

    let duplicate = ws.run(&["premium", "9q8yyk8yt", "another-premium-phrase"]);
    assert!(!duplicate.status.success());
    assert_eq!(stdout_json(&duplicate)["status"], 400);

    let journal = fs::read_to_string(ws.path().join("premium.jsonl")).unwrap();
    assert_eq!(journal.lines().count(), 1);
}

#[test]
fn test_segment_lookup() {
    let ws = Workspace::new();

    let found = ws.run(&["segment", "yyk"]);
    assert_success(&found, "segment");
    assert_eq!(stdout_json(&found)["data"]["word"], "river");

    let missing = ws.run(&["segment", "zzz"]);
    assert!(!missing.status.success());
    let body = stdout_json(&missing);
    assert_eq!(body["status"], 404);
    assert_eq!(body["message"], "No word found for geohash 'zzz'");
}

#[test]
fn test_list_uses_configured_page_sizes() {
    let ws = Workspace::new();

    let output = ws.run(&["list"]);
    assert_success(&output, "list");
    let body = stdout_json(&output);
    assert_eq!(body["data"]["pagination"]["per_page"], 2);
    assert_eq!(body["data"]["pagination"]["total"], 4);
    assert_eq!(body["data"]["data"][0]["hashVal"], "8yt");

    let capped = ws.run(&["list", "--page", "2", "--per-page", "50"]);
    assert_success(&capped, "list capped");
    let body = stdout_json(&capped);
    assert_eq!(body["data"]["pagination"]["per_page"], 3);
    assert_eq!(body["data"]["data"].as_array().unwrap().len(), 1);
}

#[test]
fn test_health() {
    let ws = Workspace::new();

    let output = ws.run(&["health"]);
    assert_success(&output, "health");
    let body = stdout_json(&output);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "geovocab");
    assert_eq!(body["database"]["total_words"], 4);
    assert_eq!(body["database"]["total_premium"], 0);
}

#[test]
fn test_health_without_dictionary_is_unhealthy() {
    let ws = Workspace::new();
    fs::remove_file(ws.path().join("dictionary.csv")).unwrap();

    let output = ws.run(&["health"]);
    assert!(!output.status.success());
    let body = stdout_json(&output);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"]["connected"], false);
}

#[test]
fn test_codec_commands_need_no_config() {
    let dir = TempDir::new().unwrap();
    let absent = dir.path().join("absent.ini");

    let encode = Command::new(env!("CARGO_BIN_EXE_geovocab"))
        .arg("--config")
        .arg(&absent)
        .args(["encode", "--lat", "51.5074", "--lon", "-0.1278"])
        .output()
        .unwrap();
    assert_success(&encode, "encode");
    assert_eq!(stdout_json(&encode)["geoHash"], "gcpvj0duq");

    let decode = Command::new(env!("CARGO_BIN_EXE_geovocab"))
        .args(["decode", "EZS42"])
        .output()
        .unwrap();
    assert_success(&decode, "decode");
    let body = stdout_json(&decode);
    assert_eq!(body["geoHash"], "ezs42");
    assert_eq!(body["latitude"], 42.60498);
    assert_eq!(body["longitude"], -5.603027);

    assert!(!absent.exists());
}

#[test]
fn test_config_set_and_get() {
    let ws = Workspace::new();

    let set = ws.run(&["config", "set", "listing.per_page", "3"]);
    assert_success(&set, "config set");

    let get = ws.run(&["config", "get", "listing.per_page"]);
    assert_success(&get, "config get");
    assert_eq!(String::from_utf8_lossy(&get.stdout).trim(), "3");

    let bad = ws.run(&["config", "set", "listing.per_page", "0"]);
    assert!(!bad.status.success());

    let unknown = ws.run(&["config", "get", "no.such_key"]);
    assert!(!unknown.status.success());

    let path = ws.run(&["config", "path"]);
    assert_eq!(
        String::from_utf8_lossy(&path.stdout).trim(),
        ws.config_path().display().to_string()
    );
}
