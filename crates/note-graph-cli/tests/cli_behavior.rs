//! Integration tests for the note-graph binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn note_graph_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_note-graph"))
}

/// A notes directory plus a config that writes into the same temp dir
/// without running Graphviz.
fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    let notes = dir.path().join("notes");
    fs::create_dir_all(notes.join("area")).unwrap();
    fs::write(
        notes.join("Projects.md"),
        "# Projects\nWork stuff #work\nSee [[Roadmap]] and [[Nowhere]].\n",
    )
    .unwrap();
    fs::write(notes.join("area/Roadmap.md"), "Quarter plans #work/planning\n").unwrap();
    fs::write(notes.join("Empty.md"), "").unwrap();

    let config = format!(
        "[graph]\nnotes_path = \"{}\"\ndestination = \"{}\"\nrun_graphviz = \"\"\n",
        notes.display(),
        dir.path().join("out").display()
    );
    fs::write(dir.path().join("config.toml"), config).unwrap();
    dir
}

fn generated(dir: &Path) -> String {
    fs::read_to_string(dir.join("out.gv")).unwrap()
}

mod dump_flags {
    use super::*;

    #[test]
    fn dump_config_prints_defaults() {
        note_graph_cmd()
            .arg("--dump-config")
            .assert()
            .success()
            .stdout(predicate::str::contains("[graph]"))
            .stdout(predicate::str::contains("[note_link]"));
    }

    #[test]
    fn dump_palette_prints_palettes() {
        note_graph_cmd()
            .arg("--dump-palette")
            .assert()
            .success()
            .stdout(predicate::str::contains("[solarized]"));
    }

    #[test]
    fn shows_help_with_flag() {
        note_graph_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--only-tags"));
    }
}

mod generation {
    use super::*;

    #[test]
    fn writes_graphviz_file() {
        let dir = workspace();

        note_graph_cmd()
            .arg("--config")
            .arg(dir.path().join("config.toml"))
            .assert()
            .success();

        let dot = generated(dir.path());
        assert!(dot.starts_with("digraph G_component_0 {"));
        assert!(dot.contains("\"#work\" -> \"Projects.md\""));
        assert!(dot.contains("\"Projects.md\" -> \"area/Roadmap.md\""));
    }

    #[test]
    fn problems_are_warnings_not_failures() {
        let dir = workspace();

        note_graph_cmd()
            .arg("--config")
            .arg(dir.path().join("config.toml"))
            .env("RUST_LOG", "warn")
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Could not find note titled <<Nowhere>>",
            ))
            .stderr(predicate::str::contains(
                "There is a problem parsing note <<Empty>>",
            ));
    }

    #[test]
    fn only_notes_hides_tags() {
        let dir = workspace();

        note_graph_cmd()
            .arg("--config")
            .arg(dir.path().join("config.toml"))
            .arg("--only-notes")
            .assert()
            .success();

        let dot = generated(dir.path());
        assert!(!dot.contains("#work"));
        assert!(dot.contains("\"Projects.md\" -> \"area/Roadmap.md\""));
    }

    #[test]
    fn anonymise_hides_names() {
        let dir = workspace();

        note_graph_cmd()
            .arg("--config")
            .arg(dir.path().join("config.toml"))
            .arg("--anonymise")
            .assert()
            .success();

        let dot = generated(dir.path());
        assert!(!dot.contains("Projects"));
        assert!(!dot.contains("Roadmap"));
        assert!(!dot.contains("bear://"));
    }

    #[test]
    fn notes_flag_overrides_config() {
        let dir = workspace();
        let other = dir.path().join("other");
        fs::create_dir_all(&other).unwrap();
        fs::write(other.join("Lonely.md"), "just #one tag").unwrap();

        note_graph_cmd()
            .arg("--config")
            .arg(dir.path().join("config.toml"))
            .arg("--notes")
            .arg(&other)
            .assert()
            .success();

        let dot = generated(dir.path());
        assert!(dot.contains("\"Lonely.md\""));
        assert!(!dot.contains("Projects.md"));
    }
}

mod failures {
    use super::*;

    #[test]
    fn missing_config_file_fails() {
        let dir = TempDir::new().unwrap();

        note_graph_cmd()
            .arg("--config")
            .arg(dir.path().join("absent.toml"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Configuration file not found"));
    }

    #[test]
    fn missing_notes_directory_fails() {
        let dir = workspace();

        note_graph_cmd()
            .arg("--config")
            .arg(dir.path().join("config.toml"))
            .arg("--notes")
            .arg(dir.path().join("nope"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load notes"));
    }

    #[test]
    fn bad_palette_reference_fails() {
        let dir = workspace();
        let config_path = dir.path().join("config.toml");
        let mut config = fs::read_to_string(&config_path).unwrap();
        config.push_str("\n[tag]\nfill_color = \"graph.red\"\n");
        fs::write(&config_path, config).unwrap();

        note_graph_cmd()
            .arg("--config")
            .arg(&config_path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("top level configuration names"));
    }
}
