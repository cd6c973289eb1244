use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const DOCUMENT: &str = "The cat sat on the mat. \
                        Then the cat jumped over the dog. \
                        Apples and bananas are delicious. \
                        I love to walk under the blue sky.";

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn tinyrag() -> Command {
    Command::cargo_bin("tinyrag").unwrap()
}

#[test]
fn test_vocab_lists_sorted_terms() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "corpus.txt", "The cat sat. The dog ran.");

    tinyrag()
        .arg("vocab")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "cat: 0\ndog: 1\nran: 2\nsat: 3\nthe: 4\n",
        ))
        .stdout(predicate::str::contains("Total vocabulary size: 5"));
}

#[test]
fn test_chunk_sentences() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "doc.txt", DOCUMENT);

    tinyrag()
        .args(["chunk", "--policy", "sentences"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Then the cat jumped over the dog\n"))
        .stdout(predicate::str::contains("Total chunks: 4"));
}

#[test]
fn test_chunk_words_small_budget() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "doc.txt", "aaa bbb ccc ddd e");

    tinyrag()
        .args(["chunk", "--chunk-size", "10"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("aaa bbb\n"))
        .stdout(predicate::str::contains("ccc ddd e\n"))
        .stdout(predicate::str::contains("Total chunks: 2"));
}

#[test]
fn test_search_json_euclidean() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "doc.txt", DOCUMENT);

    let output = tinyrag()
        .args(["search", "--policy", "sentences", "--metric", "euclidean", "-k", "1"])
        .arg(&file)
        .arg("cat dog jumped")
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["text"], "Then the cat jumped over the dog");
}

#[test]
fn test_search_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "doc.txt", DOCUMENT);
    let config = write_fixture(
        &dir,
        "tinyrag.toml",
        "[chunking]\npolicy = \"sentences\"\n\n[store]\ntop_k = 2\n",
    );

    let output = tinyrag()
        .arg("--config")
        .arg(&config)
        .arg("search")
        .arg(&file)
        .arg("apples bananas")
        .arg("--json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["text"], "Apples and bananas are delicious");
}

#[test]
fn test_search_empty_document() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "empty.txt", "");

    tinyrag()
        .arg("search")
        .arg(&file)
        .arg("anything")
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"));
}

#[test]
fn test_missing_file_fails() {
    tinyrag()
        .args(["vocab", "/nonexistent/corpus.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "doc.txt", DOCUMENT);
    let config = write_fixture(&dir, "bad.toml", "[chunking]\nchunk_size = 0\n");

    tinyrag()
        .arg("--config")
        .arg(&config)
        .arg("chunk")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn test_chunk_json_includes_ids_and_hashes() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "doc.txt", "First. Second. First");

    let output = tinyrag()
        .args(["chunk", "--policy", "sentences", "--json"])
        .arg(&file)
        .output()
        .unwrap();

    assert!(output.status.success());
    let chunks: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let chunks = chunks.as_array().unwrap();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[1]["content"], "Second");
    assert_eq!(chunks[1]["index"], 1);
    assert!(chunks[2]["id"].as_str().unwrap().ends_with(":chunk:3"));

    let hash = chunks[0]["hash"].as_str().unwrap();
    assert_eq!(hash.len(), 16);
    assert_eq!(chunks[0]["hash"], chunks[2]["hash"]);
    assert_ne!(chunks[0]["hash"], chunks[1]["hash"]);
}

#[test]
fn test_embed_prints_count_vector() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "corpus.txt", "cat dog sat");

    tinyrag()
        .arg("embed")
        .arg(&file)
        .arg("cat cat dog")
        .assert()
        .success()
        .stdout(predicate::str::contains("cat cat dog: [2, 1, 0]"))
        .stdout(predicate::str::contains("Dimensions: 3"))
        .stdout(predicate::str::contains("Score").not());
}

#[test]
fn test_embed_pairwise_score() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "corpus.txt", "cat dog sat");

    tinyrag()
        .args(["embed", "--metric", "euclidean"])
        .arg(&file)
        .args(["cat", "dog", "cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score(1, 2) = 1.4142"))
        .stdout(predicate::str::contains("Score(1, 3) = 0.0000"))
        .stdout(predicate::str::contains("Score(2, 3) = 1.4142"));
}

#[test]
fn test_metric_from_config_matches_flag() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "doc.txt", DOCUMENT);
    let config = write_fixture(
        &dir,
        "tinyrag.toml",
        "[chunking]\npolicy = \"sentences\"\n\n[store]\nmetric = \"euclidean\"\n",
    );

    let from_config = tinyrag()
        .arg("--config")
        .arg(&config)
        .arg("search")
        .arg(&file)
        .args(["cat dog", "--json"])
        .output()
        .unwrap();
    let from_flag = tinyrag()
        .args(["search", "--policy", "sentences", "--metric", "euclidean"])
        .arg(&file)
        .args(["cat dog", "--json"])
        .output()
        .unwrap();

    assert!(from_config.status.success());
    assert!(from_flag.status.success());
    let from_config: serde_json::Value = serde_json::from_slice(&from_config.stdout).unwrap();
    let from_flag: serde_json::Value = serde_json::from_slice(&from_flag.stdout).unwrap();
    assert_eq!(from_config, from_flag);
    // Raw counts: "Then the cat jumped over the dog" is sqrt(7) from "cat dog".
    assert_eq!(from_flag[0]["text"], "Then the cat jumped over the dog");
    let score = from_flag[0]["score"].as_f64().unwrap();
    assert!((score - 7f64.sqrt()).abs() < 1e-4);
}
