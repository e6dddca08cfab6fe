//! Integration tests for the morphdiff CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn morphdiff() -> Command {
    let mut cmd = Command::cargo_bin("morphdiff").unwrap();
    cmd.env_remove("MORPHDIFF_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_demo_prints_both_tables() {
    morphdiff()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("English words:"))
        .stdout(predicate::str::contains("Russian words:"))
        .stdout(predicate::str::contains("LexiconLemmatizer"))
        .stdout(predicate::str::contains("Porter2Stemmer"))
        .stdout(predicate::str::contains("MorphAnalyzer"))
        .stdout(predicate::str::contains("SnowballStemmer"));
}

#[test]
fn test_demo_english_comes_first() {
    let output = morphdiff().arg("demo").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let english = stdout.find("English words:").unwrap();
    let russian = stdout.find("Russian words:").unwrap();
    assert!(english < russian);
}

#[test]
fn test_compare_words() {
    morphdiff()
        .args(["compare", "-l", "en", "mice", "running"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mouse"))
        .stdout(predicate::str::contains("agreement: 1/2"));
}

#[test]
fn test_compare_input_file() {
    morphdiff()
        .args(["compare", "-l", "ru", "-i"])
        .arg(fixture_path("russian-words.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("хороший"))
        .stdout(predicate::str::contains("мышь"))
        .stdout(predicate::str::contains("быть"));
}

#[test]
fn test_compare_unsupported_language_fails() {
    morphdiff()
        .args(["compare", "-l", "fr", "maisons"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("language 'fr' not supported"));
}

#[test]
fn test_compare_without_words_fails() {
    morphdiff()
        .args(["compare", "-l", "en"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No words to process"));
}

#[test]
fn test_compare_missing_input_file() {
    morphdiff()
        .args(["compare", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_json_output() {
    let output = morphdiff()
        .args(["compare", "-l", "en", "-f", "json", "-i"])
        .arg(fixture_path("english-words.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = value[0]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2]["word"], "better");
    assert_eq!(rows[2]["lemma"], "well");
    assert_eq!(rows[3]["stem"], "studi");
}

#[test]
fn test_markdown_output() {
    morphdiff()
        .args(["demo", "-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## English"))
        .stdout(predicate::str::contains("| мыши | мышь | мыш | no |"))
        .stdout(predicate::str::contains("*Agreement:"));
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("report.txt");

    morphdiff()
        .args(["compare", "-l", "ru", "был", "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("Russian words:"));
    assert!(content.contains("быть"));
}

#[test]
fn test_stem_command() {
    morphdiff()
        .args(["stem", "-l", "en", "running", "jumped", "mice"])
        .assert()
        .success()
        .stdout("run\njump\nmice\n");
}

#[test]
fn test_stem_strict_unsupported_language() {
    morphdiff()
        .args(["stem", "-l", "fr", "maisons"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("language 'fr' not supported"));
}

#[test]
fn test_stem_lenient_unsupported_language() {
    morphdiff()
        .args(["stem", "-l", "fr", "--lenient", "maisons"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn test_lemmatize_command() {
    morphdiff()
        .args(["lemmatize", "-l", "ru", "мыши", "есть", "счастливейший"])
        .assert()
        .success()
        .stdout("мышь\nесть\nсчастливый\n");
}

#[test]
fn test_lemmatize_batch_mismatch() {
    morphdiff()
        .args(["lemmatize", "-l", "en", "--batch", "well-known"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("results for 1 words"));
}

#[test]
fn test_list_languages() {
    morphdiff()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("Russian"));
}

#[test]
fn test_list_formats() {
    morphdiff()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout("text\njson\nmarkdown\n");
}

#[test]
fn test_generate_then_validate_lexicon() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon_path = temp_dir.path().join("en.toml");

    morphdiff()
        .args(["generate-lexicon", "-l", "en", "-o"])
        .arg(&lexicon_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("template written"));

    let content = fs::read_to_string(&lexicon_path).unwrap();
    assert!(content.contains("[metadata]"));
    assert!(content.contains("code = \"en\""));

    morphdiff()
        .args(["validate", "--lexicon"])
        .arg(&lexicon_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Lexicon is valid!"))
        .stdout(predicate::str::contains("Forms: 1"));
}

#[test]
fn test_validate_invalid_lexicon() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon_path = temp_dir.path().join("broken.toml");
    fs::write(
        &lexicon_path,
        r#"
[metadata]
code = "en"
name = "Broken"

[forms]
geese = []
"#,
    )
    .unwrap();

    morphdiff()
        .args(["validate", "--lexicon"])
        .arg(&lexicon_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Lexicon is invalid!"))
        .stderr(predicate::str::contains("has no parses"));
}

#[test]
fn test_external_lexicon_replaces_builtin() {
    let temp_dir = TempDir::new().unwrap();
    let lexicon_path = temp_dir.path().join("custom.toml");
    fs::write(
        &lexicon_path,
        r#"
[metadata]
code = "en"
name = "CustomLexicon"

[forms]
geese = [{ normal_form = "goose", tag = "NOUN" }]
"#,
    )
    .unwrap();

    morphdiff()
        .args(["compare", "-l", "en", "geese", "--lexicon"])
        .arg(&lexicon_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("CustomLexicon"))
        .stdout(predicate::str::contains("goose"));
}

#[test]
fn test_config_file_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("morphdiff.toml");
    fs::write(
        &config_path,
        r#"
[processing]
default_language = "russian"

[output]
default_format = "json"
pretty_json = false
"#,
    )
    .unwrap();

    let output = morphdiff()
        .args(["compare", "мыши", "--config"])
        .arg(&config_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["language"], "russian");
    assert_eq!(value[0]["rows"][0]["lemma"], "мышь");
}

#[test]
fn test_quiet_suppresses_diagnostics() {
    morphdiff()
        .args(["-q", "stem", "-l", "fr", "--lenient", "maisons"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
