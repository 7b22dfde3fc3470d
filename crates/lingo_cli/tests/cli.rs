//! Integration tests for the `lingo` binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

const DOC: &str = r#"
defaultLocale: en
prefix: "<gray>[Lobby]"
translations:
  welcome:
    en_US: ["Hi {name}!"]
  rules:
    en:
      - "<yellow>No griefing"
      - "<yellow>Have fun"
  only_de:
    de: "Nur Deutsch"
"#;

fn data_dir(root: &Path, file: &str) {
    let lang = root.join("language");
    fs::create_dir_all(&lang).unwrap();
    fs::write(lang.join(file), DOC).unwrap();
}

#[test]
fn resolves_with_placeholder() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("i18n.yml");
    fs::write(&file, DOC).unwrap();

    let mut command = cargo_bin_cmd!("lingo");
    command
        .current_dir(tmp.path())
        .args(["resolve", "welcome", "--locale", "EN_us", "--arg", "name=Ada", "--format", "plain"])
        .arg("--file")
        .arg(&file);
    command.assert().success().stdout("Hi Ada!\n");
}

#[test]
fn prefixes_every_line_from_data_dir() {
    let tmp = tempfile::tempdir().unwrap();
    data_dir(tmp.path(), "i18n-default.yml");

    let mut command = cargo_bin_cmd!("lingo");
    command
        .current_dir(tmp.path())
        .args(["resolve", "rules", "--prefix", "--format", "plain", "--data-dir", "."]);
    command
        .assert()
        .success()
        .stdout("[Lobby] No griefing\n[Lobby] Have fun\n");
}

#[test]
fn missing_key_prints_notice_and_succeeds() {
    let tmp = tempfile::tempdir().unwrap();
    data_dir(tmp.path(), "i18n.yml");

    let mut command = cargo_bin_cmd!("lingo");
    command
        .current_dir(tmp.path())
        .args(["resolve", "absent", "--format", "markup", "--data-dir", "."]);
    command
        .assert()
        .success()
        .stdout(contains("No Message for key \"<yellow>absent<gray>\"!"));
}

#[test]
fn config_file_supplies_source_and_format() {
    let tmp = tempfile::tempdir().unwrap();
    data_dir(tmp.path(), "i18n.yml");
    fs::write(
        tmp.path().join("lingo.toml"),
        "[translations]\ndata_dir = \".\"\n\n[output]\nformat = \"markup\"\n",
    )
    .unwrap();

    let mut command = cargo_bin_cmd!("lingo");
    command
        .current_dir(tmp.path())
        .args(["resolve", "rules", "--with-prefix", "*"]);
    command
        .assert()
        .success()
        .stdout("* <yellow>No griefing\n* <yellow>Have fun\n");
}

#[test]
fn strict_check_fails_on_keys_without_default() {
    let tmp = tempfile::tempdir().unwrap();
    data_dir(tmp.path(), "i18n.yml");

    let mut command = cargo_bin_cmd!("lingo");
    command
        .current_dir(tmp.path())
        .args(["check", "--strict", "--data-dir", "."]);
    command
        .assert()
        .failure()
        .stdout(contains("`only_de` has no en entry"));
}

#[test]
fn unparseable_file_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("broken.yml");
    fs::write(&file, "translations: [oops").unwrap();

    let mut command = cargo_bin_cmd!("lingo");
    command
        .current_dir(tmp.path())
        .args(["resolve", "welcome"])
        .arg("--file")
        .arg(&file);
    command
        .assert()
        .failure()
        .stderr(contains("Failed to load translations"));
}

#[test]
fn no_source_configured_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let mut command = cargo_bin_cmd!("lingo");
    command.current_dir(tmp.path()).args(["check"]);
    command
        .assert()
        .failure()
        .stderr(contains("No translation file configured"));
}

#[test]
fn config_paths_are_relative_to_the_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    data_dir(tmp.path(), "i18n.yml");
    let conf_dir = tmp.path().join("conf");
    let work_dir = tmp.path().join("work");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::create_dir_all(&work_dir).unwrap();
    fs::write(
        conf_dir.join("lingo.toml"),
        "[translations]\ndata_dir = \"..\"\n\n[output]\nformat = \"plain\"\n",
    )
    .unwrap();

    let mut command = cargo_bin_cmd!("lingo");
    command
        .current_dir(&work_dir)
        .args(["resolve", "rules", "--config"])
        .arg(conf_dir.join("lingo.toml"));
    command
        .assert()
        .success()
        .stdout("No griefing\nHave fun\n");
}
