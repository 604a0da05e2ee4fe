use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use prompt_booster::enhance;

fn prompt_booster(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("prompt-booster").unwrap();
    cmd.arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_enhance_prints_heuristic_prompt() {
    let dir = TempDir::new().unwrap();
    let expected = format!("{}\n", enhance("Write about dogs"));

    prompt_booster(&dir)
        .args(["enhance", "Write about dogs"])
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));
}

#[test]
fn test_enhance_reads_stdin() {
    let dir = TempDir::new().unwrap();

    prompt_booster(&dir)
        .arg("enhance")
        .write_stdin("  summarise the meeting notes \n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "summarise the meeting notes\n\nPlease be specific and clear.",
        ));
}

#[test]
fn test_boost_without_key_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[model]\napi_key_env = \"PROMPT_BOOSTER_CLI_TEST_MISSING_KEY\"\n",
    )
    .unwrap();

    prompt_booster(&dir)
        .current_dir(dir.path())
        .env_remove("PROMPT_BOOSTER_CLI_TEST_MISSING_KEY")
        .args(["boost", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PROMPT_BOOSTER_CLI_TEST_MISSING_KEY"));
}

#[test]
fn test_init_then_config() {
    let dir = TempDir::new().unwrap();

    prompt_booster(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Created"));

    prompt_booster(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("gemini-2.5-flash"));
}

#[test]
fn test_config_sees_key_from_dotenv() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[model]\napi_key_env = \"PROMPT_BOOSTER_CLI_TEST_DOTENV_KEY\"\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join(".env"),
        "PROMPT_BOOSTER_CLI_TEST_DOTENV_KEY=from-dotenv\n",
    )
    .unwrap();

    prompt_booster(&dir)
        .current_dir(dir.path())
        .env_remove("PROMPT_BOOSTER_CLI_TEST_DOTENV_KEY")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "API key (PROMPT_BOOSTER_CLI_TEST_DOTENV_KEY): set",
        ))
        .stdout(predicate::str::contains("from-dotenv").not());
}
