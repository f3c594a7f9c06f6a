//! End-to-end tests for the polyrun binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENV_VARS: &[&str] = &[
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "POLYRUN_MODEL",
    "POLYRUN_LANG",
    "POLYRUN_NO_CACHE",
    "POLYRUN_PRINT_JS",
    "POLYRUN_FORCE_LLM",
    "POLYRUN_TIMEOUT_SECS",
    "POLYRUN_RUNTIME",
    "POLYRUN_CACHE_DIR",
    "POLYRUN_LOG",
];

/// Binary running in `dir` with a clean polyrun environment
fn polyrun(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_polyrun"));
    cmd.current_dir(dir);
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env("POLYRUN_CACHE_DIR", dir.join("cache"));
    cmd
}

#[test]
fn help_lists_options() {
    let dir = TempDir::new().unwrap();
    polyrun(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--print-js"))
        .stdout(predicate::str::contains("--force-llm"))
        .stdout(predicate::str::contains("cache"));
}

#[test]
fn cache_path_prints_configured_directory() {
    let dir = TempDir::new().unwrap();
    let expected = dir.path().join("cache");
    polyrun(dir.path())
        .args(["cache", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().as_ref()));
}

#[test]
fn cache_clear_removes_directory() {
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("cache");
    std::fs::create_dir_all(cache.join("ab")).unwrap();
    std::fs::write(cache.join("ab").join("abc.json"), "{}").unwrap();

    polyrun(dir.path()).args(["cache", "clear"]).assert().success();
    assert!(!cache.exists());
}

#[test]
fn missing_credential_fails_with_status_one() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("hello.py");
    std::fs::write(&source, "print('hi')").unwrap();

    polyrun(dir.path())
        .arg(&source)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn missing_source_file_fails() {
    let dir = TempDir::new().unwrap();
    polyrun(dir.path())
        .arg(dir.path().join("absent.py"))
        .assert()
        .code(1);
}

#[test]
fn javascript_passthrough_can_be_emitted_without_credentials() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("main.mjs");
    let out = dir.path().join("out.js");
    std::fs::write(&source, "console.log('as-is');\n").unwrap();

    polyrun(dir.path())
        .arg("--emit")
        .arg(&out)
        .arg("--print-js")
        .arg(&source)
        .assert()
        .success()
        .stderr(predicate::str::contains("console.log('as-is');"));

    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "console.log('as-is');\n"
    );
}

#[test]
fn short_language_alias_selects_passthrough() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.js");

    polyrun(dir.path())
        .args(["--lang", "js", "--emit"])
        .arg(&out)
        .write_stdin("console.log('short');")
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "console.log('short');");
}

#[cfg(unix)]
#[test]
fn eval_runs_snippet_with_configured_runtime() {
    let dir = TempDir::new().unwrap();
    polyrun(dir.path())
        .env("POLYRUN_RUNTIME", "true")
        .args(["eval", "console.log(1)"])
        .assert()
        .success();

    polyrun(dir.path())
        .env("POLYRUN_RUNTIME", "false")
        .args(["eval", "console.log(1)"])
        .assert()
        .code(1);
    assert!(!dir.path().join("cache").exists());
}

#[test]
fn eval_rejects_blank_snippet() {
    let dir = TempDir::new().unwrap();
    polyrun(dir.path())
        .args(["eval", "   "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("non-empty"));
}

#[test]
fn eval_prints_from_node() {
    if which::which("node").is_err() {
        eprintln!("node not found on PATH, skipping");
        return;
    }
    let dir = TempDir::new().unwrap();
    polyrun(dir.path())
        .args(["eval", "console.log(6 * 7)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("42"));
}

#[test]
fn stdin_source_with_explicit_language() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.js");

    polyrun(dir.path())
        .args(["--lang", "javascript", "--emit"])
        .arg(&out)
        .write_stdin("console.log(42);")
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&out).unwrap(), "console.log(42);");
}

#[test]
fn unknown_config_field_is_rejected() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("polyrun.json"), r#"{"apiKey":"x"}"#).unwrap();

    polyrun(dir.path())
        .args(["cache", "path"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("polyrun.json"));
}

#[tokio::test(flavor = "multi_thread")]
async fn translation_is_cached_between_invocations() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "```javascript\nconsole.log('hi');\n```"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let source = dir.path().join("hello.py");
    std::fs::write(&source, "print('hi')").unwrap();
    let base_url = format!("{}/v1", server.uri());

    for run in 0..2 {
        let out = dir.path().join(format!("out-{run}.js"));
        let dir_path = dir.path().to_path_buf();
        let source = source.clone();
        let base_url = base_url.clone();
        let out_path = out.clone();

        tokio::task::spawn_blocking(move || {
            polyrun(&dir_path)
                .env("OPENAI_API_KEY", "sk-test")
                .env("OPENAI_BASE_URL", base_url)
                .arg("--emit")
                .arg(&out_path)
                .arg(&source)
                .assert()
                .success();
        })
        .await
        .unwrap();

        assert_eq!(std::fs::read_to_string(&out).unwrap(), "console.log('hi');");
    }

    // `expect(1)` is verified when the server drops
}

#[test]
fn generated_program_exit_code_is_propagated() {
    if which::which("node").is_err() {
        eprintln!("node not found on PATH, skipping");
        return;
    }
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("fail.js");
    std::fs::write(&source, "process.exit(5);").unwrap();

    polyrun(dir.path()).arg(&source).assert().code(5);
}
