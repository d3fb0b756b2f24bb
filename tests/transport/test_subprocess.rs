//! Tests for `SubprocessInvoker`
//!
//! Runs the invoker against `/bin/sh` scripts that stand in for the Claude CLI.

#![cfg(unix)]

#[path = "../common/mod.rs"]
mod common;

use claude_context_check::{ClaudeError, InvocationRequest, Invoker, SubprocessInvoker};
use common::{MockCli, SPAWN_LOCK};

#[tokio::test]
async fn test_output_is_returned_byte_for_byte() {
    let _guard = SPAWN_LOCK.lock().await;
    let mock = MockCli::new("cat");
    let invoker = SubprocessInvoker::new(Some(mock.path.clone())).unwrap();

    let prompt = "  Tell me one interesting fact about cats.\n\n\ttrailing  ";
    let output = invoker.invoke(&InvocationRequest::fresh(prompt)).await.unwrap();
    assert_eq!(output, prompt);
}

#[tokio::test]
async fn test_fresh_request_passes_no_arguments() {
    let _guard = SPAWN_LOCK.lock().await;
    let mock = MockCli::new(r#"cat > /dev/null; for a in "$@"; do printf '%s|' "$a"; done; printf '%s' "$#""#);
    let invoker = SubprocessInvoker::new(Some(mock.path.clone())).unwrap();

    let output = invoker.invoke(&InvocationRequest::fresh("hi")).await.unwrap();
    assert_eq!(output, "0");
}

#[tokio::test]
async fn test_continued_request_passes_continue_flag() {
    let _guard = SPAWN_LOCK.lock().await;
    let mock = MockCli::new(r#"cat > /dev/null; for a in "$@"; do printf '%s|' "$a"; done; printf '%s' "$#""#);
    let invoker = SubprocessInvoker::new(Some(mock.path.clone())).unwrap();

    let output = invoker.invoke(&InvocationRequest::continued("hi")).await.unwrap();
    assert_eq!(output, "-c|1");

    let invoker = invoker.with_continue_flag("--continue");
    let output = invoker.invoke(&InvocationRequest::continued("hi")).await.unwrap();
    assert_eq!(output, "--continue|1");
}

#[tokio::test]
async fn test_non_zero_exit_reports_code_and_stderr() {
    let _guard = SPAWN_LOCK.lock().await;
    let mock = MockCli::new("cat > /dev/null; echo 'partial answer'; printf 'quota exceeded\\n' >&2; exit 7");
    let invoker = SubprocessInvoker::new(Some(mock.path.clone())).unwrap();

    let err = invoker
        .invoke(&InvocationRequest::fresh("hi"))
        .await
        .unwrap_err();

    match &err {
        ClaudeError::Process { exit_code, stderr } => {
            assert_eq!(*exit_code, 7);
            assert_eq!(stderr, "quota exceeded\n");
        }
        other => panic!("Wrong error type: {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains('7'));
    assert!(message.contains("quota exceeded\n"));
}

#[tokio::test]
async fn test_stderr_is_ignored_on_success() {
    let _guard = SPAWN_LOCK.lock().await;
    let mock = MockCli::new("cat > /dev/null; echo out; echo 'warning: slow' >&2");
    let invoker = SubprocessInvoker::new(Some(mock.path.clone())).unwrap();

    let output = invoker.invoke(&InvocationRequest::fresh("hi")).await.unwrap();
    assert_eq!(output, "out\n");
}

#[tokio::test]
async fn test_large_prompt_and_output_do_not_deadlock() {
    let _guard = SPAWN_LOCK.lock().await;
    let mock = MockCli::new("cat");
    let invoker = SubprocessInvoker::new(Some(mock.path.clone())).unwrap();

    // Several times the typical 64KiB pipe buffer in both directions.
    let prompt = "dogs and cats\n".repeat(32 * 1024);
    let output = invoker.invoke(&InvocationRequest::fresh(prompt.clone())).await.unwrap();
    assert_eq!(output.len(), prompt.len());
    assert_eq!(output, prompt);
}

#[tokio::test]
async fn test_child_that_ignores_stdin_still_succeeds() {
    let _guard = SPAWN_LOCK.lock().await;
    let mock = MockCli::new("printf 'ignored you'");
    let invoker = SubprocessInvoker::new(Some(mock.path.clone())).unwrap();

    let prompt = "x".repeat(1024 * 1024);
    let output = invoker.invoke(&InvocationRequest::fresh(prompt)).await.unwrap();
    assert_eq!(output, "ignored you");
}

#[tokio::test]
async fn test_killed_child_is_reported_as_terminated() {
    let _guard = SPAWN_LOCK.lock().await;
    let mock = MockCli::new("cat > /dev/null; printf 'dying' >&2; kill -9 $$");
    let invoker = SubprocessInvoker::new(Some(mock.path.clone())).unwrap();

    let err = invoker
        .invoke(&InvocationRequest::fresh("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClaudeError::Terminated { ref stderr } if stderr == "dying"));
}

#[tokio::test]
async fn test_invalid_utf8_output_is_replaced() {
    let _guard = SPAWN_LOCK.lock().await;
    let mock = MockCli::new(r"cat > /dev/null; printf 'a\377b'");
    let invoker = SubprocessInvoker::new(Some(mock.path.clone())).unwrap();

    let output = invoker.invoke(&InvocationRequest::fresh("hi")).await.unwrap();
    assert_eq!(output, "a\u{FFFD}b");
}

#[tokio::test]
async fn test_large_stderr_with_ignored_prompt_reports_exit_code() {
    let _guard = SPAWN_LOCK.lock().await;
    let mock = MockCli::new("head -c 200000 /dev/zero | tr '\\0' e >&2; exit 42");
    let invoker = SubprocessInvoker::new(Some(mock.path.clone())).unwrap();

    let prompt = "x".repeat(2 * 1024 * 1024);
    let err = invoker
        .invoke(&InvocationRequest::fresh(prompt))
        .await
        .unwrap_err();

    match err {
        ClaudeError::Process { exit_code, stderr } => {
            assert_eq!(exit_code, 42);
            assert_eq!(stderr.len(), 200_000);
        }
        other => panic!("Wrong error type: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_interpreter_is_spawn_error() {
    let _guard = SPAWN_LOCK.lock().await;
    let mock = MockCli::with_contents("#!/nonexistent/interpreter\necho unreachable\n");
    let invoker = SubprocessInvoker::new(Some(mock.path.clone())).unwrap();

    let err = invoker
        .invoke(&InvocationRequest::fresh("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClaudeError::Spawn(_)), "got {err:?}");
    assert!(err.to_string().starts_with("Failed to start Claude Code:"));
}

#[test]
fn test_missing_executable_is_cli_not_found() {
    let result = SubprocessInvoker::new(Some("/nonexistent/dir/claude".into()));
    assert!(matches!(result, Err(ClaudeError::CliNotFound(_))));
}

#[test]
fn test_find_cli() {
    // This will succeed if claude is installed
    let result = SubprocessInvoker::find_cli();
    println!("CLI search result: {result:?}");
}
