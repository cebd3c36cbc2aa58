// tests/error_handling.rs

mod common;
use crate::common::capture_logs;

use std::io;

use hookshell::command::{resolve, CommandSpec, ProcessKey};
use hookshell::errors::{ErrorPolicy, HookshellError};

fn failure() -> HookshellError {
    HookshellError::ProcessFailed {
        key: ProcessKey::from("npm test"),
        reason: "exited with code 1".to_string(),
    }
}

#[test]
fn fatal_policy_hands_the_error_back() {
    let (logs, _guard) = capture_logs();
    let err = ErrorPolicy::fatal().report(failure()).unwrap_err();
    assert_eq!(err.to_string(), "Error while running `npm test`: exited with code 1");
    assert!(logs.errors().is_empty());
}

#[test]
fn watch_policy_logs_and_continues() {
    let (logs, _guard) = capture_logs();
    ErrorPolicy::watching().report(failure()).unwrap();
    let errors = logs.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Error while running `npm test`: exited with code 1"));
}

#[test]
fn policy_follows_watch_flag() {
    assert!(ErrorPolicy::new(true).is_watch());
    assert!(!ErrorPolicy::new(false).is_watch());
    assert_eq!(ErrorPolicy::default(), ErrorPolicy::fatal());
}

#[test]
fn spawn_error_names_key_and_cause() {
    let err = HookshellError::Spawn {
        key: ProcessKey::from("webpack --watch"),
        source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
    };
    assert_eq!(
        err.to_string(),
        "Error while running `webpack --watch`: No such file or directory"
    );
    assert!(std::error::Error::source(&err).is_some());
    assert!(!err.is_configuration());
}

#[test]
fn unknown_hook_message() {
    let err = HookshellError::UnknownHook("afterBuild".to_string());
    assert_eq!(err.to_string(), "The hook afterBuild does not exist on the event source.");
    assert!(err.is_configuration());
}

#[test]
fn resolution_failure_converts_transparently() {
    let failure = resolve(&CommandSpec::structured("", Vec::<String>::new()), &[]).unwrap_err();
    let message = failure.to_string();
    let err: HookshellError = failure.into();
    assert!(matches!(err, HookshellError::Resolution(_)));
    assert_eq!(err.to_string(), message);
    assert!(message.starts_with("Missing command for script"));
    assert!(err.is_configuration());
}

#[tokio::test]
async fn closed_channel_maps_to_channel_closed() {
    let (tx, rx) = tokio::sync::mpsc::channel::<u8>(1);
    drop(rx);
    let err: HookshellError = tx.send(1).await.unwrap_err().into();
    assert!(matches!(err, HookshellError::ChannelClosed));
}
