// tests/dispatcher_binding.rs

mod common;
use crate::common::builders::BindingsBuilder;
use crate::common::capture_logs;
use crate::common::fake_launcher::FakeLauncher;

use tokio::sync::mpsc;

use hookshell::command::{CommandSpec, StaticSpec};
use hookshell::engine::RuntimeEvent;
use hookshell::errors::{ErrorPolicy, HookshellError};
use hookshell::hooks::{Dispatcher, EventSource, HookTable};
use hookshell::supervisor::Supervisor;

fn channel() -> (mpsc::Sender<RuntimeEvent>, mpsc::Receiver<RuntimeEvent>) {
    mpsc::channel(16)
}

#[test]
fn unknown_hook_is_fatal_before_anything_is_subscribed() {
    let (tx, _rx) = channel();
    let mut table = HookTable::new(["afterCompile"]);
    let bindings = BindingsBuilder::new()
        .bind("afterCompile", CommandSpec::literal("ls"))
        .bind("beforeRun", CommandSpec::literal("cat README.md"))
        .build();

    let err = Dispatcher::bind(bindings, &mut table, &tx, ErrorPolicy::fatal()).unwrap_err();

    match err {
        HookshellError::UnknownHook(name) => assert_eq!(name, "beforeRun"),
        other => panic!("expected UnknownHook, got {other:?}"),
    }
    assert_eq!(table.subscriber_count("afterCompile"), 0);
}

#[test]
fn unknown_hook_message_names_the_hook() {
    let err = HookshellError::UnknownHook("beforeRun".to_string());
    assert_eq!(
        err.to_string(),
        "The hook beforeRun does not exist on the event source."
    );
    assert!(err.is_configuration());
}

#[test]
fn unknown_hook_is_logged_and_skipped_in_watch_mode() {
    let (logs, _guard) = capture_logs();
    let (tx, _rx) = channel();
    let mut table = HookTable::new(["afterCompile"]);
    let bindings = BindingsBuilder::new()
        .bind("afterCompile", CommandSpec::literal("ls"))
        .bind("beforeRun", CommandSpec::literal("cat README.md"))
        .build();

    let dispatcher =
        Dispatcher::bind(bindings, &mut table, &tx, ErrorPolicy::watching()).unwrap();

    assert!(dispatcher.is_bound("afterCompile"));
    assert!(!dispatcher.is_bound("beforeRun"));
    assert_eq!(table.subscriber_count("afterCompile"), 1);
    assert!(logs.contains("The hook beforeRun does not exist on the event source."));
}

#[test]
fn each_hook_is_subscribed_once() {
    let (tx, _rx) = channel();
    let mut table = HookTable::new(["afterCompile", "done"]);
    let bindings = BindingsBuilder::new()
        .bind("afterCompile", CommandSpec::literal("ls"))
        .bind("afterCompile", CommandSpec::structured("git", ["status"]))
        .build();

    Dispatcher::bind(bindings, &mut table, &tx, ErrorPolicy::fatal()).unwrap();

    assert_eq!(table.subscriber_count("afterCompile"), 1);
    assert_eq!(table.subscriber_count("done"), 0);
    assert!(table.has_event("done"));
}

#[test]
fn firing_runs_bound_specs_in_list_order() {
    let (tx, _rx) = channel();
    let mut table = HookTable::new(["afterCompile"]);
    let bindings = BindingsBuilder::new()
        .bind("afterCompile", CommandSpec::literal("ls"))
        .bind("afterCompile", CommandSpec::structured("git", ["status"]))
        .bind(
            "afterCompile",
            CommandSpec::derived(|p| StaticSpec::Literal(format!("echo {}", p.join(" ")))),
        )
        .build();
    let dispatcher = Dispatcher::bind(bindings, &mut table, &tx, ErrorPolicy::fatal()).unwrap();

    let launcher = FakeLauncher::new();
    let log = launcher.log();
    let mut supervisor = Supervisor::new(launcher, ErrorPolicy::fatal());

    dispatcher
        .fire("afterCompile", &["bundle.js".to_string()], &mut supervisor)
        .unwrap();

    let keys: Vec<_> = log
        .launched()
        .into_iter()
        .map(|r| r.key.as_str().to_string())
        .collect();
    assert_eq!(keys, vec!["ls", "git status", "echo bundle.js"]);
    let git = &log.launched()[1];
    assert_eq!(git.command.program, "git");
    assert_eq!(git.command.args, vec!["status".to_string()]);
}

#[test]
fn firing_an_unbound_hook_does_nothing() {
    let (tx, _rx) = channel();
    let mut table = HookTable::new(["afterCompile", "done"]);
    let bindings = BindingsBuilder::new()
        .bind("afterCompile", CommandSpec::literal("ls"))
        .build();
    let dispatcher = Dispatcher::bind(bindings, &mut table, &tx, ErrorPolicy::fatal()).unwrap();

    let launcher = FakeLauncher::new();
    let log = launcher.log();
    let mut supervisor = Supervisor::new(launcher, ErrorPolicy::fatal());

    dispatcher.fire("done", &[], &mut supervisor).unwrap();
    assert_eq!(log.spawn_attempts(), 0);
}

#[tokio::test]
async fn hook_table_fire_notifies_the_runtime_channel() {
    let (tx, mut rx) = channel();
    let mut table = HookTable::new(["beforeRun"]);
    let bindings = BindingsBuilder::new()
        .bind("beforeRun", CommandSpec::literal("cat README.md"))
        .build();
    Dispatcher::bind(bindings, &mut table, &tx, ErrorPolicy::fatal()).unwrap();

    let notified = table
        .fire("beforeRun", vec!["compiler".to_string()])
        .await
        .unwrap();
    assert_eq!(notified, 1);

    match rx.recv().await {
        Some(RuntimeEvent::HookFired { hook, params }) => {
            assert_eq!(hook, "beforeRun");
            assert_eq!(params, vec!["compiler".to_string()]);
        }
        other => panic!("expected HookFired, got {other:?}"),
    }

    let err = table.fire("nope", Vec::new()).await.unwrap_err();
    assert!(matches!(err, HookshellError::UnknownHook(_)));
}
