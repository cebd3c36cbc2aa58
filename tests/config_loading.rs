// tests/config_loading.rs

mod common;
use crate::common::builders::ConfigFileBuilder;

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use hookshell::command::{resolve, CommandSpec};
use hookshell::config::{
    load_and_validate, load_from_path, parse_and_validate, RawCommandSpec, StructuredCommand,
};
use hookshell::errors::HookshellError;
use hookshell::hooks::DEFAULT_HOOKS;
use hookshell::types::StdioMode;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn empty_file_uses_defaults() {
    let cfg = parse_and_validate("").unwrap();
    assert!(!cfg.config.watch);
    assert!(!cfg.config.shell);
    assert_eq!(cfg.config.stdio, StdioMode::Inherit);
    assert_eq!(cfg.host.hooks.len(), DEFAULT_HOOKS.len());
    assert!(cfg.host.hooks.iter().any(|h| h == "afterCompile"));
    assert!(cfg.hooks.is_empty());
}

#[test]
fn mixed_command_forms_load_in_order() {
    let file = write_config(
        r#"
[config]
watch = true
stdio = "capture_stderr"

[hooks]
done = [
    "cat README.md",
    { command = "git", args = ["status"] },
    { template = "echo built {0}" },
]
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert!(cfg.config.watch);
    assert_eq!(cfg.config.stdio, StdioMode::CaptureStderr);

    let done = &cfg.hooks["done"];
    assert_eq!(done.len(), 3);
    assert_eq!(done[0], RawCommandSpec::Literal("cat README.md".to_string()));
    assert_eq!(
        done[1],
        RawCommandSpec::Structured(StructuredCommand {
            command: "git".to_string(),
            args: vec!["status".to_string()],
        })
    );
    assert!(matches!(done[2], RawCommandSpec::Template(_)));
}

#[test]
fn structured_args_default_to_empty() {
    let cfg = parse_and_validate(
        r#"
[hooks]
run = [{ command = "make" }]
"#,
    )
    .unwrap();
    let bindings = cfg.trigger_bindings().unwrap();
    let cmd = resolve(&bindings["run"][0], &[]).unwrap();
    assert_eq!(cmd.program, "make");
    assert!(cmd.args.is_empty());
}

#[test]
fn template_binding_renders_hook_parameters() {
    let cfg = parse_and_validate(
        r#"
[hooks]
assetEmitted = [{ template = "cp {0} dist/{1}" }]
"#,
    )
    .unwrap();
    let bindings = cfg.trigger_bindings().unwrap();
    let spec = &bindings["assetEmitted"][0];
    assert!(matches!(spec, CommandSpec::Derived(_)));

    let params = vec!["main.js".to_string(), "app.js".to_string()];
    let cmd = resolve(spec, &params).unwrap();
    assert_eq!(cmd.key().as_str(), "cp main.js dist/app.js");
}

#[test]
fn invalid_template_is_a_configuration_error() {
    let err = parse_and_validate(
        r#"
[hooks]
done = [{ template = "echo {name}" }]
"#,
    )
    .unwrap_err();
    assert!(err.is_configuration());
    match err {
        HookshellError::ConfigError(msg) => assert!(msg.starts_with("hook 'done': "), "{msg}"),
        other => panic!("expected ConfigError, got {other:?}"),
    }
}

#[test]
fn duplicate_host_hooks_are_rejected() {
    let err = parse_and_validate(
        r#"
[host]
hooks = ["done", "failed", "done"]
"#,
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration error: [host].hooks lists 'done' more than once"
    );
}

#[test]
fn blank_host_hook_is_rejected() {
    let raw = ConfigFileBuilder::new().host_hooks(&["done", "  "]).raw();
    let err = hookshell::config::ConfigFile::try_from(raw).unwrap_err();
    assert!(matches!(err, HookshellError::ConfigError(_)));
}

#[test]
fn hooks_unknown_to_the_host_still_load() {
    let cfg = parse_and_validate(
        r#"
[host]
hooks = ["done"]

[hooks]
notAHook = ["echo never"]
"#,
    )
    .unwrap();
    assert!(cfg.hooks.contains_key("notAHook"));
    assert_eq!(cfg.trigger_bindings().unwrap().len(), 1);
}

#[test]
fn mixed_table_fields_do_not_parse() {
    let err = parse_and_validate(
        r#"
[hooks]
done = [{ command = "echo", template = "echo {0}" }]
"#,
    )
    .unwrap_err();
    assert!(matches!(err, HookshellError::TomlError(_)));
}

#[test]
fn unknown_stdio_mode_does_not_parse() {
    let err = parse_and_validate(
        r#"
[config]
stdio = "pipe"
"#,
    )
    .unwrap_err();
    assert!(matches!(err, HookshellError::TomlError(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_path(dir.path().join("Hookshell.toml")).unwrap_err();
    assert!(matches!(err, HookshellError::IoError(_)));
    assert!(!err.is_configuration());
}

#[test]
fn builder_matches_parsed_config() {
    let built = ConfigFileBuilder::new()
        .watch(true)
        .literal("beforeRun", "echo start")
        .template("done", "echo {0}")
        .build();
    let parsed = parse_and_validate(
        r#"
[config]
watch = true

[hooks]
beforeRun = ["echo start"]
done = [{ template = "echo {0}" }]
"#,
    )
    .unwrap();
    assert_eq!(built.config.watch, parsed.config.watch);
    assert_eq!(built.hooks, parsed.hooks);
}

#[test]
fn demo_config_is_valid() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/Hookshell.toml");
    let cfg = load_and_validate(&path).unwrap();

    assert_eq!(cfg.host.hooks.len(), 5);
    let bindings = cfg.trigger_bindings().unwrap();
    assert!(bindings.keys().all(|hook| cfg.host.hooks.contains(hook)));
    assert_eq!(bindings["done"].len(), 2);
}
