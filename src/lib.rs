// src/lib.rs

pub mod cli;
pub mod command;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod hooks;
pub mod logging;
pub mod supervisor;
pub mod types;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::config::{ConfigFile, RawCommandSpec};
use crate::engine::{Runtime, RuntimeEvent, RuntimeOptions};
use crate::errors::ErrorPolicy;
use crate::exec::TokioLauncher;
use crate::hooks::{Dispatcher, HookTable};
use crate::supervisor::Supervisor;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the hook table fed from stdin
/// - dispatcher / supervisor / runtime
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.config)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let policy = ErrorPolicy::new(args.watch || cfg.config.watch);
    let mut launch_options = cfg.config.launch_options();
    if let Some(stdio) = args.stdio {
        launch_options.stdio = stdio;
    }

    // Runtime event channel.
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    // Bind the configured hooks before any hook can fire.
    let mut hooks = HookTable::new(cfg.host.hooks.iter().cloned());
    let dispatcher = Dispatcher::bind(cfg.trigger_bindings()?, &mut hooks, &rt_tx, policy)?;
    info!(
        hooks = ?dispatcher.bindings().keys().collect::<Vec<_>>(),
        watch = policy.is_watch(),
        "hooks bound"
    );

    let supervisor = Supervisor::new(TokioLauncher::new(rt_tx.clone(), launch_options), policy);

    // The host fires hooks over stdin.
    let _reader = crate::hooks::stdin::spawn_line_reader(tokio::io::stdin(), hooks, rt_tx.clone());

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    let options = RuntimeOptions {
        exit_when_idle: !args.linger,
    };

    let runtime = Runtime::new(dispatcher, supervisor, rt_rx, options);
    runtime.run().await?;
    Ok(())
}

/// Simple dry-run output: print settings and the commands bound to each hook.
fn print_dry_run(cfg: &ConfigFile) {
    println!("hookshell dry-run");
    println!("  config.watch = {}", cfg.config.watch);
    println!("  config.stdio = {:?}", cfg.config.stdio);
    println!("  config.shell = {}", cfg.config.shell);
    println!("  host.hooks = {}", cfg.host.hooks.len());
    println!();

    println!("hooks ({}):", cfg.hooks.len());
    for (name, specs) in cfg.hooks.iter() {
        let known = cfg.host.hooks.iter().any(|h| h == name);
        if known {
            println!("  - {name}");
        } else {
            println!("  - {name} (unknown to host)");
        }
        for spec in specs {
            match spec {
                RawCommandSpec::Literal(line) => println!("      run: {line}"),
                RawCommandSpec::Structured(s) => {
                    println!("      run: {} {:?}", s.command, s.args)
                }
                RawCommandSpec::Template(t) => println!("      template: {}", t.template),
            }
        }
    }

    debug!("dry-run complete (no execution)");
}
