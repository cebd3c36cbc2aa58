// src/main.rs

use hookshell::{cli, logging, run};

#[tokio::main]
async fn main() {
    // Exit explicitly: stdin is read on a blocking thread that cannot be
    // cancelled, so letting the runtime drop could wait for another line.
    match run_main().await {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            eprintln!("hookshell error: {err:?}");
            std::process::exit(1);
        }
    }
}

async fn run_main() -> anyhow::Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}
