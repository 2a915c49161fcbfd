//! mcu-gdb: Attach arm-none-eabi-gdb to a running GDB server

use clap::Parser;
use tracing::debug;

use mcu_launch::{logging::init_logging, runner, AttachConfig, GdbArgs, Platform};

#[tokio::main]
async fn main() {
    let args = GdbArgs::parse();
    if let Err(e) = init_logging(&args.log) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    debug!("Starting mcu-gdb v{}", env!("CARGO_PKG_VERSION"));

    // The child's status is relayed as is, including codes above 255 on Windows
    std::process::exit(runner::finish(run(&args).await))
}

async fn run(args: &GdbArgs) -> mcu_launch::Result<i32> {
    let config = AttachConfig::from_args(args)?;
    runner::launch(&config, Platform::host()).await
}
