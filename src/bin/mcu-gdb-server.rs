//! mcu-gdb-server: Start openocd as a GDB server

use clap::Parser;
use tracing::debug;

use mcu_launch::{logging::init_logging, runner, GdbServerArgs, Platform, ServerConfig};

#[tokio::main]
async fn main() {
    let args = GdbServerArgs::parse();
    if let Err(e) = init_logging(&args.log) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    debug!("Starting mcu-gdb-server v{}", env!("CARGO_PKG_VERSION"));

    // The child's status is relayed as is, including codes above 255 on Windows
    std::process::exit(runner::finish(run(&args).await))
}

async fn run(args: &GdbServerArgs) -> mcu_launch::Result<i32> {
    let config = ServerConfig::from_args(args)?;
    runner::launch(&config, Platform::host()).await
}
