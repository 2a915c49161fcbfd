//! mcu-loader: Erase or flash the microcontroller with STM32_Programmer_CLI

use clap::Parser;
use tracing::debug;

use mcu_launch::{logging::init_logging, runner, FlashConfig, LoaderArgs, Platform};

#[tokio::main]
async fn main() {
    let args = LoaderArgs::parse();
    if let Err(e) = init_logging(&args.log) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    debug!("Starting mcu-loader v{}", env!("CARGO_PKG_VERSION"));

    // The child's status is relayed as is, including codes above 255 on Windows
    std::process::exit(runner::finish(run(&args).await))
}

async fn run(args: &LoaderArgs) -> mcu_launch::Result<i32> {
    let config = FlashConfig::from_args(args)?;
    runner::launch(&config, Platform::host()).await
}
