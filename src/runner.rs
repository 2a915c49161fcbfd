//! Run a launcher's command to completion and turn the result into an exit
//! status for the launcher process itself

use std::process::ExitStatus;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::command::LaunchCommand;
use crate::error::{LaunchError, Result};
use crate::platform::Platform;
use crate::tools::{InterruptPolicy, Launcher};

/// SIGINT is 2 on every unix the tools run on
#[cfg(unix)]
const SIGINT: i32 = 2;

/// Build the launcher's command, print it, and run it until it exits.
///
/// Ctrl-C is captured for the lifetime of the child and handled according
/// to the launcher's [`InterruptPolicy`].
pub async fn launch<L: Launcher>(launcher: &L, platform: Platform) -> Result<i32> {
    let command = launcher.command(platform);
    println!("Running command: {}", command);

    let interrupts = listen_for_interrupts()?;
    let code = run_to_completion(&command, launcher.interrupt_policy(), interrupts).await?;
    info!("{} exited with status {}", launcher.tool(), code);
    Ok(code)
}

/// Forward every Ctrl-C the process receives onto a channel.
///
/// The handler is installed before this returns, so an interrupt that
/// arrives right after the child is spawned cannot kill the launcher.
#[cfg(unix)]
fn listen_for_interrupts() -> Result<mpsc::UnboundedReceiver<()>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while sigint.recv().await.is_some() {
            if tx.send(()).is_err() {
                break;
            }
        }
    });
    Ok(rx)
}

#[cfg(not(unix))]
fn listen_for_interrupts() -> Result<mpsc::UnboundedReceiver<()>> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Cannot listen for Ctrl-C: {}", e);
                break;
            }
            if tx.send(()).is_err() {
                break;
            }
        }
    });
    Ok(rx)
}

/// Spawn `command` and wait for it, consuming interrupts from `interrupts`.
///
/// Returns the child's exit status. Under [`InterruptPolicy::CleanExit`]
/// any interrupt, seen before or after the child exits, yields 0, as does a
/// child that died of SIGINT itself (the terminal signals the whole
/// foreground process group).
pub async fn run_to_completion(
    command: &LaunchCommand,
    policy: InterruptPolicy,
    mut interrupts: mpsc::UnboundedReceiver<()>,
) -> Result<i32> {
    let mut child = command.to_command().spawn().map_err(|source| LaunchError::SpawnFailed {
        program: command.program().to_string_lossy().into_owned(),
        source,
    })?;
    debug!("Spawned {} (pid {:?})", command.program().to_string_lossy(), child.id());

    let mut listening = true;
    loop {
        tokio::select! {
            biased;

            interrupt = interrupts.recv(), if listening => match (interrupt, policy) {
                (None, _) => listening = false,
                (Some(()), InterruptPolicy::Passthrough) => {
                    debug!("Interrupt left to child process");
                }
                (Some(()), InterruptPolicy::CleanExit) => {
                    info!("Interrupted, stopping {}", command.program().to_string_lossy());
                    if let Err(e) = child.start_kill() {
                        debug!("Kill after interrupt: {}", e);
                    }
                    if let Err(e) = child.wait().await {
                        warn!("Waiting for child after interrupt: {}", e);
                    }
                    return Ok(0);
                }
            },
            status = child.wait() => {
                let status = status?;
                if policy == InterruptPolicy::CleanExit
                    && (interrupts.try_recv().is_ok() || killed_by_sigint(status))
                {
                    info!("{} stopped by interrupt", command.program().to_string_lossy());
                    return Ok(0);
                }
                return Ok(exit_code(status));
            }
        }
    }
}

#[cfg(unix)]
fn killed_by_sigint(status: ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(SIGINT)
}

#[cfg(not(unix))]
fn killed_by_sigint(_status: ExitStatus) -> bool {
    false
}

/// Exit status of a finished child as a plain integer.
///
/// On unix a child killed by a signal maps to 128 + signal, as shells do.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

/// Final step of every launcher binary: the status to exit with.
///
/// A child's status is returned unchanged so the binary can pass it to
/// [`std::process::exit`]; validation and spawn errors are reported and
/// become 1.
pub fn finish(result: Result<i32>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            debug!("Launch failed: {:?}", e);
            eprintln!("{}", e);
            1
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sh(script: &str) -> LaunchCommand {
        LaunchCommand::new("sh").args(["-c", script])
    }

    fn no_interrupts() -> mpsc::UnboundedReceiver<()> {
        mpsc::unbounded_channel().1
    }

    #[tokio::test]
    async fn test_success_status_relayed() {
        let code = run_to_completion(&sh("exit 0"), InterruptPolicy::Passthrough, no_interrupts())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_failure_status_relayed_verbatim() {
        let code = run_to_completion(&sh("exit 3"), InterruptPolicy::Passthrough, no_interrupts())
            .await
            .unwrap();
        assert_eq!(code, 3);
    }

    #[tokio::test]
    async fn test_interrupt_exits_cleanly() {
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(()).unwrap();

        let code = tokio::time::timeout(
            Duration::from_secs(10),
            run_to_completion(&sh("sleep 30; exit 5"), InterruptPolicy::CleanExit, rx),
        )
        .await
        .expect("child should be stopped on interrupt")
        .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_passthrough_keeps_waiting_after_interrupt() {
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(()).unwrap();

        let code = run_to_completion(&sh("sleep 0.2; exit 4"), InterruptPolicy::Passthrough, rx)
            .await
            .unwrap();
        assert_eq!(code, 4);
    }

    #[tokio::test]
    async fn test_clean_exit_relays_status_without_interrupt() {
        let code = run_to_completion(&sh("exit 2"), InterruptPolicy::CleanExit, no_interrupts())
            .await
            .unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let cmd = LaunchCommand::new("definitely_not_a_real_tool_12345");
        let err = run_to_completion(&cmd, InterruptPolicy::Passthrough, no_interrupts())
            .await
            .unwrap_err();
        assert!(matches!(err, LaunchError::SpawnFailed { .. }));
        assert!(err.to_string().contains("definitely_not_a_real_tool_12345"));
    }

    #[tokio::test]
    async fn test_signal_maps_to_128_plus_signal() {
        let code = run_to_completion(
            &sh("kill -9 $$"),
            InterruptPolicy::Passthrough,
            no_interrupts(),
        )
        .await
        .unwrap();
        assert_eq!(code, 128 + 9);
    }

    #[tokio::test]
    async fn test_sigint_death_is_clean_exit_for_server() {
        let code = run_to_completion(
            &sh("kill -INT $$"),
            InterruptPolicy::CleanExit,
            no_interrupts(),
        )
        .await
        .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_sigint_death_is_relayed_under_passthrough() {
        let code = run_to_completion(
            &sh("kill -INT $$"),
            InterruptPolicy::Passthrough,
            no_interrupts(),
        )
        .await
        .unwrap();
        assert_eq!(code, 128 + SIGINT);
    }

    #[tokio::test]
    async fn test_queued_interrupt_wins_over_fast_exit() {
        let (tx, rx) = mpsc::unbounded_channel();
        tx.send(()).unwrap();

        let code = run_to_completion(&sh("exit 6"), InterruptPolicy::CleanExit, rx)
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_finish_keeps_status_verbatim() {
        assert_eq!(finish(Ok(0)), 0);
        assert_eq!(finish(Ok(3)), 3);
        assert_eq!(finish(Ok(-1073741819)), -1073741819);
        assert_eq!(finish(Err(LaunchError::ImageRequired)), 1);
    }
}
