//! Ready binary entry point.

use std::process::ExitCode;

use ready::ui::output;

fn main() -> ExitCode {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            output::error(format!("Failed to start runtime: {}", err));
            return ExitCode::FAILURE;
        }
    };

    let code = runtime.block_on(async {
        let work = tokio::task::spawn_blocking(ready::cli::run);

        tokio::select! {
            result = work => match result {
                Ok(Ok(code)) => code,
                Ok(Err(err)) => {
                    output::error(format!("{:#}", err));
                    1
                }
                Err(err) => {
                    output::error(format!("Ready crashed: {}", err));
                    1
                }
            },
            _ = ready::signals::shutdown_signal() => {
                println!("\n\nReady stopped 🛑");
                // Non-zero so an interrupted hook blocks the commit instead of
                // letting unchecked changes through.
                std::process::exit(1);
            }
        }
    });

    ExitCode::from(code)
}
