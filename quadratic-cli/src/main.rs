//! Точка входа `quadratic-cli`.
//!
//! Жизненный цикл:
//! - парсинг CLI и выбор режима (аргументы, файл или stdin)
//! - разбор и решение каждого уравнения через `quadratic-core`
//! - ошибки разбора печатаются в stderr и не завершают процесс
//! - в пакетном режиме ненулевой код выхода, если хоть одно уравнение не разобрано

mod cli;
mod config;
mod equations;
mod render;
mod repl;

use std::io;

use clap::Parser;
use log::info;

use crate::equations::Mode;

fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/debug
    env_logger::init();

    let args = cli::Args::parse();
    args.validate()?;

    let mode = equations::load_mode(&args)?;

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match mode {
        Mode::Interactive => {
            let settings = args.repl_settings();
            info!(
                "Starting quadratic-cli in interactive mode: exit_token={:?}",
                settings.exit_token
            );

            let summary = repl::run_interactive(io::stdin().lock(), &mut out, &mut err, &settings)?;
            info!("solved={}, failed={}", summary.solved, summary.failed);
        }
        Mode::Batch(equations) => {
            info!(
                "Starting quadratic-cli in batch mode: {} equation(s)",
                equations.len()
            );

            let summary = repl::run_batch(&equations, &mut out, &mut err)?;
            if summary.failed > 0 {
                anyhow::bail!(
                    "{} of {} equation(s) could not be parsed",
                    summary.failed,
                    equations.len()
                );
            }
        }
    }

    Ok(())
}
