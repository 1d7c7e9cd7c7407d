use anyhow::Context;
use bagging_mapper::cli::{self, Cli, RunReport};
use bagging_mapper::core::error::{MapperError, EXIT_IO_ERROR};
use bagging_mapper::core::utils::log::init_logging;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = match err.downcast_ref::<MapperError>() {
                Some(mapper_err) if mapper_err.is_broken_pipe() => {
                    log::debug!("output closed by downstream reader");
                    mapper_err.exit_code()
                }
                Some(mapper_err) => {
                    log::error!("{} failure: {:#}", mapper_err.category(), err);
                    mapper_err.exit_code()
                }
                None => {
                    log::error!("{:#}", err);
                    EXIT_IO_ERROR
                }
            };
            ExitCode::from(code as u8)
        }
    }
}

fn run(args: &Cli) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let (config, stats) = cli::run(args, stdin.lock(), stdout.lock())?;

    if let Some(path) = &args.stats_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create stats file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        RunReport {
            config: &config,
            stats: &stats,
        }
        .write_json(&mut writer)
        .with_context(|| format!("failed to write stats file {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("failed to write stats file {}", path.display()))?;
    }

    Ok(())
}
