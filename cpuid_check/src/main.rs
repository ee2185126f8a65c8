#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
compile_error!("cpuid-check requires an x86 or x86_64 target.");

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use cpuid_check::ExitStatus;
use cpuid_check::cli::{self, Args};
use cpuid_check::cpuid::NativeCpuid;
use cpuid_check::probe;
use std::io::Write;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            eprint!("{}", cli::usage_report(&err));
            return Ok(ExitStatus::Usage.into());
        }
    };

    // logging
    let mut log_builder = env_logger::Builder::from_default_env();
    match args.debug {
        true => log_builder.filter_level(log::LevelFilter::Debug),
        false => log_builder.filter_level(log::LevelFilter::Info),
    }
    .init();

    let probe = args.probe();
    let mut stdout = std::io::stdout().lock();
    let status = probe::run(&probe, &NativeCpuid, &mut stdout).context("writing report")?;
    stdout.flush().context("flushing report")?;

    log::debug!("exit status: {:?}", status);
    Ok(status.into())
}
