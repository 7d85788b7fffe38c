use std::io::Write;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing_subscriber::EnvFilter;

use macgen::assignment::Assignment;
use macgen::cli::Cli;
use macgen::config::{Limits, RunConfig};
use macgen::error::MacgenError;
use macgen::render::{self, Layout};
use macgen::util;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    // stdout carries the generated lists; logs go to stderr only
    let filter = if cli.verbose {
        EnvFilter::new("macgen=debug")
    } else {
        EnvFilter::new("macgen=warn")
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    // Out-of-range counts are usage errors, reported before anything is generated
    let config = match RunConfig::new(cli.prefix, cli.number, cli.interface, &Limits::default()) {
        Ok(config) => config,
        Err(e) => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
    };

    let mut rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let assignment = Assignment::generate(&config, &mut *rng)?;
    let generated_at = util::utc_timestamp();

    let mut stdout = std::io::stdout().lock();
    match write_layouts(&mut stdout, &assignment, &cli.layouts(), &generated_at) {
        Ok(()) => Ok(()),
        // Reader went away (e.g. `| head`)
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed early");
            Ok(())
        }
        Err(source) => Err(MacgenError::Io {
            context: "writing to stdout".into(),
            source,
        }
        .into()),
    }
}

fn write_layouts(
    out: &mut impl Write,
    assignment: &Assignment,
    layouts: &[Layout],
    generated_at: &str,
) -> std::io::Result<()> {
    for (i, layout) in layouts.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write!(out, "{}", render::render(assignment, *layout, generated_at))?;
    }
    out.flush()
}
