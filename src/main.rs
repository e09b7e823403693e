mod cli;
mod frames;

use std::sync::atomic::AtomicBool;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use ising_sim::{Lattice, Observables, RunConfig};
use log::info;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use cli::{Args, Settings};
use frames::FrameWriter;

fn progress_bar(epochs: usize, quiet: bool) -> anyhow::Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }
    let pb = ProgressBar::new(epochs as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{msg} [{bar:40}] {pos}/{len} [{elapsed_precise} < {eta_precise}, {per_sec}]",
        )?
        .progress_chars("=> "),
    );
    pb.set_message("epochs");
    Ok(pb)
}

fn report(observables: &Observables) -> String {
    format!(
        "{:.<25}{:.2}\n{:.<25}{:.2}",
        "Net Magnetization [%]:",
        observables.magnetization,
        "Heat Capacity [AU]:",
        observables.heat_capacity,
    )
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = Settings::resolve(&args)?;

    let seed = settings.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    info!(
        "T={} initial_state={} size={} epochs={} seed={seed}",
        settings.temperature, settings.initial_state, settings.size, settings.epochs,
    );

    let mut lattice = Lattice::build_from_token(
        &settings.initial_state,
        settings.size,
        settings.temperature,
        &mut rng,
    )?;

    let mut writer = if settings.video {
        Some(FrameWriter::create(&settings.frames_dir, settings.size)?)
    } else {
        None
    };

    let config = RunConfig::new(settings.epochs, settings.video);
    let pb = progress_bar(settings.epochs, args.quiet)?;
    let interrupted = AtomicBool::new(false);

    let summary = ising_sim::run(
        &mut lattice,
        &config,
        &mut rng,
        &interrupted,
        &|| pb.inc(1),
        &mut |snapshot| match writer.as_mut() {
            Some(w) => w.write(snapshot).map(|_| ()).map_err(Into::into),
            None => Ok(()),
        },
    )
    .context("simulation failed")?;
    pb.finish();

    info!(
        "accepted {}/{} flips ({:.4})",
        summary.accepted,
        summary.epochs,
        summary.acceptance_rate(),
    );
    if let Some(w) = &writer {
        info!("wrote {} frames to {}", w.written(), settings.frames_dir.display());
    }

    println!("{}", report(&summary.observables));
    Ok(())
}
