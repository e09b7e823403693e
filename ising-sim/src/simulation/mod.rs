pub mod snapshot;

pub use snapshot::Snapshot;

use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;
use rand::Rng;
use validator::Validate;

use crate::config::RunConfig;
use crate::error::{IsingError, Result};
use crate::mcmc;
use crate::spins::Lattice;
use crate::statistics::{Observables, RunSummary};

/// Result type frame observers report back to the run loop.
pub type ObserverResult = std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// Run `config.epochs` Metropolis steps on `lattice`, then measure it.
///
/// Each epoch:
/// 1. Check `interrupted`; stop with [`IsingError::Interrupted`] if raised
/// 2. Call `on_epoch` (useful for progress bars)
/// 3. One [`mcmc::step`]
/// 4. If frames are enabled and `epoch % cadence == 0`, hand an owned
///    [`Snapshot`] to `on_frame`
///
/// An observer error aborts the run with [`IsingError::Observer`]; the lattice
/// keeps whatever state it reached.
pub fn run<R: Rng + ?Sized>(
    lattice: &mut Lattice,
    config: &RunConfig,
    rng: &mut R,
    interrupted: &AtomicBool,
    on_epoch: &dyn Fn(),
    on_frame: &mut dyn FnMut(&Snapshot) -> ObserverResult,
) -> Result<RunSummary> {
    config
        .validate()
        .map_err(|e| IsingError::InvalidArgument(format!("{e}")))?;

    let cadence = config.cadence();
    let mut accepted = 0usize;
    let mut frames = 0usize;

    debug!(
        "run start: size={} temperature={} epochs={} frames={} cadence={}",
        lattice.size(),
        lattice.temperature(),
        config.epochs,
        config.capture_frames,
        cadence,
    );

    for epoch in 0..config.epochs {
        if interrupted.load(Ordering::Relaxed) {
            return Err(IsingError::Interrupted { epoch });
        }
        on_epoch();

        if mcmc::step(lattice, rng) {
            accepted += 1;
        }

        if config.capture_frames && epoch % cadence == 0 {
            on_frame(&Snapshot::capture(lattice, epoch)).map_err(IsingError::Observer)?;
            frames += 1;
        }
    }

    let observables = Observables::measure(lattice);
    debug!("run done: accepted={accepted} frames={frames} {observables:?}");

    Ok(RunSummary {
        epochs: config.epochs,
        accepted,
        frames,
        observables,
    })
}
