use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(version, about = "2D Ising model Metropolis simulation", long_about = None)]
pub struct Args {
    /// Temperature of the system
    #[arg(short, long, default_value_t = 0.5)]
    pub temperature: f64,

    /// (R)andom or (U)niform initial state of the system
    #[arg(short, long, default_value = "r")]
    pub initial_state: String,

    /// Number of sites, M, in the MxM lattice
    #[arg(short, long, default_value_t = 100)]
    pub size: usize,

    /// Number of iterations to run the simulation for
    #[arg(short, long, default_value_t = 1_000_000)]
    pub epochs: usize,

    /// Record PNG frames of the simulation progression
    #[arg(short, long)]
    pub video: bool,

    /// Directory the frames are written to
    #[arg(short = 'o', long, default_value = "frames")]
    pub frames_dir: PathBuf,

    /// Seed for the random source; drawn from entropy when absent
    #[arg(long)]
    pub seed: Option<u64>,

    /// YAML file with run settings; replaces the run flags above
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

/// Everything a run needs, from flags or from a YAML file.
///
/// ```yaml
/// temperature: 2.269
/// initial_state: u
/// size: 64
/// epochs: 2000000
/// video: true
/// frames_dir: out/frames
/// seed: 7
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub temperature: f64,
    pub initial_state: String,
    pub size: usize,
    pub epochs: usize,
    pub video: bool,
    pub frames_dir: PathBuf,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            temperature: 0.5,
            initial_state: "r".to_string(),
            size: 100,
            epochs: 1_000_000,
            video: false,
            frames_dir: PathBuf::from("frames"),
            seed: None,
        }
    }
}

impl From<&Args> for Settings {
    fn from(args: &Args) -> Self {
        Self {
            temperature: args.temperature,
            initial_state: args.initial_state.clone(),
            size: args.size,
            epochs: args.epochs,
            video: args.video,
            frames_dir: args.frames_dir.clone(),
            seed: args.seed,
        }
    }
}

impl Settings {
    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(text).context("invalid settings YAML")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let mut text = String::new();
        File::open(path)
            .and_then(|f| BufReader::new(f).read_to_string(&mut text))
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("in config file {}", path.display()))
    }

    pub fn resolve(args: &Args) -> anyhow::Result<Self> {
        match &args.config {
            Some(path) => {
                log::info!("loading settings from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::from(args)),
        }
    }
}
