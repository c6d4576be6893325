// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! quadlab CLI
//!
//! Loads a JSON scene, steps it for a number of frames, and prints which
//! objects the broad phase flagged as collision candidates on the last frame.
//!
//! Preferences (sort strategy, comparison budget, frame count) are read from
//! the platform config dir unless `--no-prefs` is given; flags override them.

mod fs_store;
mod report;
mod source;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use quadlab_geom::SortStrategy;
use quadlab_scene::config::{ConfigService, ConfigStore, MemoryConfigStore};
use quadlab_scene::prefs::SESSION_PREFS_KEY;
use quadlab_scene::{
    BroadPhasePass, GameWorld, InputState, Key, SceneDescription, SessionPrefs, TextureCache,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::fs_store::FsConfigStore;
use crate::source::DirTextureSource;

#[derive(Parser, Debug)]
#[command(
    name = "quadlab",
    version,
    about = "Step a quad scene and report broad-phase collision candidates"
)]
struct Cli {
    /// Scene description (JSON). Texture names resolve relative to its directory.
    scene: PathBuf,

    /// Frames to simulate; frame 0 is the scene as loaded.
    #[arg(long)]
    frames: Option<u32>,

    /// Left-edge sort algorithm.
    #[arg(long, value_enum)]
    sort: Option<SortArg>,

    /// Warn when a sweep inspects more pairs than this (0 disables).
    #[arg(long)]
    budget: Option<usize>,

    /// Arrow keys held for the whole run, e.g. `--hold right,up`.
    #[arg(long, value_enum, value_delimiter = ',')]
    hold: Vec<KeyArg>,

    /// Ignore saved preferences.
    #[arg(long)]
    no_prefs: bool,

    /// Persist the effective preferences after the run.
    #[arg(long, conflicts_with = "no_prefs")]
    save_prefs: bool,

    /// Read and write preferences here instead of the platform config dir.
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum SortArg {
    Unstable,
    Exchange,
}

impl From<SortArg> for SortStrategy {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Unstable => Self::Unstable,
            SortArg::Exchange => Self::Exchange,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum KeyArg {
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyArg> for Key {
    fn from(value: KeyArg) -> Self {
        match value {
            KeyArg::Up => Self::Up,
            KeyArg::Down => Self::Down,
            KeyArg::Left => Self::Left,
            KeyArg::Right => Self::Right,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    if cli.no_prefs {
        run(&cli, &ConfigService::new(MemoryConfigStore::new()))
    } else {
        let store = match &cli.config_dir {
            Some(dir) => FsConfigStore::at(dir),
            None => FsConfigStore::new().context("resolving config dir")?,
        };
        run(&cli, &ConfigService::new(store))
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("installing log subscriber")
}

fn effective_prefs<S: ConfigStore>(cli: &Cli, config: &ConfigService<S>) -> Result<SessionPrefs> {
    let mut prefs: SessionPrefs = config
        .load_or_default(SESSION_PREFS_KEY)
        .context("loading saved preferences")?;
    if let Some(frames) = cli.frames {
        prefs.frames = frames;
    }
    if let Some(sort) = cli.sort {
        prefs.broad_phase.sort = sort.into();
    }
    if let Some(budget) = cli.budget {
        prefs.broad_phase.comparison_budget = budget;
    }
    Ok(prefs)
}

fn load_world(scene: &Path, cache: &mut TextureCache) -> Result<GameWorld> {
    let bytes =
        std::fs::read(scene).with_context(|| format!("reading scene {}", scene.display()))?;
    let desc = SceneDescription::from_slice(&bytes)
        .with_context(|| format!("parsing scene {}", scene.display()))?;
    let base = scene.parent().unwrap_or_else(|| Path::new("."));
    let world = GameWorld::from_description(&desc, cache, &DirTextureSource::new(base))
        .with_context(|| format!("building scene {}", scene.display()))?;
    Ok(world)
}

fn run<S: ConfigStore>(cli: &Cli, config: &ConfigService<S>) -> Result<()> {
    let prefs = effective_prefs(cli, config)?;
    let mut cache = TextureCache::new();
    let mut world = load_world(&cli.scene, &mut cache)?;
    info!(
        objects = world.game_objects().len(),
        lights = world.light_count(),
        textures = cache.len(),
        sort = ?prefs.broad_phase.sort,
        "scene loaded"
    );

    let mut input = InputState::new();
    for key in &cli.hold {
        input.press((*key).into());
    }

    let mut pass = BroadPhasePass::new(prefs.broad_phase.clone());
    let mut last = pass.run(&mut world);
    info!("{}", report::summary(&last));
    for _ in 1..prefs.frames.max(1) {
        last = pass.step(&mut world, &input);
        info!("{}", report::summary(&last));
    }

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", report::summary(&last))?;
    writeln!(out, "{}", report::object_table(&world))?;

    if cli.save_prefs {
        config
            .save(SESSION_PREFS_KEY, &prefs)
            .context("saving preferences")?;
        info!("preferences saved");
    }
    Ok(())
}
