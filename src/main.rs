//! glide - touchscreen application launcher
//!
//! Scans the given directories for XML feed files, builds the configured
//! home-screen layout (ellipse carousel or paged grid), and runs the
//! event loop until a tapped entry hands off to an external program.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use glide_launcher::config::{LauncherConfig, LayoutMode};
use glide_launcher::controller::Controller;
use glide_launcher::{feed, launch, runtime};

#[derive(Parser, Debug)]
#[command(name = "glide")]
#[command(about = "Touchscreen application launcher", long_about = None)]
struct Args {
    /// Directories to scan for feed files (default: configured data dir)
    feed_dirs: Vec<PathBuf>,

    /// Config file (default: $XDG_CONFIG_HOME/glide/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured layout
    #[arg(long, value_enum)]
    layout: Option<LayoutMode>,

    /// Print the discovered entries and exit
    #[arg(long)]
    list_entries: bool,

    /// Enable verbose debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    // Log panics before crashing
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        if let Ok(home) = std::env::var("HOME") {
            let crash_log = format!("{}/.local/state/glide/crash.log", home);
            if let Ok(mut f) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log)
            {
                use std::io::Write;
                let _ = writeln!(f, "[{}] PANIC: {}", chrono::Local::now(), panic_info);
            }
        }
    }));

    // Log directory: ~/.local/state/glide (or /tmp/glide)
    let log_dir = std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|h| PathBuf::from(h).join(".local/state")))
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
        .join("glide");
    std::fs::create_dir_all(&log_dir).ok();

    let args = Args::parse();

    let file_appender = rolling::daily(&log_dir, "launcher.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let default_filter = if args.debug {
        "debug,glide=debug"
    } else {
        "warn,glide=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    let config_path = args.config.unwrap_or_else(LauncherConfig::default_path);
    let mut config = LauncherConfig::load(&config_path);
    if let Some(layout) = args.layout {
        config.layout = layout;
    }

    let dirs = if args.feed_dirs.is_empty() {
        vec![config.data_dir.clone()]
    } else {
        args.feed_dirs
    };
    let entries = feed::load_all(&dirs);
    info!(count = entries.len(), layout = ?config.layout, "feeds loaded");

    if args.list_entries {
        for entry in &entries {
            println!("{}\t{}", entry.title, entry.exec);
        }
        return Ok(());
    }

    let controller = Controller::new(&config, entries);

    // A frontend clones this sender to inject pointer events; kept alive
    // here so the channel stays open while the loop runs.
    let (_input_tx, input_rx) = runtime::input_channel();

    if let Some(exec) = runtime::run(controller, input_rx)? {
        launch::spawn_detached(&config.launch_script, &exec)?;
    }

    Ok(())
}
