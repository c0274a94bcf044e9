//! gapvi entrypoint.
use anyhow::Result;
use clap::{Parser, ValueEnum};
use core_config::{Config, StoreKind, load_from};
use core_model::Viewport;
use core_state::EditorState;
use core_terminal::{CrosstermBackend, TerminalBackend};
use core_text::{GapBuffer, RopeStore, TextStore};
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

mod runtime;
use runtime::{EditorRuntime, ShutdownReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StoreArg {
    Gap,
    Rope,
}

impl From<StoreArg> for StoreKind {
    fn from(arg: StoreArg) -> Self {
        match arg {
            StoreArg::Gap => StoreKind::Gap,
            StoreArg::Rope => StoreKind::Rope,
        }
    }
}

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "gapvi", version, about = "Modal gap-buffer editor")]
struct Args {
    /// Optional configuration file path (overrides discovery of `gapvi.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Initial document text (overrides `editor.initial_text`).
    #[arg(long = "text")]
    pub text: Option<String>,
    /// Document store backing the session (overrides `editor.store`).
    #[arg(long = "store", value_enum)]
    pub store: Option<StoreArg>,
}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn run(&mut self, args: Args) -> Result<ShutdownReason> {
        self.configure_logging()?;
        Self::install_panic_hook();
        info!(target: "runtime", "startup");

        let config = load_from(args.config.clone())?;
        let text = args
            .text
            .clone()
            .unwrap_or_else(|| config.initial_text().to_string());
        let store = args.store.map(StoreKind::from).unwrap_or(config.store());

        let (cols, rows) = self.backend.size()?;
        let viewport = Viewport::new(rows, cols);
        info!(
            target: "runtime.startup",
            store = store.as_str(),
            chars = text.chars().count(),
            rows,
            cols,
            config_override = args.config.is_some(),
            "bootstrap_complete"
        );

        self.backend.set_title("gapvi")?;
        let _guard = self.backend.enter_guard()?;
        match store {
            StoreKind::Gap => run_session(GapBuffer::new(&text)?, viewport, config),
            StoreKind::Rope => run_session(RopeStore::new(&text), viewport, config),
        }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join("gapvi.log");
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, "gapvi.log");
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

fn run_session<S: TextStore>(store: S, viewport: Viewport, config: Config) -> Result<ShutdownReason> {
    let state = EditorState::new(store, viewport);
    let mut runtime = EditorRuntime::new(state, config);
    let mut out = stdout();
    let reason = runtime.run(&mut out)?;
    info!(target: "runtime", %reason, chars = runtime.state().store.len(), "session_end");
    Ok(reason)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    startup.run(args)?;
    Ok(())
}
