mod app_state;
mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use expensewise_common::ExpenseWiseError;
use expensewise_config::ExpenseWiseConfig;
use tracing_subscriber::EnvFilter;

/// Load the first `.env` file found among the workspace root and the
/// current directory.
///
/// Variables already present in the environment win.
fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root, two levels up from crates/expensewise-app/
        manifest_dir.join("..").join("..").join(".env"),
        PathBuf::from(".env"),
    ];
    load_dotenv_from(&candidates)
}

fn load_dotenv_from(candidates: &[PathBuf]) -> Result<Option<PathBuf>, dotenvy::Error> {
    match candidates.iter().find(|path| path.is_file()) {
        Some(path) => {
            dotenvy::from_path(path)?;
            Ok(Some(path.clone()))
        }
        None => Ok(None),
    }
}

/// Load config and apply command-line overrides.
///
/// Runs before logging is initialised, so problems are returned as
/// messages for the caller to log. An override that would make the config
/// invalid is dropped and the loaded value kept.
fn load_config(args: &cli::Args) -> (ExpenseWiseConfig, Vec<String>) {
    let mut warnings = Vec::new();

    let loaded = match args.config {
        Some(ref path) => expensewise_config::load_config_from(Path::new(path)),
        None => expensewise_config::load_config(),
    };

    let mut config = loaded.unwrap_or_else(|e| {
        warnings.push(format!("Config load failed, using defaults: {e}"));
        ExpenseWiseConfig::default()
    });

    if let Some(ref model) = args.model {
        apply_override(&mut config, &mut warnings, "--model", |c| {
            c.assistant.model = model.clone();
        });
    }
    if let Some(timeout) = args.timeout {
        apply_override(&mut config, &mut warnings, "--timeout", |c| {
            c.assistant.request_timeout_secs = timeout;
        });
    }

    (config, warnings)
}

fn apply_override(
    config: &mut ExpenseWiseConfig,
    warnings: &mut Vec<String>,
    flag: &str,
    apply: impl FnOnce(&mut ExpenseWiseConfig),
) {
    let mut candidate = config.clone();
    apply(&mut candidate);
    match expensewise_config::validation::validate(&candidate) {
        Ok(()) => *config = candidate,
        Err(e) => warnings.push(format!("Ignoring {flag}: {e}")),
    }
}

fn run(config: ExpenseWiseConfig) -> Result<(), ExpenseWiseError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ExpenseWiseError::Runtime(format!("failed to create tokio runtime: {e}")))?;

    let mut app =
        app_state::ExpenseWiseApp::new(&config, runtime.handle().clone(), std::io::stdout())?;

    tracing::info!("Entering input loop");
    runtime.block_on(app.run(tokio::io::BufReader::new(tokio::io::stdin())))?;
    Ok(())
}

fn main() -> ExitCode {
    // Load .env file before anything reads the environment
    let dotenv = load_dotenv();

    let args = cli::parse();
    let (config, config_warnings) = load_config(&args);

    // Initialize logging: --log-level wins over the config file
    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| format!("expensewise={}", config.logging.level.as_directive()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
            ),
        )
        .init();

    tracing::info!("ExpenseWise v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    match dotenv {
        Ok(Some(path)) => tracing::info!("Loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(e) => tracing::warn!("Failed to load .env file: {e}"),
    }
    for warning in &config_warnings {
        tracing::warn!("{warning}");
    }
    tracing::info!(
        model = %config.assistant.model,
        timeout_secs = config.assistant.request_timeout_secs,
        "Config loaded"
    );

    match run(config) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn args(extra: &[&str], config: &Path) -> cli::Args {
        let mut argv = vec!["expensewise", "--config", config.to_str().unwrap()];
        argv.extend_from_slice(extra);
        cli::Args::try_parse_from(argv).unwrap()
    }

    fn config_file(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[assistant]\nmodel = \"gemini-2.0-flash\"\nrequest_timeout_secs = 45\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn dotenv_loads_first_existing_file_without_overriding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "# assistant credentials\n\
             export EXPENSEWISE_DOTENV_EXPORTED=yes\n\
             EXPENSEWISE_DOTENV_QUOTED=\"two words\"\n\
             EXPENSEWISE_DOTENV_PRESET=from-file\n",
        )
        .unwrap();
        std::env::set_var("EXPENSEWISE_DOTENV_PRESET", "from-env");

        let loaded = load_dotenv_from(&[dir.path().join("missing.env"), path.clone()]).unwrap();

        assert_eq!(loaded, Some(path));
        assert_eq!(std::env::var("EXPENSEWISE_DOTENV_EXPORTED").unwrap(), "yes");
        assert_eq!(std::env::var("EXPENSEWISE_DOTENV_QUOTED").unwrap(), "two words");
        assert_eq!(std::env::var("EXPENSEWISE_DOTENV_PRESET").unwrap(), "from-env");
    }

    #[test]
    fn dotenv_without_candidates_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_dotenv_from(&[dir.path().join(".env")]).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn valid_overrides_replace_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file(&dir);

        let (config, warnings) =
            load_config(&args(&["--model", "gemini-2.5-pro", "--timeout", "0"], &path));

        assert!(warnings.is_empty());
        assert_eq!(config.assistant.model, "gemini-2.5-pro");
        assert_eq!(config.assistant.request_timeout_secs, 0);
    }

    #[test]
    fn invalid_overrides_keep_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file(&dir);

        let (config, warnings) = load_config(&args(&["--model", "", "--timeout", "9000"], &path));

        assert_eq!(config.assistant.model, "gemini-2.0-flash");
        assert_eq!(config.assistant.request_timeout_secs, 45);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("Ignoring --model"));
        assert!(warnings[1].starts_with("Ignoring --timeout"));
    }

    #[test]
    fn one_bad_override_does_not_block_the_other() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file(&dir);

        let (config, warnings) = load_config(&args(&["--model", "  ", "--timeout", "5"], &path));

        assert_eq!(config.assistant.model, "gemini-2.0-flash");
        assert_eq!(config.assistant.request_timeout_secs, 5);
        assert_eq!(warnings.len(), 1);
    }
}
