use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;

pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources, in order of increasing precedence:
/// 1. `config/default` at the workspace root (any supported extension),
/// 2. `config/{RUN_ENV}` (defaults to `debug`),
/// 3. environment variables with the `APP` prefix and `__` separator
///    (e.g. `APP_SERVER__PORT=3000`).
///
/// A `.env` file is loaded into the environment first. Secrets
/// (TINK_CLIENT_SECRET, STRIPE_SECRET_KEY) are not part of `AppConfig`;
/// the integration crates read them from the environment at call time.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "APP".to_string());

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .ancestors()
        .nth(2) // go from crates/onboardify_config to workspace root
        .expect("config crate should live two levels below the workspace root")
        .to_path_buf();

    let default_path = workspace_root.join("config/default");
    let env_path = workspace_root.join(format!("config/{}", run_env));

    let builder = Config::builder()
        .add_source(File::with_name(default_path.to_string_lossy().as_ref()).required(false))
        .add_source(File::with_name(env_path.to_string_lossy().as_ref()).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file defaults to `.env`; `DOTENV_OVERRIDE` selects another path.
/// Loading happens at most once per process.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
