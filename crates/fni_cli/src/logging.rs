use tracing_subscriber::EnvFilter;

/// Directives used for scriptable commands when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVES: &str = "fni_cli=info,fni_app=info,fni_storage=info,fni_core=warn";

/// Installs the global subscriber, writing to stderr.
///
/// The interactive screen owns the terminal, so it logs nothing unless
/// `RUST_LOG` asks for it.
pub fn init_logging(interactive: bool) {
    let default = if interactive { "off" } else { DEFAULT_DIRECTIVES };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
