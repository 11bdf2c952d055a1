use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber; `RUST_LOG` directives win over `verbose`
pub fn init_tracing(verbose: bool) -> crate::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(log_filter(verbose, directives.as_deref()))
            .with_ansi(cfg!(not(target_os = "windows")))
            .with_line_number(true)
            .with_file(true)
            .finish(),
    )?;
    Ok(())
}

fn log_filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    let default = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(directives.unwrap_or_default())
}
