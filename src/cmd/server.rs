use std::time::Duration;

/// How long blocking upstream calls may keep the process alive after shutdown
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

fn main() {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    runtime.block_on(livewatch::app::run());
    // a hung upstream call must not hold the process open
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
}
