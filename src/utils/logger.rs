use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub fn setup_logging(level: Level) {
    // logs go to stderr so they do not interleave with the agenda on stdout
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set default tracing subscriber: {}", e);
    }
}
