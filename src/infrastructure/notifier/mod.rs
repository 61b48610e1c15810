pub mod tokio_notifier;

pub use tokio_notifier::TokioNotifier;
