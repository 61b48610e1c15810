use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::{Mutex, broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};
use tracing::{debug, info};

use crate::domain::entities::{
    DeliveredReminder, NotificationHandle, NotificationPolicy, PendingReminder, ReminderContent,
};
use crate::domain::errors::AgendaError;
use crate::domain::repositories::Notifier;

const IDLE_SLEEP: Duration = Duration::from_secs(300);
// wall clock is re-read at least this often while waiting
const MAX_WAIT: Duration = Duration::from_secs(60);

/// In-process notifier: keeps pending reminders in a min-heap and a
/// background task delivers each one when its trigger time arrives.
pub struct TokioNotifier {
    // reverse so that BinaryHeap (max-heap) behaves as a min-heap
    queue: Mutex<BinaryHeap<Reverse<PendingReminder>>>,
    wakeup: broadcast::Sender<()>,
    next_handle: AtomicU64,
    permission_granted: AtomicBool,
    grant_on_request: bool,
    policy: NotificationPolicy,
    delivered: mpsc::UnboundedSender<DeliveredReminder>,
}

impl TokioNotifier {
    /// `grant_on_request` is the answer the permission prompt will get.
    /// Delivered reminders come out of the returned receiver.
    pub fn new(
        policy: NotificationPolicy,
        grant_on_request: bool,
    ) -> (Arc<Self>, mpsc::UnboundedReceiver<DeliveredReminder>) {
        let (delivered, receiver) = mpsc::unbounded_channel();
        let (wakeup, _) = broadcast::channel(16);

        let notifier = Arc::new(Self {
            queue: Mutex::new(BinaryHeap::new()),
            wakeup,
            next_handle: AtomicU64::new(1),
            permission_granted: AtomicBool::new(false),
            grant_on_request,
            policy,
            delivered,
        });
        (notifier, receiver)
    }

    pub async fn pending_count(&self) -> usize {
        self.queue.lock().await.len()
    }

    /// Spawns the delivery loop. It stops once the delivery receiver is dropped.
    pub fn start(self: &Arc<Self>) -> JoinHandle<()> {
        let notifier = Arc::clone(self);
        // subscribe before spawning so no wake-up is missed
        let mut wakeup_receiver = self.wakeup.subscribe();

        tokio::spawn(async move {
            while !notifier.delivered.is_closed() {
                let wait = notifier.delivery_iteration().await;
                if let Some(wait) = wait {
                    tokio::select! {
                        _ = sleep(wait) => {}
                        _ = wakeup_receiver.recv() => {}
                    }
                }
            }
            debug!("Notifier loop stopped");
        })
    }

    /// Delivers everything that is due. Returns how long to wait before the
    /// next check, or `None` to check again immediately.
    async fn delivery_iteration(&self) -> Option<Duration> {
        let now = Local::now();
        let next_trigger = {
            let queue = self.queue.lock().await;
            queue.peek().map(|Reverse(pending)| pending.trigger)
        };

        match next_trigger {
            Some(trigger) if trigger <= now => {
                for pending in self.pop_due(now).await {
                    self.deliver(pending, now);
                }
                None
            }
            Some(trigger) => Some(
                (trigger - now)
                    .to_std()
                    .unwrap_or(Duration::from_secs(1))
                    .min(MAX_WAIT),
            ),
            None => Some(IDLE_SLEEP),
        }
    }

    async fn pop_due(&self, now: DateTime<Local>) -> Vec<PendingReminder> {
        let mut queue = self.queue.lock().await;
        let mut due = Vec::new();
        while queue
            .peek()
            .is_some_and(|Reverse(pending)| pending.trigger <= now)
        {
            if let Some(Reverse(pending)) = queue.pop() {
                due.push(pending);
            }
        }
        due
    }

    fn deliver(&self, pending: PendingReminder, fired_at: DateTime<Local>) {
        if !self.permission_granted.load(Ordering::SeqCst) {
            debug!("Dropping reminder {}: notification permission not granted", pending.handle);
            return;
        }

        info!("Delivering reminder {}: {}", pending.handle, pending.content.body);
        let delivered = DeliveredReminder {
            handle: pending.handle,
            content: pending.content,
            fired_at,
            policy: self.policy,
        };
        if self.delivered.send(delivered).is_err() {
            debug!("No display attached, reminder discarded");
        }
    }
}

#[async_trait]
impl Notifier for TokioNotifier {
    async fn request_permission(&self) {
        self.permission_granted
            .store(self.grant_on_request, Ordering::SeqCst);
        info!(
            "Notification permission {}",
            if self.grant_on_request { "granted" } else { "denied" }
        );
    }

    async fn schedule_at(
        &self,
        content: ReminderContent,
        trigger: DateTime<Local>,
    ) -> Result<NotificationHandle, AgendaError> {
        if self.delivered.is_closed() {
            return Err(AgendaError::Notification(
                "notification display is gone".to_string(),
            ));
        }

        let handle = NotificationHandle(self.next_handle.fetch_add(1, Ordering::SeqCst));
        {
            let mut queue = self.queue.lock().await;
            queue.push(Reverse(PendingReminder {
                handle,
                trigger,
                content,
            }));
        }

        // no receiver just means the loop has not started yet
        let _ = self.wakeup.send(());
        Ok(handle)
    }
}
