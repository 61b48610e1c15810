use crate::application::form::TaskForm;
use crate::application::services::occurrence_scheduler::ScheduleRequest;
use crate::application::services::reminder_service::ReminderService;
use crate::domain::entities::{AgendaItem, NotificationHandle};
use crate::domain::errors::AgendaError;
use crate::domain::repositories::AgendaRepository;
use crate::domain::value_objects::WeekdayFormat;
use chrono::{DateTime, Local, Weekday};
use std::collections::HashMap;
use tracing::{info, warn};

/// Outcome of a successful add
#[derive(Debug, Clone)]
pub struct AddedTask {
    pub id: u64,
    /// `None` when the time inputs are not numbers
    pub scheduled_for: Option<DateTime<Local>>,
    /// `None` when no reminder was accepted for the task
    pub reminder: Option<NotificationHandle>,
}

/// Owns the agenda list, the input form and the selected day.
///
/// The selected day is both the list filter and the day new tasks are
/// tagged with.
pub struct AgendaService {
    repo: Box<dyn AgendaRepository>,
    reminders: ReminderService,
    form: TaskForm,
    selected_day: Weekday,
    // task id -> notifier handle; nothing cancels through it yet
    reminder_handles: HashMap<u64, NotificationHandle>,
}

impl AgendaService {
    pub fn new(repo: Box<dyn AgendaRepository>, reminders: ReminderService, today: Weekday) -> Self {
        Self {
            repo,
            reminders,
            form: TaskForm::default(),
            selected_day: today,
            reminder_handles: HashMap::new(),
        }
    }

    pub fn selected_day(&self) -> Weekday {
        self.selected_day
    }

    pub fn select_day(&mut self, day: Weekday) {
        self.selected_day = day;
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    pub async fn add_task(&mut self) -> Result<AddedTask, AgendaError> {
        self.add_task_at(Local::now()).await
    }

    /// Adds the form contents as a task on the selected day and schedules its reminder.
    ///
    /// Only missing fields stop the add. A time that is not a number still
    /// lands in the list, it just gets no reminder.
    pub async fn add_task_at(&mut self, now: DateTime<Local>) -> Result<AddedTask, AgendaError> {
        let (task, time_label) = self.form.validate()?;
        let day = self.selected_day;

        let id = self.repo.add_item(time_label.clone(), task.clone(), day);

        let (scheduled_for, reminder) = match self.form.time() {
            Ok(time) => {
                let scheduled_for = ScheduleRequest::new(day, time, now).next_occurrence();
                let reminder = self
                    .schedule_reminder(id, &task, day, &time_label, scheduled_for)
                    .await;
                (Some(scheduled_for), reminder)
            }
            Err(e) => {
                warn!("No reminder for task #{}: {}", id, e);
                (None, None)
            }
        };

        self.form.reset();
        info!("Added task #{} '{}' on {} at {}", id, task, day.to_label(), time_label);

        Ok(AddedTask {
            id,
            scheduled_for,
            reminder,
        })
    }

    async fn schedule_reminder(
        &mut self,
        id: u64,
        task: &str,
        day: Weekday,
        time_label: &str,
        at: DateTime<Local>,
    ) -> Option<NotificationHandle> {
        match self
            .reminders
            .request_reminder(task, day.to_label(), time_label, at)
            .await
        {
            Ok(handle) => {
                self.reminder_handles.insert(id, handle);
                Some(handle)
            }
            Err(e) => {
                warn!("Could not schedule reminder for task #{}: {}", id, e);
                None
            }
        }
    }

    pub fn toggle_done(&mut self, id: u64) -> Result<AgendaItem, AgendaError> {
        self.repo.toggle_done(id).ok_or(AgendaError::TaskNotFound(id))
    }

    /// Removes the task from the list. Its reminder, if any, still fires.
    pub fn remove_task(&mut self, id: u64) -> Result<AgendaItem, AgendaError> {
        let removed = self.repo.remove_item(id).ok_or(AgendaError::TaskNotFound(id))?;
        info!("Removed task #{} '{}'", removed.id, removed.task);
        Ok(removed)
    }

    pub fn tasks_for_selected_day(&self) -> Vec<AgendaItem> {
        self.tasks_for_day(self.selected_day)
    }

    /// Tasks of `day` sorted ascending by their time label
    pub fn tasks_for_day(&self, day: Weekday) -> Vec<AgendaItem> {
        let mut tasks = self.repo.items_for_day(day);
        tasks.sort_by(|a, b| a.time.cmp(&b.time));
        tasks
    }

    pub fn reminder_handle(&self, id: u64) -> Option<NotificationHandle> {
        self.reminder_handles.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repositories::MemoryAgendaRepository;
    use crate::test_utils::RecordingNotifier;
    use chrono::{TimeZone, Timelike};
    use std::sync::Arc;

    // 2025-06-04 is a Wednesday
    fn wednesday_morning() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 4, 10, 15, 30).unwrap()
    }

    fn service(notifier: Arc<RecordingNotifier>) -> AgendaService {
        AgendaService::new(
            Box::new(MemoryAgendaRepository::new()),
            ReminderService::new(notifier),
            Weekday::Wed,
        )
    }

    async fn add(agenda: &mut AgendaService, day: Weekday, hour: &str, minute: &str, task: &str) -> u64 {
        agenda.select_day(day);
        let form = agenda.form_mut();
        form.set_hour(hour);
        form.set_minute(minute);
        form.set_task(task);
        agenda.add_task_at(wednesday_morning()).await.unwrap().id
    }

    #[tokio::test]
    async fn add_schedules_next_occurrence_and_resets_form() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut agenda = service(notifier.clone());

        agenda.select_day(Weekday::Fri);
        agenda.form_mut().set_task("Pay rent");
        agenda.form_mut().set_hour("18");
        agenda.form_mut().set_minute("30");

        let added = agenda.add_task_at(wednesday_morning()).await.unwrap();

        let scheduled_for = added.scheduled_for.unwrap();
        assert_eq!(scheduled_for, Local.with_ymd_and_hms(2025, 6, 6, 18, 30, 0).unwrap());
        assert_eq!(scheduled_for.second(), 0);
        assert_eq!(agenda.reminder_handle(added.id), added.reminder);
        assert_eq!(agenda.form(), &TaskForm::default());
        assert_eq!(agenda.selected_day(), Weekday::Fri);

        let scheduled = notifier.scheduled.lock().await;
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].0.body, "Time for: Pay rent (Friday at 18:30)");
    }

    #[tokio::test]
    async fn missing_fields_add_nothing() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut agenda = service(notifier.clone());

        let err = agenda.add_task_at(wednesday_morning()).await.unwrap_err();

        assert_eq!(err, AgendaError::MissingField("task"));
        assert!(agenda.tasks_for_selected_day().is_empty());
        assert!(notifier.scheduled.lock().await.is_empty());
    }

    #[tokio::test]
    async fn task_survives_notifier_failure() {
        let mut agenda = service(Arc::new(RecordingNotifier::failing()));
        agenda.form_mut().set_task("Gym");

        let added = agenda.add_task_at(wednesday_morning()).await.unwrap();

        assert!(added.reminder.is_none());
        assert_eq!(agenda.tasks_for_selected_day().len(), 1);
        assert_eq!(agenda.form(), &TaskForm::default());
    }

    #[tokio::test]
    async fn negative_hour_rolls_back_into_the_previous_day() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut agenda = service(notifier.clone());

        agenda.select_day(Weekday::Fri);
        agenda.form_mut().set_task("Night shift");
        agenda.form_mut().set_hour("-1");

        let added = agenda.add_task_at(wednesday_morning()).await.unwrap();

        // Friday at -1:00 is Thursday 23:00
        assert_eq!(
            added.scheduled_for,
            Some(Local.with_ymd_and_hms(2025, 6, 5, 23, 0, 0).unwrap())
        );
        assert_eq!(agenda.tasks_for_selected_day()[0].time, "-1:00");
        let scheduled = notifier.scheduled.lock().await;
        assert_eq!(scheduled[0].0.body, "Time for: Night shift (Friday at -1:00)");
    }

    #[tokio::test]
    async fn non_numeric_time_keeps_the_task_without_reminder() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut agenda = service(notifier.clone());

        agenda.form_mut().set_task("Gym");
        agenda.form_mut().set_minute("ab");

        let added = agenda.add_task_at(wednesday_morning()).await.unwrap();

        assert!(added.scheduled_for.is_none());
        assert!(added.reminder.is_none());
        assert_eq!(agenda.tasks_for_selected_day()[0].time, "08:ab");
        assert!(notifier.scheduled.lock().await.is_empty());
        assert_eq!(agenda.form(), &TaskForm::default());
    }

    #[tokio::test]
    async fn filters_by_selected_day_sorted_by_time() {
        let mut agenda = service(Arc::new(RecordingNotifier::default()));
        add(&mut agenda, Weekday::Mon, "18", "00", "Dinner").await;
        add(&mut agenda, Weekday::Tue, "09", "00", "Meeting").await;
        add(&mut agenda, Weekday::Mon, "7", "30", "Run").await;

        agenda.select_day(Weekday::Mon);
        let monday: Vec<_> = agenda
            .tasks_for_selected_day()
            .into_iter()
            .map(|item| (item.time, item.task))
            .collect();
        assert_eq!(
            monday,
            vec![
                ("07:30".to_string(), "Run".to_string()),
                ("18:00".to_string(), "Dinner".to_string()),
            ]
        );

        agenda.select_day(Weekday::Wed);
        assert!(agenda.tasks_for_selected_day().is_empty());
    }

    #[tokio::test]
    async fn toggle_and_remove_touch_only_their_task() {
        let mut agenda = service(Arc::new(RecordingNotifier::default()));
        let first = add(&mut agenda, Weekday::Mon, "08", "00", "A").await;
        let second = add(&mut agenda, Weekday::Mon, "09", "00", "B").await;
        let third = add(&mut agenda, Weekday::Mon, "10", "00", "C").await;

        let before = agenda.tasks_for_day(Weekday::Mon);

        let toggled = agenda.toggle_done(second).unwrap();
        assert!(toggled.done);
        let after_toggle = agenda.tasks_for_day(Weekday::Mon);
        assert_eq!(after_toggle[0], before[0]);
        assert_eq!(after_toggle[2], before[2]);

        agenda.remove_task(first).unwrap();
        let after_remove = agenda.tasks_for_day(Weekday::Mon);
        assert_eq!(after_remove.len(), 2);
        assert_eq!(after_remove[0], after_toggle[1]);
        assert_eq!(after_remove[1], after_toggle[2]);
        assert_eq!(after_remove[1].id, third);

        assert!(!agenda.toggle_done(second).unwrap().done);
    }

    #[tokio::test]
    async fn unknown_ids_are_reported() {
        let mut agenda = service(Arc::new(RecordingNotifier::default()));
        assert_eq!(agenda.toggle_done(42), Err(AgendaError::TaskNotFound(42)));
        assert_eq!(agenda.remove_task(42), Err(AgendaError::TaskNotFound(42)));
    }

    #[tokio::test]
    async fn removing_keeps_the_reminder_handle() {
        let mut agenda = service(Arc::new(RecordingNotifier::default()));
        let id = add(&mut agenda, Weekday::Thu, "12", "00", "Lunch").await;
        let handle = agenda.reminder_handle(id);

        agenda.remove_task(id).unwrap();

        assert!(handle.is_some());
        assert_eq!(agenda.reminder_handle(id), handle);
    }
}
