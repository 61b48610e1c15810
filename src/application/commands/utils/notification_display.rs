use crate::domain::entities::DeliveredReminder;

/// Renders a fired reminder as terminal text according to its policy.
/// `badge_count` is the number of reminders delivered so far.
pub fn render_delivered(reminder: &DeliveredReminder, badge_count: usize) -> Option<String> {
    let policy = reminder.policy;
    if !policy.show_alert && !policy.show_banner && !policy.show_list {
        return None;
    }

    let mut out = String::new();
    if policy.play_sound {
        out.push('\u{7}');
    }
    out.push_str(&format!(
        "🔔 {} [{}]\n   {}",
        reminder.content.title,
        reminder.fired_at.format("%a %H:%M"),
        reminder.content.body
    ));
    if policy.set_badge {
        out.push_str(&format!("  ({} unread)", badge_count));
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NotificationHandle, NotificationPolicy, ReminderContent};
    use chrono::Local;

    fn reminder(policy: NotificationPolicy) -> DeliveredReminder {
        DeliveredReminder {
            handle: NotificationHandle(1),
            content: ReminderContent {
                title: "📅 Task reminder".to_string(),
                body: "Time for: Gym (Monday at 07:00)".to_string(),
            },
            fired_at: Local::now(),
            policy,
        }
    }

    #[test]
    fn default_policy_shows_silently() {
        let text = render_delivered(&reminder(NotificationPolicy::default()), 1).unwrap();
        assert!(text.contains("Time for: Gym (Monday at 07:00)"));
        assert!(!text.contains('\u{7}'));
        assert!(!text.contains("unread"));
    }

    #[test]
    fn sound_and_badge_are_rendered_when_enabled() {
        let policy = NotificationPolicy {
            play_sound: true,
            set_badge: true,
            ..NotificationPolicy::default()
        };
        let text = render_delivered(&reminder(policy), 3).unwrap();
        assert!(text.starts_with('\u{7}'));
        assert!(text.contains("(3 unread)"));
    }

    #[test]
    fn hidden_policy_renders_nothing() {
        let policy = NotificationPolicy {
            show_alert: false,
            show_banner: false,
            show_list: false,
            ..NotificationPolicy::default()
        };
        assert!(render_delivered(&reminder(policy), 1).is_none());
    }
}
