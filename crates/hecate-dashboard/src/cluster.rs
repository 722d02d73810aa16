/*
[INPUT]:  Read-only ClusterData records and panel key presses
[OUTPUT]: Display strings for the cluster detail panel and PanelAction results
[POS]:    View model for the cluster detail overlay
[UPDATE]: When cluster fields or panel actions change
*/

use chrono::{DateTime, Utc};
use crossterm::event::KeyCode;
use hecate_client::{ClusterData, ClusterStatus};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shown in the log section; log retrieval belongs to the logging service.
pub const LOGS_PLACEHOLDER: &str = "No logs available";

/// What the owner of the panel should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    None,
    Close,
    DiveToCrossroads(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterPanel {
    cluster: ClusterData,
}

impl ClusterPanel {
    pub fn new(cluster: ClusterData) -> Self {
        Self { cluster }
    }

    pub fn cluster(&self) -> &ClusterData {
        &self.cluster
    }

    pub fn title(&self, max_width: usize) -> String {
        truncate_to_width(&format!("Cluster: {}", self.cluster.name), max_width)
    }

    pub fn status_label(&self) -> &'static str {
        match self.cluster.status {
            ClusterStatus::Active => "Active",
            ClusterStatus::Idle => "Idle",
            ClusterStatus::Degraded => "Degraded",
            ClusterStatus::Offline => "Offline",
        }
    }

    pub fn health_label(&self) -> String {
        let health = self.cluster.health;
        if !health.is_finite() {
            return "-".to_string();
        }
        format!("{:.0}%", health.clamp(0.0, 1.0) * 100.0)
    }

    pub fn nodes_label(&self) -> String {
        plural(self.cluster.node_count, "node", "nodes")
    }

    pub fn tasks_label(&self) -> String {
        plural(self.cluster.active_tasks, "active task", "active tasks")
    }

    pub fn last_activity_label(&self, now: DateTime<Utc>) -> String {
        match self.cluster.last_activity {
            Some(at) => relative_time(at, now),
            None => "never".to_string(),
        }
    }

    pub fn tags_label(&self) -> String {
        if self.cluster.tags.is_empty() {
            "-".to_string()
        } else {
            self.cluster.tags.join(", ")
        }
    }

    pub fn description(&self) -> &str {
        self.cluster
            .description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or("No description")
    }

    pub fn handle_key(&self, key: KeyCode) -> PanelAction {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => PanelAction::Close,
            KeyCode::Enter | KeyCode::Char('d') => {
                PanelAction::DiveToCrossroads(self.cluster.id.clone())
            }
            _ => PanelAction::None,
        }
    }
}

/// Coarse "time ago" label; future timestamps read as "just now".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    match seconds {
        0..=59 => "just now".to_string(),
        60..=3_599 => format!("{}m ago", seconds / 60),
        3_600..=86_399 => format!("{}h ago", seconds / 3_600),
        _ => format!("{}d ago", seconds / 86_400),
    }
}

/// Cut `text` to at most `max_width` terminal columns, ending with `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > max_width - 1 {
            break;
        }
        used += width;
        out.push(ch);
    }
    out.push('…');
    out
}

fn plural(count: u32, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample() -> ClusterData {
        ClusterData {
            id: "cl-9".to_string(),
            name: "crossroads-east".to_string(),
            description: None,
            status: ClusterStatus::Degraded,
            node_count: 1,
            active_tasks: 4,
            health: 0.876,
            last_activity: None,
            tags: vec!["prod".to_string(), "east".to_string()],
        }
    }

    #[test]
    fn test_display_strings() {
        let panel = ClusterPanel::new(sample());
        assert_eq!(panel.status_label(), "Degraded");
        assert_eq!(panel.health_label(), "88%");
        assert_eq!(panel.nodes_label(), "1 node");
        assert_eq!(panel.tasks_label(), "4 active tasks");
        assert_eq!(panel.tags_label(), "prod, east");
        assert_eq!(panel.description(), "No description");
        assert_eq!(panel.last_activity_label(Utc::now()), "never");
    }

    #[test]
    fn test_health_is_clamped() {
        let mut cluster = sample();
        cluster.health = 1.7;
        assert_eq!(ClusterPanel::new(cluster.clone()).health_label(), "100%");
        cluster.health = f64::NAN;
        assert_eq!(ClusterPanel::new(cluster).health_label(), "-");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(relative_time(now - Duration::seconds(30), now), "just now");
        assert_eq!(relative_time(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3h ago");
        assert_eq!(relative_time(now - Duration::days(2), now), "2d ago");
        assert_eq!(relative_time(now + Duration::minutes(5), now), "just now");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("alpha", 10), "alpha");
        assert_eq!(truncate_to_width("alphabet", 5), "alph…");
        assert_eq!(truncate_to_width("集群集群", 5), "集群…");
        assert_eq!(truncate_to_width("alpha", 0), "");
    }

    #[test]
    fn test_handle_key_actions() {
        let panel = ClusterPanel::new(sample());
        assert_eq!(panel.handle_key(KeyCode::Esc), PanelAction::Close);
        assert_eq!(
            panel.handle_key(KeyCode::Char('d')),
            PanelAction::DiveToCrossroads("cl-9".to_string())
        );
        assert_eq!(panel.handle_key(KeyCode::Char('x')), PanelAction::None);
    }
}
