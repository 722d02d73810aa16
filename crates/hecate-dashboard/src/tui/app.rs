/*
[INPUT]:  Dashboard config, task creator, log buffer, app event sender
[OUTPUT]: AppState with cluster selection, active overlay, and submission tracking
[POS]:    TUI app state
[UPDATE]: When adding overlays, status flags, or app events
*/

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use hecate_client::ClusterData;
use ratatui::widgets::ListState;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use hecate_dashboard::logging::LogBufferHandle;
use hecate_dashboard::{
    ClusterPanel, FormVariant, StatusFlags, TaskCreator, TaskFormController, TaskFormView,
};

/// Everything the run loop reacts to besides the redraw tick.
pub(super) enum AppEvent {
    Input(CrosstermEvent),
    /// Sent by a form's close callback.
    FormClosed { form_id: u64 },
    SubmissionSettled { form_id: u64, outcome: Result<bool> },
    Health(bool),
}

pub(super) enum Overlay {
    TaskForm { form_id: u64, view: TaskFormView },
    Cluster(ClusterPanel),
}

pub(super) struct AppState {
    pub(super) creator: Arc<dyn TaskCreator>,
    pub(super) event_tx: UnboundedSender<AppEvent>,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) clusters: Vec<ClusterData>,
    pub(super) list_state: ListState,
    pub(super) overlay: Option<Overlay>,
    pub(super) form_variant: FormVariant,
    pub(super) is_loading: bool,
    pub(super) api_reachable: bool,
    pub(super) last_error: Option<String>,
    pub(super) show_status: bool,
    pub(super) status_message: String,
    next_form_id: u64,
}

impl AppState {
    pub(super) fn new(
        creator: Arc<dyn TaskCreator>,
        event_tx: UnboundedSender<AppEvent>,
        log_buffer: LogBufferHandle,
        clusters: Vec<ClusterData>,
        form_variant: FormVariant,
    ) -> Self {
        let mut list_state = ListState::default();
        if !clusters.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            creator,
            event_tx,
            log_buffer,
            clusters,
            list_state,
            overlay: None,
            form_variant,
            is_loading: false,
            // optimistic until the first health probe lands
            api_reachable: true,
            last_error: None,
            show_status: false,
            status_message: "Ready".to_string(),
            next_form_id: 1,
        }
    }

    pub(super) fn selected_cluster(&self) -> Option<&ClusterData> {
        let idx = self.list_state.selected()?;
        self.clusters.get(idx)
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        if self.clusters.is_empty() {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, (self.clusters.len() - 1) as isize) as usize;
        self.list_state.select(Some(next));
    }

    pub(super) fn status_flags(&self) -> StatusFlags {
        StatusFlags {
            api_reachable: self.api_reachable,
            submitting: self.is_loading,
            has_error: self.last_error.is_some(),
        }
    }

    pub(super) fn open_task_form(&mut self) {
        let form_id = self.next_form_id;
        self.next_form_id += 1;

        let tx = self.event_tx.clone();
        let controller = TaskFormController::new(
            Arc::clone(&self.creator),
            Box::new(move || {
                let _ = tx.send(AppEvent::FormClosed { form_id });
            }),
        );
        self.last_error = None;
        self.overlay = Some(Overlay::TaskForm {
            form_id,
            view: TaskFormView::new(controller, self.form_variant),
        });
        debug!(form_id, "task form opened");
    }

    pub(super) fn open_selected_cluster(&mut self) {
        match self.selected_cluster() {
            Some(cluster) => {
                let panel = ClusterPanel::new(cluster.clone());
                self.overlay = Some(Overlay::Cluster(panel));
            }
            None => self.status_message = "no cluster selected".to_string(),
        }
    }

    pub(super) fn close_overlay(&mut self) {
        self.overlay = None;
    }

    fn active_form_id(&self) -> Option<u64> {
        match &self.overlay {
            Some(Overlay::TaskForm { form_id, .. }) => Some(*form_id),
            _ => None,
        }
    }

    /// Validate the open form and hand its draft to the creator on a
    /// separate task. No-op while a submission is outstanding.
    pub(super) fn start_submission(&mut self) {
        if self.is_loading {
            return;
        }
        let Some(Overlay::TaskForm { form_id, view }) = self.overlay.as_mut() else {
            return;
        };
        let form_id = *form_id;

        let draft = match view.controller_mut().begin_submit() {
            Ok(draft) => draft,
            Err(err) => {
                self.status_message = err.to_string();
                return;
            }
        };

        self.is_loading = true;
        self.status_message = format!("creating task {}…", draft.name.trim());
        info!(form_id, name = %draft.name, priority = %draft.priority, "submitting task");

        let creator = view.controller().creator();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = creator.create_task(draft).await;
            let _ = tx.send(AppEvent::SubmissionSettled { form_id, outcome });
        });
    }

    pub(super) fn on_submission_settled(&mut self, form_id: u64, outcome: Result<bool>) {
        self.is_loading = false;
        let Some(Overlay::TaskForm { form_id: active, view }) = self.overlay.as_mut() else {
            warn!(form_id, "submission settled with no open form");
            return;
        };
        if *active != form_id {
            warn!(form_id, active = *active, "submission settled for a stale form");
            return;
        }

        match view.controller_mut().finish_submit(outcome) {
            Ok(true) => {
                view.sync_from_draft();
                self.last_error = None;
                self.status_message = "task created".to_string();
            }
            Ok(false) => {
                self.status_message = "task was not created".to_string();
            }
            Err(err) => {
                self.status_message = format!("create task failed: {err}");
                self.last_error = Some(err.to_string());
            }
        }
    }

    pub(super) fn on_form_closed(&mut self, form_id: u64) {
        if self.active_form_id() == Some(form_id) {
            self.last_error = None;
            self.close_overlay();
            debug!(form_id, "task form closed");
        }
    }

    pub(super) fn on_health(&mut self, reachable: bool) {
        if reachable != self.api_reachable {
            if reachable {
                info!("task API reachable");
            } else {
                warn!("task API unreachable");
            }
        }
        self.api_reachable = reachable;
    }

    pub(super) fn dive_to_crossroads(&mut self, cluster_id: &str) {
        info!(cluster_id = %cluster_id, "dive to crossroads requested");
        self.status_message = format!("crossroads view for {cluster_id} is not available here");
        self.close_overlay();
    }
}
