/*
[INPUT]:  Scripted creation outcomes
[OUTPUT]: Recording TaskCreator fake and controller fixtures
[POS]:    Test infrastructure - shared across dashboard integration tests
[UPDATE]: When the creator contract or controller constructor changes
*/

//! Common test utilities for hecate-dashboard tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use hecate_client::TaskDraft;
use hecate_dashboard::{DraftUpdate, TaskCreator, TaskFormController};

/// What the fake creator answers with.
#[derive(Debug, Clone)]
pub enum Outcome {
    Created,
    NotCreated,
    Fails(String),
}

/// Records every draft it is asked to create.
pub struct RecordingCreator {
    outcome: Outcome,
    calls: Mutex<Vec<TaskDraft>>,
}

impl RecordingCreator {
    pub fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<TaskDraft> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskCreator for RecordingCreator {
    async fn create_task(&self, draft: TaskDraft) -> Result<bool> {
        self.calls.lock().unwrap().push(draft);
        match &self.outcome {
            Outcome::Created => Ok(true),
            Outcome::NotCreated => Ok(false),
            Outcome::Fails(message) => Err(anyhow!(message.clone())),
        }
    }
}

/// Counts close callback invocations.
#[derive(Clone, Default)]
pub struct CloseCounter(Arc<AtomicUsize>);

impl CloseCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    pub fn callback(&self) -> Box<dyn FnMut() + Send> {
        let counter = Arc::clone(&self.0);
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }
}

/// Controller wired to a recording creator and a close counter
pub fn controller_with(outcome: Outcome) -> (TaskFormController, Arc<RecordingCreator>, CloseCounter) {
    let creator = RecordingCreator::new(outcome);
    let closes = CloseCounter::default();
    let controller = TaskFormController::new(creator.clone(), closes.callback());
    (controller, creator, closes)
}

pub fn fill_valid(controller: &mut TaskFormController) {
    controller.update_field(DraftUpdate::Name("Drain node".to_string()));
    controller.update_field(DraftUpdate::Description(
        "Drain node-7 before maintenance".to_string(),
    ));
}
