//! Interaction controller: load once, then re-filter on debounced input.
//!
//! The host forwards input events through a stream (see [`ControllerHandle`])
//! and receives render updates through a [`CatalogView`]. Criteria are read
//! from the host's controls via [`CriteriaSource`] only when a debounced run
//! actually fires, so a run always sees the latest state, including a form
//! that has finished clearing itself after a reset.

mod debounce;
pub use debounce::Debounce;

use std::{future::Future, time::Duration};

use common::{course_record::CourseRecord, filter_criteria::FilterCriteria, filter_pipeline::filter_courses};
use futures::{
    Stream, StreamExt,
    channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded},
    future::{self, Either},
};

use crate::{
    config::CatalogConfig,
    data_loader::DataLoader,
    error::LoadError,
    view::{CatalogView, ResultSummary, loaded_message},
};

pub const LOADING_STATUS: &str = "Loading courses...";
pub const FAILED_STATUS: &str = "Unable to load the course catalog.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Loading,
    Ready,
    Filtering,
    /// Terminal; only a full reload recovers.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A form-level change (checkbox, select, number field).
    Change,
    /// A keystroke in the text query field.
    Input,
    /// The form was reset.
    Reset,
}

/// Reads the current filter controls on demand.
pub trait CriteriaSource {
    fn read_criteria(&self) -> FilterCriteria;
}

impl<F: Fn() -> FilterCriteria> CriteriaSource for F {
    fn read_criteria(&self) -> FilterCriteria {
        self()
    }
}

/// Sending side of the controller's input stream.
#[derive(Debug, Clone)]
pub struct ControllerHandle {
    sender: UnboundedSender<InputEvent>,
}

impl ControllerHandle {
    pub fn channel() -> (Self, UnboundedReceiver<InputEvent>) {
        let (sender, receiver) = unbounded();
        (Self { sender }, receiver)
    }

    pub fn changed(&self) -> bool {
        self.send(InputEvent::Change)
    }

    pub fn input(&self) -> bool {
        self.send(InputEvent::Input)
    }

    pub fn reset(&self) -> bool {
        self.send(InputEvent::Reset)
    }

    /// Returns `false` once the controller has stopped listening.
    pub fn send(&self, event: InputEvent) -> bool {
        self.sender.unbounded_send(event).is_ok()
    }
}

enum Wake {
    Event(Option<InputEvent>),
    Timer,
}

pub struct CatalogController<V, C> {
    view: V,
    criteria: C,
    debounce_delay: Duration,
    state: ControllerState,
    courses: Vec<CourseRecord>,
    filter_runs: u64,
}

impl<V: CatalogView, C: CriteriaSource> CatalogController<V, C> {
    pub fn new(config: &CatalogConfig, view: V, criteria: C) -> Self {
        Self {
            view,
            criteria,
            debounce_delay: config.debounce_delay(),
            state: ControllerState::Loading,
            courses: Vec::new(),
            filter_runs: 0,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    /// Number of debounced pipeline runs so far; the initial render is not one.
    pub fn filter_runs(&self) -> u64 {
        self.filter_runs
    }

    /// Loads the catalog and renders it unfiltered, or enters `Failed`.
    pub async fn start(&mut self, loader: DataLoader) -> ControllerState {
        self.state = ControllerState::Loading;
        self.view.set_busy(true);
        self.view.set_status(LOADING_STATUS);

        let loaded = match loader.load().await {
            Ok(courses) if courses.is_empty() => Err(LoadError::EmptyDataset),
            other => other,
        };
        match loaded {
            Ok(courses) => {
                self.courses = courses;
                self.state = ControllerState::Ready;
                tracing::debug!(count = self.courses.len(), "catalog controller ready");
                self.view.loaded(&self.courses);
                let all = self.courses.iter().collect::<Vec<_>>();
                let summary = ResultSummary { shown: all.len(), total: self.courses.len() };
                self.view.render(&all, summary);
                self.view.set_status(&loaded_message(self.courses.len()));
            }
            Err(e) => {
                tracing::error!(error = %e, kind = ?e.kind(), "course catalog failed to load");
                self.state = ControllerState::Failed;
                self.view.show_error(&e.user_message());
                self.view.set_status(FAILED_STATUS);
            }
        }
        self.view.set_busy(false);
        self.state
    }

    /// One pipeline pass over the full catalog with freshly read criteria.
    pub fn refilter(&mut self) {
        if self.state != ControllerState::Ready {
            return;
        }
        self.state = ControllerState::Filtering;
        self.view.set_busy(true);

        let criteria = self.criteria.read_criteria();
        let filtered = filter_courses(&self.courses, &criteria);
        let summary = ResultSummary { shown: filtered.len(), total: self.courses.len() };
        self.filter_runs += 1;
        tracing::debug!(run = self.filter_runs, shown = summary.shown, total = summary.total, "catalog filtered");
        self.view.render(&filtered, summary);

        self.view.set_busy(false);
        self.state = ControllerState::Ready;
    }

    /// Loads the catalog, then serves input events until the stream ends.
    ///
    /// Each event (re)starts a debounce timer made by `sleep`; only when a
    /// timer completes without being superseded does a pipeline run happen.
    /// A run still pending when the stream ends is executed before returning.
    pub async fn run<E, S, T>(&mut self, loader: DataLoader, mut events: E, sleep: S) -> ControllerState
    where
        E: Stream<Item = InputEvent> + Unpin,
        S: Fn(Duration) -> T,
        T: Future<Output = ()>,
    {
        if self.start(loader).await == ControllerState::Failed {
            return self.state;
        }

        let mut debounce = Debounce::new(self.debounce_delay);
        loop {
            let wake = match debounce.timer_mut() {
                None => Wake::Event(events.next().await),
                Some(timer) => match future::select(events.next(), timer).await {
                    Either::Left((event, _)) => Wake::Event(event),
                    Either::Right(((), _)) => Wake::Timer,
                },
            };
            match wake {
                Wake::Event(Some(event)) => {
                    tracing::debug!(?event, "filter run scheduled");
                    debounce.schedule(sleep(debounce.delay()));
                }
                Wake::Event(None) => {
                    if let Some(timer) = debounce.timer_mut() {
                        timer.await;
                        debounce.fired();
                        self.refilter();
                    }
                    break;
                }
                Wake::Timer => {
                    debounce.fired();
                    self.refilter();
                }
            }
        }
        self.state
    }
}
