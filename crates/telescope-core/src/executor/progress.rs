//! Progress notifications emitted while a run executes.

/// Something the executor reports as it moves through a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Run is about to start; `total` units of work are planned
    Started { total: usize },
    /// A model's run location has been initialized
    ModelStarted { model: String },
    /// One case finished, successfully or not
    CaseFinished {
        model: String,
        block_id: String,
        case_index: usize,
        succeeded: bool,
        completed: usize,
        total: usize,
    },
}

/// Callback invoked for every [`ProgressEvent`]
pub type ProgressCallback = Box<dyn Fn(&ProgressEvent) + Send + Sync>;

/// Progress counter for a single run
pub(crate) struct ProgressTracker<'a> {
    completed: usize,
    total: usize,
    callback: Option<&'a ProgressCallback>,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(callback: Option<&'a ProgressCallback>) -> Self {
        Self {
            completed: 0,
            total: 0,
            callback,
        }
    }

    fn emit(&self, event: ProgressEvent) {
        if let Some(callback) = &self.callback {
            callback(&event);
        }
    }

    pub(crate) fn start(&mut self, total: usize) {
        self.completed = 0;
        self.total = total;
        self.emit(ProgressEvent::Started { total });
    }

    pub(crate) fn model_started(&self, model: &str) {
        self.emit(ProgressEvent::ModelStarted {
            model: model.to_string(),
        });
    }

    pub(crate) fn advance(&mut self, model: &str, block_id: &str, case_index: usize, succeeded: bool) {
        self.completed += 1;
        self.emit(ProgressEvent::CaseFinished {
            model: model.to_string(),
            block_id: block_id.to_string(),
            case_index,
            succeeded,
            completed: self.completed,
            total: self.total,
        });
    }

    pub(crate) fn completed(&self) -> usize {
        self.completed
    }
}
