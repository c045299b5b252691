//! Shared world state for task entry form BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskform::{
    form::{
        adapters::memory::RecordingNotifier, domain::SubmitOutcome, services::TaskFormService,
    },
    task::{adapters::memory::SequentialTaskIdGenerator, domain::TaskRecord},
};

/// Service type used by the BDD world.
pub type TestFormService =
    TaskFormService<SequentialTaskIdGenerator, RecordingNotifier, DefaultClock>;

/// Scenario world for form behaviour tests.
pub struct FormWorld {
    /// The form service under test.
    pub service: TestFormService,
    /// Shared handle on the service's notifier.
    pub notifier: Arc<RecordingNotifier>,
    /// Record an edit session started from.
    pub original: Option<TaskRecord>,
    /// Outcome of the last submission.
    pub last_outcome: Option<SubmitOutcome>,
}

impl FormWorld {
    /// Creates a world with no open session.
    #[must_use]
    pub fn new() -> Self {
        let notifier = Arc::new(RecordingNotifier::new());
        let service = TaskFormService::new(
            Arc::new(SequentialTaskIdGenerator::new()),
            Arc::clone(&notifier),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            notifier,
            original: None,
            last_outcome: None,
        }
    }
}

impl Default for FormWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> FormWorld {
    FormWorld::default()
}
