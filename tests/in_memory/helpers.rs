//! Shared test helpers for in-memory form integration tests.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use rstest::fixture;
use taskform::{
    form::{
        adapters::memory::RecordingNotifier, domain::DraftField, ports::Notifier,
        services::TaskFormService,
    },
    task::{
        adapters::memory::{InMemoryTaskStore, SequentialTaskIdGenerator},
        domain::{TaskFields, TaskStatus},
        ports::TaskIdGenerator,
    },
};

/// Service type wired to in-memory adapters.
pub type TestService =
    TaskFormService<SequentialTaskIdGenerator, RecordingNotifier, DefaultClock>;

/// A form service together with the adapters it reports to.
pub struct FormApp {
    /// The form service under test.
    pub service: TestService,
    /// Shared handle on the service's notifier.
    pub notifier: Arc<RecordingNotifier>,
    /// Store that emitted commands are applied to.
    pub store: InMemoryTaskStore,
}

/// Provides a fresh form service, notifier and store for each test.
#[fixture]
pub fn app() -> FormApp {
    let notifier = Arc::new(RecordingNotifier::new());
    let service = TaskFormService::new(
        Arc::new(SequentialTaskIdGenerator::new()),
        Arc::clone(&notifier),
        Arc::new(DefaultClock),
    );
    FormApp {
        service,
        notifier,
        store: InMemoryTaskStore::new(),
    }
}

/// Builds a complete field set.
pub fn fields(title: &str, start_date: &str, end_date: &str) -> TaskFields {
    TaskFields {
        title: title.to_owned(),
        description: format!("{title} details"),
        status: TaskStatus::Incomplete,
        start_date: start_date.to_owned(),
        end_date: end_date.to_owned(),
    }
}

/// Writes every field into the open session's draft.
///
/// # Errors
///
/// Returns an error if no session is open.
pub fn fill<G, N, C>(
    service: &mut TaskFormService<G, N, C>,
    fields: &TaskFields,
) -> Result<(), eyre::Report>
where
    G: TaskIdGenerator,
    N: Notifier,
    C: Clock + Send + Sync,
{
    service.set_field(DraftField::Title, fields.title.as_str())?;
    service.set_field(DraftField::Description, fields.description.as_str())?;
    service.set_field(DraftField::Status, fields.status.as_str())?;
    service.set_field(DraftField::StartDate, fields.start_date.as_str())?;
    service.set_field(DraftField::EndDate, fields.end_date.as_str())?;
    Ok(())
}
