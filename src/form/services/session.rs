//! Task entry form service: session handling and mutation dispatch.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info};

use crate::form::{
    config::{FormConfig, IncompletePolicy, MessageContext, MessageKey},
    domain::{
        Draft, DraftField, FormError, FormResult, FormSession, Rejection, SessionMode,
        SubmitOutcome, TaskCommand,
    },
    ports::{NotificationKind, Notifier},
    validation::{
        Completeness, check_completeness, detect_changes, validate_date_order, validate_title,
    },
};
use crate::task::{
    domain::{TaskFields, TaskRecord},
    ports::TaskIdGenerator,
};

/// Orchestrates one task entry form.
///
/// At most one session is open at a time. Each submission either dispatches
/// exactly one [`TaskCommand`] and closes the session, or leaves the session
/// open with its draft untouched.
pub struct TaskFormService<G, N, C>
where
    G: TaskIdGenerator,
    N: Notifier,
    C: Clock + Send + Sync,
{
    id_generator: Arc<G>,
    notifier: Arc<N>,
    clock: Arc<C>,
    config: FormConfig,
    session: Option<FormSession>,
}

impl<G, N, C> TaskFormService<G, N, C>
where
    G: TaskIdGenerator,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a form service with the default configuration.
    #[must_use]
    pub fn new(id_generator: Arc<G>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self::with_config(id_generator, notifier, clock, FormConfig::default())
    }

    /// Creates a form service with an explicit configuration.
    #[must_use]
    pub const fn with_config(
        id_generator: Arc<G>,
        notifier: Arc<N>,
        clock: Arc<C>,
        config: FormConfig,
    ) -> Self {
        Self {
            id_generator,
            notifier,
            clock,
            config,
            session: None,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Returns the open session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&FormSession> {
        self.session.as_ref()
    }

    /// Returns the open session's draft, if any.
    #[must_use]
    pub fn draft(&self) -> Option<&Draft> {
        self.session.as_ref().map(FormSession::draft)
    }

    /// Returns `true` while a session is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Opens a session, discarding any session already open.
    ///
    /// Callers must invoke this again whenever the mode or target record
    /// changes; the service does not watch for such changes.
    pub fn begin_session(&mut self, mode: SessionMode, original: Option<TaskRecord>) {
        let target = original.as_ref().map(TaskRecord::id);
        if self.session.is_some() {
            debug!(mode = %mode, "replacing open task form session");
        }
        self.session = Some(FormSession::begin(mode, original));
        debug!(mode = %mode, task_id = ?target, "task form session opened");
    }

    /// Replaces one draft field. No validation is performed.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NoOpenSession`] when no session is open and
    /// [`FormError::InvalidStatus`] when a status value is not recognised.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) -> FormResult<()> {
        let session = self.session.as_mut().ok_or(FormError::NoOpenSession)?;
        session.set_field(field, value.into())?;
        Ok(())
    }

    /// Replaces one draft field named by its form name, such as `"title"`
    /// or `"startDate"`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] when the name matches no draft
    /// field, otherwise behaves like [`Self::set_field`].
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
        let field = DraftField::try_from(name)?;
        self.set_field(field, value)
    }

    /// Closes the open session and discards its draft.
    ///
    /// No command and no notification are produced. Does nothing when no
    /// session is open.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            debug!(mode = %session.mode(), "task form session cancelled");
        }
    }

    /// Submits the open session's draft.
    ///
    /// Checks run in order: title, completeness, change detection (edit
    /// sessions), then date order. An accepted draft yields
    /// [`SubmitOutcome::Dispatched`] and closes the session. A rejected draft
    /// sends one error notification and leaves the session open. An
    /// incomplete draft is inert unless the configuration asks for it to be
    /// reported.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NoOpenSession`] when no session is open and
    /// [`FormError::MissingOriginal`] when an edit session has no original
    /// record.
    pub fn submit(&mut self) -> FormResult<SubmitOutcome> {
        let session = self.session.as_ref().ok_or(FormError::NoOpenSession)?;
        let mode = session.mode();
        let draft = session.draft();

        if let Err(rejection) = validate_title(draft) {
            return Ok(self.reject(rejection, MessageKey::TitleRequired));
        }

        let fields = match check_completeness(draft) {
            Completeness::Complete(fields) => fields,
            Completeness::Missing(missing) => return Ok(self.incomplete(missing)),
        };

        let command = match mode {
            SessionMode::Create => {
                if let Err(rejection) = validate_date_order(&fields) {
                    return Ok(self.reject(rejection, MessageKey::TaskAddFailed));
                }
                let record = TaskRecord::new(self.id_generator.generate(), fields, &*self.clock);
                TaskCommand::Add(record)
            }
            SessionMode::Edit => {
                let original = session.original().ok_or(FormError::MissingOriginal)?;
                let changes = detect_changes(original, &fields);
                if changes.is_empty() {
                    return Ok(self.reject(Rejection::NoChangeDetected, MessageKey::NoChanges));
                }
                if let Err(rejection) = validate_date_order(&fields) {
                    return Ok(self.reject(rejection, MessageKey::TaskUpdateFailed));
                }
                debug!(
                    task_id = %original.id(),
                    changed = ?changes.changed(),
                    "edit draft differs from original"
                );
                TaskCommand::Update(original.with_fields(fields))
            }
        };

        Ok(self.dispatch(command))
    }

    fn dispatch(&mut self, command: TaskCommand) -> SubmitOutcome {
        let key = match command {
            TaskCommand::Add(_) => MessageKey::TaskAdded,
            TaskCommand::Update(_) => MessageKey::TaskUpdated,
        };
        let record = command.record();
        info!(task_id = %record.id(), command = key.as_str(), "task form dispatched command");
        let message = self.render(key, &context_for_fields(record.fields(), self.mode()));
        self.notifier.notify(NotificationKind::Success, &message);
        self.session = None;
        SubmitOutcome::Dispatched(command)
    }

    fn reject(&self, rejection: Rejection, key: MessageKey) -> SubmitOutcome {
        debug!(reason = %rejection, "task form submission rejected");
        let message = self.render_for_draft(key);
        self.notifier.notify(NotificationKind::Error, &message);
        SubmitOutcome::Rejected(rejection)
    }

    fn incomplete(&self, missing: Vec<DraftField>) -> SubmitOutcome {
        match self.config.incomplete_policy {
            IncompletePolicy::Silent => {
                debug!(missing = ?missing, "inert task form submission");
                SubmitOutcome::Inert { missing }
            }
            IncompletePolicy::Notify => {
                self.reject(Rejection::IncompleteForm { missing }, MessageKey::IncompleteForm)
            }
        }
    }

    fn mode(&self) -> SessionMode {
        self.session
            .as_ref()
            .map_or(SessionMode::Create, FormSession::mode)
    }

    fn render_for_draft(&self, key: MessageKey) -> String {
        let Some(session) = self.session.as_ref() else {
            return self.config.messages.template(key).to_owned();
        };
        let draft = session.draft();
        let context = MessageContext {
            mode: session.mode(),
            title: draft.title(),
            start_date: draft.start_date(),
            end_date: draft.end_date(),
        };
        self.render(key, &context)
    }

    fn render(&self, key: MessageKey, context: &MessageContext<'_>) -> String {
        self.config.messages.render(key, context)
    }
}

fn context_for_fields(fields: &TaskFields, mode: SessionMode) -> MessageContext<'_> {
    MessageContext {
        mode,
        title: &fields.title,
        start_date: &fields.start_date,
        end_date: &fields.end_date,
    }
}
