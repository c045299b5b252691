//! Notification adapters observed through the form service.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::in_memory::helpers::{FormApp, app, fields, fill};
use mockable::DefaultClock;
use rstest::rstest;
use taskform::{
    form::{
        adapters::{
            TracingNotifier,
            memory::{Notification, RecordingNotifier},
        },
        config::{FormConfig, MessageCatalog},
        domain::{DraftField, SessionMode},
        ports::{NotificationKind, Notifier},
        services::TaskFormService,
    },
    task::adapters::UuidTaskIdGenerator,
};
use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
};

const NOTIFY_TARGET: &str = "taskform::notify";

#[derive(Debug, Clone, PartialEq, Eq)]
struct CapturedEvent {
    level: Level,
    message: String,
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureLayer {
    fn notify_events(&self) -> Vec<CapturedEvent> {
        self.events.lock().expect("capture lock").clone()
    }
}

#[derive(Default)]
struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if event.metadata().target() != NOTIFY_TARGET {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.events.lock().expect("capture lock").push(CapturedEvent {
            level: *event.metadata().level(),
            message: visitor.0,
        });
    }
}

fn capture<T>(body: impl FnOnce() -> T) -> (T, Vec<CapturedEvent>) {
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let value = tracing::subscriber::with_default(subscriber, body);
    (value, layer.notify_events())
}

#[rstest]
#[case(NotificationKind::Success, Level::INFO)]
#[case(NotificationKind::Error, Level::WARN)]
fn tracing_notifier_maps_kind_to_level(#[case] kind: NotificationKind, #[case] level: Level) {
    let ((), events) = capture(|| TracingNotifier.notify(kind, "Saved"));

    assert_eq!(
        events,
        vec![CapturedEvent {
            level,
            message: "Saved".to_owned(),
        }]
    );
}

#[rstest]
fn tracing_notifier_logs_service_notifications() -> Result<(), eyre::Report> {
    let mut service = TaskFormService::new(
        Arc::new(UuidTaskIdGenerator),
        Arc::new(TracingNotifier),
        Arc::new(DefaultClock),
    );

    let (outcome, events) = capture(|| -> Result<_, eyre::Report> {
        service.begin_session(SessionMode::Create, None);
        service.submit()?;
        service.set_field(DraftField::Title, "Log me")?;
        service.set_field(DraftField::Description, "via tracing")?;
        service.set_field(DraftField::StartDate, "2024-01-01")?;
        service.set_field(DraftField::EndDate, "2024-01-01")?;
        Ok(service.submit()?)
    });

    eyre::ensure!(outcome?.command().is_some(), "expected dispatch");
    eyre::ensure!(
        events
            == vec![
                CapturedEvent {
                    level: Level::WARN,
                    message: "Please enter a title".to_owned(),
                },
                CapturedEvent {
                    level: Level::INFO,
                    message: "Task added successfully".to_owned(),
                },
            ],
        "unexpected log events {events:?}"
    );
    Ok(())
}

#[rstest]
fn templated_messages_reach_the_notifier() -> Result<(), eyre::Report> {
    let notifier = Arc::new(RecordingNotifier::new());
    let config = FormConfig {
        messages: MessageCatalog {
            task_added: "Added \"{{ title }}\"".to_owned(),
            title_required: "A {{ mode }} needs a title".to_owned(),
            ..MessageCatalog::default()
        },
        ..FormConfig::default()
    };
    let mut service = TaskFormService::with_config(
        Arc::new(UuidTaskIdGenerator),
        Arc::clone(&notifier),
        Arc::new(DefaultClock),
        config,
    );

    service.begin_session(SessionMode::Create, None);
    service.submit()?;
    fill(&mut service, &fields("Stretch", "2024-02-01", "2024-02-02"))?;
    service.submit()?;

    eyre::ensure!(
        notifier.notifications()
            == vec![
                Notification::new(NotificationKind::Error, "A create needs a title"),
                Notification::new(NotificationKind::Success, "Added \"Stretch\""),
            ],
        "unexpected notifications {:?}",
        notifier.notifications()
    );
    Ok(())
}

#[rstest]
fn recording_notifier_can_be_cleared_between_sessions(
    mut app: FormApp,
) -> Result<(), eyre::Report> {
    app.service.begin_session(SessionMode::Create, None);
    app.service.submit()?;
    eyre::ensure!(app.notifier.notifications().len() == 1, "expected one notification");

    app.notifier.clear();

    eyre::ensure!(app.notifier.last().is_none(), "recorder should be empty");
    Ok(())
}
