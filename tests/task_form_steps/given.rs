//! Given steps for task entry form BDD scenarios.

use super::world::FormWorld;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use taskform::{
    form::domain::{DraftField, SessionMode},
    task::domain::{TaskFields, TaskId, TaskRecord, TaskStatus},
};

#[given("a create session")]
fn create_session(world: &mut FormWorld) {
    world.service.begin_session(SessionMode::Create, None);
}

#[given(r#"an edit session for an existing task titled "{title}""#)]
fn edit_session(world: &mut FormWorld, title: String) {
    let original = TaskRecord::new(
        TaskId::new(),
        TaskFields {
            title,
            description: "2%".to_owned(),
            status: TaskStatus::Incomplete,
            start_date: "2024-01-01".to_owned(),
            end_date: "2024-01-02".to_owned(),
        },
        &DefaultClock,
    );
    world
        .service
        .begin_session(SessionMode::Edit, Some(original.clone()));
    world.original = Some(original);
}

#[given(r#"the draft title is "{title}""#)]
fn draft_title(world: &mut FormWorld, title: String) -> Result<(), eyre::Report> {
    world.service.set_field(DraftField::Title, title)?;
    Ok(())
}

#[given("the draft title is cleared")]
fn draft_title_cleared(world: &mut FormWorld) -> Result<(), eyre::Report> {
    world.service.set_field(DraftField::Title, "")?;
    Ok(())
}

#[given(r#"the draft description is "{description}""#)]
fn draft_description(world: &mut FormWorld, description: String) -> Result<(), eyre::Report> {
    world.service.set_field(DraftField::Description, description)?;
    Ok(())
}

#[given("the draft description is cleared")]
fn draft_description_cleared(world: &mut FormWorld) -> Result<(), eyre::Report> {
    world.service.set_field(DraftField::Description, "")?;
    Ok(())
}

#[given(r#"the draft status is "{status}""#)]
fn draft_status(world: &mut FormWorld, status: String) -> Result<(), eyre::Report> {
    world.service.set_field(DraftField::Status, status)?;
    Ok(())
}

#[given(r#"the draft runs from "{start_date}" to "{end_date}""#)]
fn draft_dates(
    world: &mut FormWorld,
    start_date: String,
    end_date: String,
) -> Result<(), eyre::Report> {
    world.service.set_field(DraftField::StartDate, start_date)?;
    world.service.set_field(DraftField::EndDate, end_date)?;
    Ok(())
}
