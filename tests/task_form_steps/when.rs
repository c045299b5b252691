//! When steps for task entry form BDD scenarios.

use super::world::FormWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the form is submitted")]
fn form_submitted(world: &mut FormWorld) -> Result<(), eyre::Report> {
    let outcome = world.service.submit().wrap_err("submit task form")?;
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when("the form is cancelled")]
fn form_cancelled(world: &mut FormWorld) {
    world.service.cancel();
}
