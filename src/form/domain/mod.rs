//! Domain model for the task entry form.
//!
//! A [`FormSession`] owns one [`Draft`] from the moment the form opens until
//! it is submitted successfully or cancelled. Accepted submissions produce a
//! [`TaskCommand`]; everything else is described by a [`SubmitOutcome`].

mod command;
mod draft;
mod error;
mod outcome;
mod session;

pub use command::TaskCommand;
pub use draft::{Draft, DraftField};
pub use error::{FormError, FormResult, ParseDraftFieldError};
pub use outcome::{Rejection, SubmitOutcome};
pub use session::{FormSession, SessionMode};
