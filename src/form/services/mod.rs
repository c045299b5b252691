//! Application services for the task entry form.

mod session;

pub use session::TaskFormService;
