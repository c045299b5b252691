//! Unit tests for the task entry form.
