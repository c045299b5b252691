//! Unit tests for task records and their adapters.
