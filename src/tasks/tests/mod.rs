//! Unit tests for the identity import workflow tasks.

mod support;
