//! Unit tests for back-office components.
