//! Unit tests for message routing.
