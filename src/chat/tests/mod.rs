//! Unit tests for the conversation core.
