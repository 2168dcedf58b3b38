//! Tests for the schedule registry
