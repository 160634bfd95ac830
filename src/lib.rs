// src/lib.rs
// ============================================================================
// Module: Flashcards Conformance Library
// Description: Shared configuration and helpers for conformance scenarios.
// Purpose: Provide common utilities for the Flashcards conformance binaries.
// Dependencies: std, serde_json
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration and the error-message matching
//! policy used by the Flashcards API conformance suites in `tests/`.
//! The suites are black-box: they observe the service under test over HTTP
//! and never reach into its storage.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod messages;
