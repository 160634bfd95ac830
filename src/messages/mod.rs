// src/messages/mod.rs
// ============================================================================
// Module: Error Message Matching
// Description: Extraction and comparison policy for API error messages.
// Purpose: Centralize how suites match `error.message` strings.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The Flashcards API wraps failures as `{"error": {"message": "..."}}`.
//! Message wording and casing have drifted across backend revisions
//! ("invalid flashcard id" vs "Invalid flashcard id"), so the default policy
//! is case-insensitive containment; strict equality is opt-in via
//! `FLASHCARDS_SYSTEM_TEST_STRICT_MESSAGES`.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod matcher;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use matcher::error_message;
pub use matcher::matches_message;
