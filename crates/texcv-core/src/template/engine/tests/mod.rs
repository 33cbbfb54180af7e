//! Tests for template engine
//!
//! Organised into focused submodules.

use super::*;

// Test helper functions
mod helpers;

// TokenStream tests
mod tokenstream;
