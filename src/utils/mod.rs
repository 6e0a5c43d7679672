// Shared utilities for TPG

pub mod error;
pub mod validation;
