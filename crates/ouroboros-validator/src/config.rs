//! Configuration options for composite validation behavior
//!
//! Applied per array/object validator through
//! [`ArrayValidator::error_mode`](crate::ArrayValidator::error_mode),
//! [`ObjectValidator::extra`](crate::ObjectValidator::extra) and
//! `with_config`.

// ============================================================================
// Extra Field Handling
// ============================================================================

/// How to handle object keys not declared in the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtraFields {
    /// Keep extra keys in the output without examining them (default)
    #[default]
    Allow,
    /// Drop extra keys from the output
    Ignore,
    /// Reject input carrying extra keys
    Forbid,
}

// ============================================================================
// Error Reporting Mode
// ============================================================================

/// How many child failures a composite reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Stop at the first failing element or field (default)
    #[default]
    FailFast,
    /// Visit every element or field and report one error per failure
    CollectAll,
}

// ============================================================================
// Validation Config
// ============================================================================

/// Configuration options for composite validators
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// How to handle extra object keys (ignored by arrays)
    pub extra: ExtraFields,

    /// Fail-fast or collect-all reporting
    pub errors: ErrorMode,
}

impl ValidationConfig {
    /// Fail-fast, permissive defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject undeclared keys and report every failure
    pub fn strict() -> Self {
        Self {
            extra: ExtraFields::Forbid,
            errors: ErrorMode::CollectAll,
        }
    }

    /// Set extra field handling
    pub fn extra(mut self, extra: ExtraFields) -> Self {
        self.extra = extra;
        self
    }

    /// Set the error reporting mode
    pub fn errors(mut self, mode: ErrorMode) -> Self {
        self.errors = mode;
        self
    }

    pub(crate) fn collect_all(&self) -> bool {
        self.errors == ErrorMode::CollectAll
    }
}
