//! Engine options.
//!
//! Both switches default to the lenient behaviour existing test fixtures rely
//! on: unparseable booleans coerce to `false`, and malformed documents recover
//! to an empty object with a warning.

/// Options controlling the lenient corners of the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraftOptions {
    /// Reject `:bool` literals that are neither `true` nor `false`.
    pub strict_booleans: bool,

    /// Fail on malformed document text instead of starting from `{}`.
    pub strict_documents: bool,
}

impl GraftOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict_booleans(mut self, strict: bool) -> Self {
        self.strict_booleans = strict;
        self
    }

    pub fn with_strict_documents(mut self, strict: bool) -> Self {
        self.strict_documents = strict;
        self
    }

    /// Both strict switches on.
    pub fn strict() -> Self {
        Self {
            strict_booleans: true,
            strict_documents: true,
        }
    }
}
