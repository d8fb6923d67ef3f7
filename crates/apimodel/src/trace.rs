//! Derivation tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect
//! derivation semantics.

///
/// DeriveTraceSink
///

pub trait DeriveTraceSink: Send + Sync {
    fn on_event(&self, event: DeriveTraceEvent<'_>);
}

///
/// DeriveTraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeriveTraceEvent<'a> {
    /// A relationship attribute was dropped because its target is already
    /// being expanded higher up the call tree.
    CyclePruned {
        model: &'a str,
        attribute: &'a str,
        target: &'a str,
    },

    /// A nested schema was registered on behalf of a relationship attribute.
    NestedRegistered {
        model: &'a str,
        attribute: &'a str,
        schema: &'a str,
    },
}
