use std::sync::Arc;

/// A bound event slot: a deferred action taking no arguments.
///
/// The unit return type makes the action's result structurally irrelevant;
/// only what the action does on invocation matters. Handlers are shared, so
/// one action built up front can be bound on every render.
pub type EventHandler = Arc<dyn Fn() + Send + Sync + 'static>;
