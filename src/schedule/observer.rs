//! Outward notifications from a reveal session.

/// Receives the two notifications a reveal session emits.
///
/// Both are plain "it happened" signals. `on_update` fires once per tick
/// that grew the revealed count; `on_complete` fires exactly once per
/// session, and never for a session that was replaced before finishing.
pub trait RevealObserver {
    /// The revealed count grew.
    fn on_update(&mut self) {}

    /// The whole tree is revealed.
    fn on_complete(&mut self) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RevealObserver for NoopObserver {}

/// Observer built from two closures. See [`on_events`].
pub struct FnObserver<U, C> {
    update: U,
    complete: C,
}

impl<U: FnMut(), C: FnMut()> RevealObserver for FnObserver<U, C> {
    fn on_update(&mut self) {
        (self.update)();
    }

    fn on_complete(&mut self) {
        (self.complete)();
    }
}

/// Build an observer from an update closure and a completion closure.
pub fn on_events<U: FnMut(), C: FnMut()>(update: U, complete: C) -> FnObserver<U, C> {
    FnObserver { update, complete }
}
