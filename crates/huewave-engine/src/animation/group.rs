/// Identifier of a completion batch, unique per [`Animator`](super::Animator).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub(crate) u64);

impl GroupId {
    #[inline]
    pub fn to_raw(self) -> u64 {
        self.0
    }
}

/// Continuation run once every `Once` member of a group has finished.
pub type OnComplete = Box<dyn FnOnce()>;

/// A set of tracks started together, plus the one-shot continuation.
///
/// Only `Once` members are counted. Firing consumes the group, so the
/// continuation cannot run twice.
pub(crate) struct AnimationGroup {
    id: GroupId,
    pending: usize,
    on_complete: Option<OnComplete>,
}

impl AnimationGroup {
    pub(crate) fn new(id: GroupId, pending: usize, on_complete: Option<OnComplete>) -> Self {
        Self {
            id,
            pending,
            on_complete,
        }
    }

    #[inline]
    pub(crate) fn id(&self) -> GroupId {
        self.id
    }

    #[inline]
    pub(crate) fn pending(&self) -> usize {
        self.pending
    }

    pub(crate) fn member_finished(&mut self) {
        debug_assert!(self.pending > 0, "group {:?} finished more members than it has", self.id);
        self.pending = self.pending.saturating_sub(1);
    }

    #[inline]
    pub(crate) fn is_done(&self) -> bool {
        self.pending == 0
    }

    pub(crate) fn fire(self) {
        if let Some(callback) = self.on_complete {
            callback();
        }
    }
}

impl std::fmt::Debug for AnimationGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationGroup")
            .field("id", &self.id)
            .field("pending", &self.pending)
            .field("has_callback", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn empty_group_is_done_immediately() {
        assert!(AnimationGroup::new(GroupId(1), 0, None).is_done());
    }

    #[test]
    fn done_after_last_member() {
        let mut group = AnimationGroup::new(GroupId(1), 2, None);
        group.member_finished();
        assert!(!group.is_done());
        group.member_finished();
        assert!(group.is_done());
    }

    #[test]
    fn fire_runs_callback() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let group = AnimationGroup::new(GroupId(7), 0, Some(Box::new(move || counter.set(counter.get() + 1))));
        group.fire();
        assert_eq!(hits.get(), 1);
    }
}
