//! Cancel state of `flat_map` and `or_else`.
//!
//! A chained execution holds up to two resources: the state of the task
//! that ran first and, once that task has settled, the state of the task it
//! continued into together with that task's cleanup. Releasing the chain
//! releases both, each exactly once.

use std::cell::RefCell;
use std::rc::Rc;

use super::branches::Cleanup;
use super::cancel::CancelState;

#[derive(Default)]
struct Links {
    first: Option<CancelState>,
    next: Option<(CancelState, Cleanup)>,
    released: bool,
}

#[derive(Clone, Default)]
pub(super) struct Chain {
    links: Rc<RefCell<Links>>,
}

impl Chain {
    /// Records the state the first computation returned.
    pub(super) fn store_first(&self, state: CancelState) {
        self.links.borrow_mut().first = Some(state);
    }

    /// Records the continuation's state. A chain that was already released
    /// hands it straight to `cleanup`.
    pub(super) fn store_next(&self, state: CancelState, cleanup: Cleanup) {
        let released = self.links.borrow().released;
        if released {
            tracing::trace!("releasing late continuation state");
            cleanup(state);
        } else {
            self.links.borrow_mut().next = Some((state, cleanup));
        }
    }

    /// Runs `first_cleanup` on the first state and the continuation's own
    /// cleanup on its state.
    pub(super) fn release(&self, first_cleanup: &Cleanup) {
        let (first, next) = {
            let mut links = self.links.borrow_mut();
            links.released = true;
            (links.first.take(), links.next.take())
        };
        if let Some(state) = first {
            first_cleanup(state);
        }
        if let Some((state, cleanup)) = next {
            tracing::trace!("releasing continuation state");
            cleanup(state);
        }
    }
}
