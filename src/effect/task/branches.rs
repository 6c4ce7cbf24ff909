//! Cancel-state bookkeeping for the two branches of `ap` and `concat`.
//!
//! Each branch's cleanup runs exactly once. When the combination settles a
//! single release job is deferred through the scheduler; it takes every
//! state stored so far. A state that arrives after that job has run is
//! released on arrival. The combined task's own cleanup takes whatever is
//! still stored.

use std::cell::RefCell;
use std::rc::Rc;

use super::cancel::CancelState;
use super::scheduler::Scheduler;

pub(super) type Cleanup = Rc<dyn Fn(CancelState)>;

#[derive(Default)]
struct Slots {
    states: [Option<CancelState>; 2],
    release_requested: bool,
    released: bool,
}

#[derive(Clone)]
pub(super) struct Branches {
    slots: Rc<RefCell<Slots>>,
    cleanups: Rc<[Cleanup; 2]>,
}

impl Branches {
    pub(super) fn new(cleanups: Rc<[Cleanup; 2]>) -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots::default())),
            cleanups,
        }
    }

    /// Records the state `index`'s computation returned.
    pub(super) fn store(&self, index: usize, state: CancelState) {
        let late = {
            let mut slots = self.slots.borrow_mut();
            if slots.released {
                Some(state)
            } else {
                slots.states[index] = Some(state);
                None
            }
        };
        if let Some(state) = late {
            tracing::trace!(branch = index, "releasing late branch state");
            (self.cleanups[index])(state);
        }
    }

    /// Defers the release of both branches. Only the first call schedules.
    pub(super) fn request_release(&self, scheduler: &dyn Scheduler) {
        {
            let mut slots = self.slots.borrow_mut();
            if slots.release_requested {
                return;
            }
            slots.release_requested = true;
        }
        tracing::trace!("deferring branch cleanup");
        let branches = self.clone();
        scheduler.defer(Box::new(move || branches.release()));
    }

    /// Runs the cleanup of every branch state still stored.
    pub(super) fn release(&self) {
        let taken: Vec<(usize, CancelState)> = {
            let mut slots = self.slots.borrow_mut();
            slots.released = true;
            slots
                .states
                .iter_mut()
                .enumerate()
                .filter_map(|(index, slot)| slot.take().map(|state| (index, state)))
                .collect()
        };
        for (index, state) in taken {
            tracing::trace!(branch = index, "running branch cleanup");
            (self.cleanups[index])(state);
        }
    }
}
