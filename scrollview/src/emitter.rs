use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::ScrollState;

/// A callback fired after the scrolled state changes.
///
/// Listeners receive the state that is now current; it is the same value
/// `ScrollController::state` would return.
pub type ScrollListener = Box<dyn FnMut(&ScrollState)>;

/// Identifies a registered scroll listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Fan-out of "scroll" notifications, in registration order.
///
/// Notifications are delivered synchronously, from inside the call that changed the state.
#[derive(Default)]
pub(crate) struct ScrollEmitter {
    next_id: u64,
    listeners: Vec<(ListenerId, ScrollListener)>,
}

impl ScrollEmitter {
    pub(crate) fn add(&mut self, listener: ScrollListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn emit(&mut self, state: &ScrollState) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(state);
        }
    }
}

impl fmt::Debug for ScrollEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
