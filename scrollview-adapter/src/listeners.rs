use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use scrollview::Subscription;

/// Window-level events a view may listen to while a pointer drag is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowEvent {
    PointerMove,
    PointerUp,
}

/// Identifies the view that owns a window binding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerOwner(u64);

#[derive(Debug, Default)]
struct Registry {
    next_owner: u64,
    next_binding: u64,
    bound: Vec<Binding>,
}

#[derive(Clone, Copy, Debug)]
struct Binding {
    id: u64,
    owner: ListenerOwner,
    event: WindowEvent,
}

/// The set of window-wide listener bindings on one host.
///
/// Pointer move/up must keep reaching a view after the cursor leaves its bounds, so a drag
/// binds them at window scope. Bindings only exist while a [`Subscription`] returned by
/// [`WindowListeners::bind`] is alive. Cloning shares the same registry.
#[derive(Clone, Debug, Default)]
pub struct WindowListeners {
    inner: Rc<RefCell<Registry>>,
}

impl WindowListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates an owner key for a new view.
    pub fn register_owner(&self) -> ListenerOwner {
        let mut reg = self.inner.borrow_mut();
        let owner = ListenerOwner(reg.next_owner);
        reg.next_owner = reg.next_owner.wrapping_add(1);
        owner
    }

    /// Binds `events` for `owner` until the returned subscription is released or dropped.
    pub fn bind(&self, owner: ListenerOwner, events: &[WindowEvent]) -> Subscription {
        let ids: Vec<u64> = {
            let mut reg = self.inner.borrow_mut();
            events
                .iter()
                .map(|&event| {
                    let id = reg.next_binding;
                    reg.next_binding = reg.next_binding.wrapping_add(1);
                    reg.bound.push(Binding { id, owner, event });
                    id
                })
                .collect()
        };
        atrace!(?owner, count = ids.len(), "window listeners bound");

        let inner = Rc::clone(&self.inner);
        Subscription::new(move || {
            inner.borrow_mut().bound.retain(|b| !ids.contains(&b.id));
            atrace!(?owner, "window listeners released");
        })
    }

    pub fn is_bound(&self, owner: ListenerOwner, event: WindowEvent) -> bool {
        self.inner
            .borrow()
            .bound
            .iter()
            .any(|b| b.owner == owner && b.event == event)
    }

    /// Owners currently listening for `event`, in binding order.
    pub fn owners_of(&self, event: WindowEvent) -> Vec<ListenerOwner> {
        let reg = self.inner.borrow();
        let mut out: Vec<ListenerOwner> = Vec::new();
        for b in reg.bound.iter().filter(|b| b.event == event) {
            if !out.contains(&b.owner) {
                out.push(b.owner);
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
