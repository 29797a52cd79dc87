//! Mailbox between background tasks and the frame loop.
//!
//! Tasks started with `spawn_local` post their results here; the UI takes
//! them all at the start of each frame. A posted result is useless until
//! the next frame runs, so the bus can carry a wake-up hook (the app installs
//! a repaint request) that fires on every post.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use picflick_types::event::AppEvent;

type Wake = Rc<dyn Fn()>;

#[derive(Default)]
struct Mailbox {
    queue: VecDeque<AppEvent>,
    posted: u64,
}

/// Handle to a shared mailbox; clones post to and take from the same queue.
#[derive(Clone, Default)]
pub struct EventBus {
    mailbox: Rc<RefCell<Mailbox>>,
    wake: Option<Wake>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bus that calls `wake` after every [`emit`](Self::emit).
    pub fn with_wake(wake: impl Fn() + 'static) -> Self {
        Self {
            mailbox: Rc::default(),
            wake: Some(Rc::new(wake)),
        }
    }

    pub fn emit(&self, event: AppEvent) {
        log::trace!("Event posted for request {}", event.request_id());
        {
            let mut mailbox = self.mailbox.borrow_mut();
            mailbox.queue.push_back(event);
            mailbox.posted += 1;
        }
        // Borrow released first: the hook may re-enter the bus
        if let Some(wake) = &self.wake {
            wake();
        }
    }

    /// Take every pending event, oldest first.
    pub fn drain(&self) -> Vec<AppEvent> {
        std::mem::take(&mut self.mailbox.borrow_mut().queue).into()
    }

    pub fn has_pending(&self) -> bool {
        !self.mailbox.borrow().queue.is_empty()
    }

    /// Events posted over the bus lifetime, drained or not
    pub fn posted(&self) -> u64 {
        self.mailbox.borrow().posted
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mailbox = self.mailbox.borrow();
        f.debug_struct("EventBus")
            .field("pending", &mailbox.queue.len())
            .field("posted", &mailbox.posted)
            .field("wake", &self.wake.is_some())
            .finish()
    }
}
