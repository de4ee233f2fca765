use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::screen::ScreenId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Irreversible: the back stack is discarded.
    Replace,
    /// Reversible: the previous screen is kept for `back()`.
    Push,
    Back,
}

/// One completed screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ScreenId,
    pub to: ScreenId,
    pub kind: TransitionKind,
}

/// Holds the current screen and performs transitions.
///
/// Cloning yields another handle onto the same navigation state, so
/// controllers can be given their own copy. Every transition succeeds and
/// is published to all subscribers in order.
#[derive(Clone)]
pub struct NavigationRouter {
    inner: Arc<Mutex<RouterInner>>,
}

struct RouterInner {
    current: ScreenId,
    back_stack: Vec<ScreenId>,
    subscribers: Vec<mpsc::UnboundedSender<Transition>>,
}

impl NavigationRouter {
    /// Router positioned on [`ScreenId::Welcome`].
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(RouterInner {
                current: ScreenId::default(),
                back_stack: Vec::new(),
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn current(&self) -> ScreenId {
        self.inner.lock().current
    }

    pub fn can_go_back(&self) -> bool {
        !self.inner.lock().back_stack.is_empty()
    }

    /// Receive every transition made after this call.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<Transition> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.lock().subscribers.push(tx);
        rx
    }

    pub fn replace(&self, target: ScreenId) -> Transition {
        let mut inner = self.inner.lock();
        inner.back_stack.clear();
        inner.apply(target, TransitionKind::Replace)
    }

    pub fn push(&self, target: ScreenId) -> Transition {
        let mut inner = self.inner.lock();
        let from = inner.current;
        inner.back_stack.push(from);
        inner.apply(target, TransitionKind::Push)
    }

    /// Go back if `target` is directly below the current screen, otherwise
    /// push it. Alternating links never grow the stack.
    pub fn push_or_pop_to(&self, target: ScreenId) -> Transition {
        let mut inner = self.inner.lock();
        if inner.back_stack.last() == Some(&target) {
            inner.back_stack.pop();
            return inner.apply(target, TransitionKind::Back);
        }
        let from = inner.current;
        inner.back_stack.push(from);
        inner.apply(target, TransitionKind::Push)
    }

    /// Pop to the previous screen. Returns `None` when there is nothing to
    /// return to, e.g. right after a replace.
    pub fn back(&self) -> Option<Transition> {
        let mut inner = self.inner.lock();
        let Some(target) = inner.back_stack.pop() else {
            debug!(current = %inner.current, "back ignored: empty stack");
            return None;
        };
        Some(inner.apply(target, TransitionKind::Back))
    }
}

impl Default for NavigationRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterInner {
    fn apply(&mut self, target: ScreenId, kind: TransitionKind) -> Transition {
        let transition = Transition {
            from: self.current,
            to: target,
            kind,
        };
        self.current = target;
        info!(from = %transition.from, to = %transition.to, ?kind, "navigate");
        self.subscribers.retain(|tx| tx.send(transition).is_ok());
        transition
    }
}
