//! Deferred batch reclaimer for released nodes
//!
//! Dropping a [`Json`](crate::Json) that owns a number, string, object or
//! array node does not free the node on the spot. The node is pushed onto a
//! per-thread buffer, and once more than [`ReclaimConfig::threshold`] nodes
//! are pending the whole buffer is freed in one pass.
//!
//! Freeing a container releases its children, which land back in the buffer
//! while a drain is running. The drain loops until the buffer is empty, so
//! tearing down a deeply nested tree never recurses.
//!
//! Shared leaves (null, `true`, `false`) are never released.
//!
//! The buffer is thread-local: each thread reclaims the nodes dropped on it.
//! Nodes still pending when a thread exits are freed by the thread-local's
//! destructor.

use std::cell::RefCell;

use crate::config::ReclaimConfig;
use crate::value::Node;

thread_local! {
    static RECLAIMER: RefCell<Reclaimer> = RefCell::new(Reclaimer::new());
}

/// Counters for the current thread's reclaimer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReclaimStats {
    /// Nodes pushed onto the buffer
    pub deferred: u64,

    /// Nodes freed by drains
    pub reclaimed: u64,

    /// Completed drains
    pub passes: u64,
}

struct Reclaimer {
    pending: Vec<Box<Node>>,
    config: ReclaimConfig,
    draining: bool,
    stats: ReclaimStats,
}

/// What to do with a node after offering it to the reclaimer
enum Admission {
    /// Buffered; nothing else to do
    Deferred,

    /// Buffered, and the buffer is over threshold: drain now
    Full,

    /// Reclaiming is disabled: free it immediately
    Rejected(Box<Node>),
}

impl Reclaimer {
    fn new() -> Self {
        Reclaimer {
            pending: Vec::new(),
            config: ReclaimConfig::default(),
            draining: false,
            stats: ReclaimStats::default(),
        }
    }

    fn admit(&mut self, node: Box<Node>) -> Admission {
        if !self.config.enabled && !self.draining {
            return Admission::Rejected(node);
        }
        self.pending.push(node);
        self.stats.deferred += 1;

        // Children released mid-drain are picked up by the running drain.
        if self.draining || self.pending.len() <= self.config.threshold {
            return Admission::Deferred;
        }
        self.draining = true;
        Admission::Full
    }

    /// Start a drain; false if one is already running
    fn begin_drain(&mut self) -> bool {
        if self.draining {
            return false;
        }
        self.draining = true;
        true
    }

    fn take_batch(&mut self) -> Vec<Box<Node>> {
        std::mem::take(&mut self.pending)
    }

    fn finish_drain(&mut self, freed: u64) {
        self.draining = false;
        self.stats.reclaimed += freed;
        self.stats.passes += 1;
    }
}

impl Drop for Reclaimer {
    fn drop(&mut self) {
        // The thread-local is being destroyed and cannot buffer children, so
        // each tree is taken apart here.
        let freed: u64 = self.pending.drain(..).map(dismantle).sum();
        if freed > 0 {
            log::trace!("reclaimed {} nodes at thread exit", freed);
        }
    }
}

/// Free `root` and everything below it without recursing.
///
/// Children are detached from their handles before their parent is freed,
/// so no handle drop below `root` reaches [`release`]. Returns the number of
/// nodes freed.
fn dismantle(root: Box<Node>) -> u64 {
    let mut freed = 0;
    let mut stack = vec![root];
    while let Some(mut node) = stack.pop() {
        match node.as_mut() {
            Node::Object(map) => {
                stack.extend(map.drain(..).filter_map(|(_, mut child)| child.take_node()));
            }
            Node::Array(items) => {
                stack.extend(items.drain(..).filter_map(|mut child| child.take_node()));
            }
            _ => {}
        }
        freed += 1;
    }
    freed
}

/// Hand an owned node to the current thread's reclaimer.
pub(crate) fn release(node: Box<Node>) {
    // Kept outside the closure: `try_with` drops the closure unrun once the
    // thread-local is destroyed, and the node must not go with it.
    let mut node = Some(node);
    let admission = RECLAIMER.try_with(|cell| match node.take() {
        Some(node) => cell.borrow_mut().admit(node),
        None => Admission::Deferred,
    });
    match admission {
        Ok(Admission::Deferred) => {}
        Ok(Admission::Full) => drain(),
        Ok(Admission::Rejected(node)) => {
            dismantle(node);
        }
        Err(_) => {
            if let Some(node) = node.take() {
                dismantle(node);
            }
        }
    }
}

/// Free buffered nodes until none are left. The caller has set `draining`.
fn drain() {
    let mut freed = 0u64;
    loop {
        // The borrow must end before the batch is dropped: freeing a
        // container re-enters `release` for each child.
        let batch = match RECLAIMER.try_with(|cell| cell.borrow_mut().take_batch()) {
            Ok(batch) => batch,
            Err(_) => return,
        };
        if batch.is_empty() {
            break;
        }
        freed += batch.len() as u64;
        drop(batch);
    }

    let _ = RECLAIMER.try_with(|cell| cell.borrow_mut().finish_drain(freed));
    log::trace!("reclaimed {} nodes", freed);
}

/// Free every pending node on this thread now.
///
/// Does nothing if called while a drain is already running on this thread.
pub fn flush() {
    let started = RECLAIMER
        .try_with(|cell| cell.borrow_mut().begin_drain())
        .unwrap_or(false);
    if started {
        drain();
    }
}

/// Number of nodes waiting to be freed on this thread
pub fn pending() -> usize {
    RECLAIMER
        .try_with(|cell| cell.borrow().pending.len())
        .unwrap_or(0)
}

/// Counters for this thread's reclaimer
pub fn stats() -> ReclaimStats {
    RECLAIMER
        .try_with(|cell| cell.borrow().stats)
        .unwrap_or_default()
}

/// The current thread's reclaimer configuration
pub fn config() -> ReclaimConfig {
    RECLAIMER
        .try_with(|cell| cell.borrow().config)
        .unwrap_or_default()
}

/// Replace this thread's reclaimer configuration.
///
/// Nodes already pending stay buffered until the next drain. Disabling the
/// reclaimer does not flush them; call [`flush`] for that.
pub fn configure(config: ReclaimConfig) {
    log::debug!(
        "reclaimer configured: threshold={}, enabled={}",
        config.threshold,
        config.enabled
    );
    let _ = RECLAIMER.try_with(|cell| cell.borrow_mut().config = config);
}
