/*!
Tracers attached to a solver.

A solver holds each attached tracer as a [SharedTracer], so the owner of a tracer keeps access to the tracer while it is attached, e.g. to construct an interpolant after a solve.
As solves are single threaded the tracer is shared through [Rc] and [RefCell].

Detaching is always safe:
- Detaching a tracer which is not attached does nothing.
- After a tracer is detached the solver may continue with other tracers, and the detached tracer receives no further events.

```rust
# use std::{cell::RefCell, rc::Rc};
# use otter_craig::tracer::{Attachments, ProofRecorder, Tracer};
let recorder = Rc::new(RefCell::new(ProofRecorder::default()));

let mut attachments = Attachments::default();
let key = attachments.attach(recorder.clone());

assert!(attachments.dispatch(|tracer| tracer.begin_proof(1)).is_ok());
assert!(attachments.detach(key));
assert!(!attachments.detach(key));
assert!(attachments.dispatch(|tracer| tracer.solve_query()).is_ok());

assert_eq!(recorder.borrow().steps().len(), 1);
```
*/

use std::{cell::RefCell, rc::Rc};

use crate::{
    misc::log::targets,
    types::err::{self, ErrorKind},
};

use super::Tracer;

/// A tracer shared between a solver and its owner.
pub type SharedTracer = Rc<RefCell<dyn Tracer>>;

/// A key to an attached tracer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TracerKey(u64);

/// The tracers attached to a solver.
#[derive(Default)]
pub struct Attachments {
    /// Attached tracers, in order of attachment.
    tracers: Vec<(TracerKey, SharedTracer)>,

    /// The key given to the next tracer attached.
    next_key: u64,
}

impl Attachments {
    /// Attaches `tracer`, and returns a key with which the tracer may be detached.
    pub fn attach(&mut self, tracer: SharedTracer) -> TracerKey {
        let key = TracerKey(self.next_key);
        self.next_key += 1;
        self.tracers.push((key, tracer));
        log::debug!(target: targets::ATTACHMENT, "Attached {key:?}");
        key
    }

    /// Detaches the tracer with `key`, and returns whether some tracer was detached.
    pub fn detach(&mut self, key: TracerKey) -> bool {
        match self.tracers.iter().position(|(k, _)| *k == key) {
            Some(index) => {
                self.tracers.remove(index);
                log::debug!(target: targets::ATTACHMENT, "Detached {key:?}");
                true
            }
            None => false,
        }
    }

    /// Whether a tracer with `key` is attached.
    pub fn is_attached(&self, key: TracerKey) -> bool {
        self.tracers.iter().any(|(k, _)| *k == key)
    }

    /// A count of attached tracers.
    pub fn len(&self) -> usize {
        self.tracers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracers.is_empty()
    }

    /// Notes some event to each attached tracer, in order of attachment.
    ///
    /// Every tracer receives the event, and the first error returned by any tracer is returned.
    /// A tracer borrowed elsewhere misses the event, and the error is [TracerInUse](err::ForwardError::TracerInUse).
    pub fn dispatch(
        &self,
        mut event: impl FnMut(&mut dyn Tracer) -> Result<(), ErrorKind>,
    ) -> Result<(), ErrorKind> {
        let mut outcome = Ok(());
        for (key, tracer) in &self.tracers {
            let result = match tracer.try_borrow_mut() {
                Ok(mut tracer) => event(&mut *tracer),
                Err(_) => Err(err::ForwardError::TracerInUse.into()),
            };
            if let Err(e) = result {
                log::warn!(target: targets::ATTACHMENT, "Tracer {key:?} returned {e}");
                if outcome.is_ok() {
                    outcome = Err(e);
                }
            }
        }
        outcome
    }
}
