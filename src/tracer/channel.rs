/*!
A tracer which sends each event through a channel.

Each event is sent as an owned [ProofStep], and so a receiver (on any thread) is free of the lifetime of the buffers given by the solver.

```rust
# use otter_craig::tracer::{ChannelTracer, ProofStep, Tracer};
let (tx, rx) = crossbeam::channel::unbounded();
let mut tracer = ChannelTracer::new(tx);

let mut buffer = vec![1, 2];
assert!(tracer.add_original_clause(1, false, &buffer, false).is_ok());
buffer.clear();

match rx.recv() {
    Ok(ProofStep::Original { clause, .. }) => assert_eq!(clause, vec![1, 2]),
    _ => panic!(),
}
```
*/

use crossbeam::channel::Sender;

use crate::{
    db::keys::ClauseId,
    misc::log::targets::{self},
    structures::{literal::CLiteral, proof::Conclusion},
    types::err::{self, ErrorKind},
};

use super::{step::tracer_by_steps, ProofStep};

/// A tracer which sends each event through a channel.
pub struct ChannelTracer {
    tx: Sender<ProofStep>,
}

impl ChannelTracer {
    pub fn new(tx: Sender<ProofStep>) -> Self {
        ChannelTracer { tx }
    }

    fn accept(&mut self, step: ProofStep) -> Result<(), ErrorKind> {
        match self.tx.send(step) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!(target: targets::FORWARD, "Receiver dropped before {}", e.into_inner());
                Err(err::ForwardError::Disconnected.into())
            }
        }
    }
}

tracer_by_steps!(ChannelTracer);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracer::Tracer;

    #[test]
    fn disconnected() {
        let (tx, rx) = crossbeam::channel::unbounded();
        let mut tracer = ChannelTracer::new(tx);

        assert!(tracer.begin_proof(1).is_ok());
        drop(rx);

        assert_eq!(
            tracer.add_original_clause(1, false, &[1], false),
            Err(ErrorKind::Forward(err::ForwardError::Disconnected))
        );
    }
}
