//! Bounded producer/consumer handoff.
//!
//! [`BlockLexer::spawn`] moves the lexer onto its own thread. Blocks travel
//! through a bounded FIFO channel: the producer blocks while the queue is
//! full and the consumer blocks while it is empty. When the machine
//! finishes (normally or after its error block), the producer drops its
//! sender, which closes the queue and ends the consumer's iteration.

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Receiver};
use tracing::debug;

use crate::{Block, BlockLexer};

/// Consumer end of a spawned [`BlockLexer`].
///
/// Iterating yields blocks in source order until the producer closes the
/// queue. Dropping the receiver early makes the producer stop at its next
/// send.
pub struct BlockReceiver {
    receiver: Receiver<Block>,
    producer: JoinHandle<()>,
}

impl BlockLexer {
    /// Run the lexer on a new thread.
    ///
    /// The queue holds `config.capacity` blocks. Fails only if the thread
    /// cannot be created.
    pub fn spawn(self) -> io::Result<BlockReceiver> {
        let (sender, receiver) = channel::bounded(self.config().capacity);
        let producer = thread::Builder::new()
            .name("block-lexer".to_string())
            .spawn(move || {
                let mut sent = 0usize;
                for block in self {
                    if sender.send(block).is_err() {
                        debug!(sent, "block consumer hung up");
                        return;
                    }
                    sent += 1;
                }
                debug!(sent, "block lexer finished");
            })?;

        Ok(BlockReceiver { receiver, producer })
    }
}

impl BlockReceiver {
    /// Wait for the next block. `None` once the queue is closed and drained.
    pub fn recv(&self) -> Option<Block> {
        self.receiver.recv().ok()
    }

    /// Blocks currently waiting in the queue.
    pub fn queued(&self) -> usize {
        self.receiver.len()
    }

    /// Drain the remaining blocks and wait for the producer thread.
    ///
    /// Returns `Err` with the panic payload if the producer panicked.
    pub fn join(self) -> thread::Result<Vec<Block>> {
        let blocks: Vec<Block> = self.receiver.iter().collect();
        self.producer.join()?;
        Ok(blocks)
    }
}

impl Iterator for BlockReceiver {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        self.recv()
    }
}
