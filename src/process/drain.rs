//! Subprocess output relay
//!
//! Continuously forwards a child process's stdout pipe to the console while
//! the caller blocks on `wait`. Two threads share one channel: a reader
//! thread turns the pipe into chunk events, and a relay thread writes each
//! chunk to the sink as it arrives. Cancellation is one more event on the
//! same channel, so "stream closed" and "cancel received" are equally valid
//! terminal events and the relay never waits on one while ignoring the
//! other.
//!
//! A reader blocked on a pipe that never closes is detached, not joined;
//! cancelling the relay is always enough to let the program exit.

use std::io::{self, Read, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

const READ_CHUNK_BYTES: usize = 1024;

enum RelayEvent {
    Chunk(Vec<u8>),
    Closed,
    Cancelled,
}

/// A running output relay for one subprocess stream.
pub struct StreamDrain {
    events: Sender<RelayEvent>,
    relay: Option<JoinHandle<()>>,
}

impl StreamDrain {
    /// Relay `stream` to standard output.
    pub fn stdout<R>(stream: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self::with_sink(stream, io::stdout())
    }

    /// Relay `stream` to an arbitrary sink.
    pub fn with_sink<R, W>(stream: R, sink: W) -> Self
    where
        R: Read + Send + 'static,
        W: Write + Send + 'static,
    {
        let (events, inbox) = mpsc::channel();

        let reader_events = events.clone();
        thread::spawn(move || read_chunks(stream, reader_events));

        let relay = thread::spawn(move || relay_loop(inbox, sink));

        Self {
            events,
            relay: Some(relay),
        }
    }

    /// Signal cancellation and wait for the relay to stop.
    ///
    /// Called after the subprocess has been waited on. Chunks the reader
    /// already produced are still forwarded before the relay exits.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.events.send(RelayEvent::Cancelled);
        if let Some(relay) = self.relay.take() {
            let _ = relay.join();
        }
    }
}

impl Drop for StreamDrain {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn read_chunks<R: Read>(mut stream: R, events: Sender<RelayEvent>) {
    let mut buf = [0u8; READ_CHUNK_BYTES];
    loop {
        match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                if events.send(RelayEvent::Chunk(buf[..n].to_vec())).is_err() {
                    // Relay is gone; nobody is listening.
                    return;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
    }
    let _ = events.send(RelayEvent::Closed);
}

fn relay_loop<W: Write>(inbox: Receiver<RelayEvent>, mut sink: W) {
    while let Ok(event) = inbox.recv() {
        match event {
            RelayEvent::Chunk(chunk) => forward(&mut sink, &chunk),
            RelayEvent::Closed => break,
            RelayEvent::Cancelled => {
                // Forward whatever the reader already queued, then stop.
                while let Ok(RelayEvent::Chunk(chunk)) = inbox.try_recv() {
                    forward(&mut sink, &chunk);
                }
                break;
            }
        }
    }
}

fn forward<W: Write>(sink: &mut W, chunk: &[u8]) {
    let _ = sink.write_all(chunk);
    let _ = sink.flush();
}
