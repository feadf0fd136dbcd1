//! Helpers shared by the integration tests.
#![allow(dead_code)]

use logmagix::fmt::strip_ansi;
use logmagix::{Line, Output};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory writer whose clones share one buffer, so a test keeps a handle
/// after giving the writer to a logger or loader.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Non-empty lines with escapes removed.
    pub fn lines(&self) -> Vec<String> {
        strip_ansi(&self.contents())
            .lines()
            .filter(|l| !l.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that keeps every line it receives.
#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<Line>>>);

impl Recorder {
    pub fn lines(&self) -> Vec<Line> {
        self.0.lock().unwrap().clone()
    }
}

impl Output for Recorder {
    fn write(&mut self, line: &Line) -> Result<(), logmagix::Error> {
        self.0.lock().unwrap().push(line.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), logmagix::Error> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recorder"
    }
}

/// Sink that fails every call.
pub struct Broken;

impl Output for Broken {
    fn write(&mut self, _line: &Line) -> Result<(), logmagix::Error> {
        Err(io::Error::other("disk on fire").into())
    }

    fn flush(&mut self) -> Result<(), logmagix::Error> {
        Err(io::Error::other("disk on fire").into())
    }

    fn name(&self) -> &'static str {
        "broken"
    }
}
