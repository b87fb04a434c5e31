//! Output sink abstraction.
//!
//! A sink accepts one formatted line at a time and flushes on every
//! write. Buffering, rotation, and fan-out to multiple destinations
//! are deliberately left to the sink implementation or to whatever
//! sits behind it.

use std::io::{self, IsTerminal, Write};

/// Destination for formatted log lines.
pub trait Sink: Send {
    /// Write a single formatted line, followed by a newline, and
    /// flush immediately.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Whether this sink is connected to an interactive terminal.
    /// Used to decide the initial colorization policy.
    fn is_terminal(&self) -> bool {
        false
    }
}

enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Sink bound to the process's stdout or stderr.
pub struct ConsoleSink {
    stream: ConsoleStream,
    locale: Option<String>,
}

impl ConsoleSink {
    /// Sink writing to stdout.
    pub fn stdout() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
            locale: None,
        }
    }

    /// Sink writing to stderr.
    pub fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
            locale: None,
        }
    }

    /// Attach a locale tag for text rendering. The tag is carried on
    /// the sink; platforms without locale-aware rendering treat it as
    /// a no-op.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// The locale tag attached to this sink, if any.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        match self.stream {
            ConsoleStream::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{line}")?;
                out.flush()
            }
            ConsoleStream::Stderr => {
                let mut out = io::stderr().lock();
                writeln!(out, "{line}")?;
                out.flush()
            }
        }
    }

    fn is_terminal(&self) -> bool {
        match self.stream {
            ConsoleStream::Stdout => io::stdout().is_terminal(),
            ConsoleStream::Stderr => io::stderr().is_terminal(),
        }
    }
}

/// Sink over an arbitrary writer. Never treated as a terminal, so
/// colorization stays off unless a caller opts in explicitly.
pub struct WriterSink<W: Write + Send> {
    inner: W,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{line}")?;
        self.inner.flush()
    }
}
