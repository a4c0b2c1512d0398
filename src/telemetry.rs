use std::io::{self, Write};

use anyhow::Context;
use tracing::{Subscriber, subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt::MakeWriter, layer::SubscriberExt};

/// Bunyan-formatted JSON subscriber. `RUST_LOG` takes precedence over `env_filter`.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
    // blank line between records
    let formatting_layer = BunyanFormattingLayer::new(name, MakeNewlineWriter(sink));

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

// Must only succeed once per process: both the `log` bridge and the global default are set here.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), anyhow::Error> {
    LogTracer::init().context("Failed to set logger")?;
    subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;
    Ok(())
}

/// Appends a newline after every write to the wrapped writer.
pub struct NewlineWriter<W> {
    inner: W,
}

impl<W: Write> Write for NewlineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write_all(buf)?;
        self.inner.write_all(b"\n")?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// `MakeWriter` that hands out `NewlineWriter`s around `M`'s writers.
pub struct MakeNewlineWriter<M>(pub M);

impl<'a, M> MakeWriter<'a> for MakeNewlineWriter<M>
where
    M: MakeWriter<'a> + 'a,
{
    type Writer = NewlineWriter<<M as MakeWriter<'a>>::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        NewlineWriter {
            inner: self.0.make_writer(),
        }
    }
}
