pub mod sink;

pub use sink::{JsonFileSink, RenderSink, SinkError, StdoutSink};
