//! Output seam between the dashboard core and whatever displays it.
//!
//! The real display surface is an external collaborator; the core only
//! hands finished artifacts (chart specs, tables, interest frames) to a
//! [`RenderSink`] as JSON.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use snafu::{Backtrace, ResultExt, Snafu};
use tokio::{fs, io::AsyncWriteExt};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SinkError {
    /// The artifact could not be serialized for the destination.
    #[snafu(display("Failed to serialize artifact: {source}"))]
    Serialize {
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// A generic I/O error.
    #[snafu(display("I/O error: {source}"))]
    Io {
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

/// Destination for finished render artifacts.
#[async_trait]
pub trait RenderSink {
    /// The type of output returned after a successful write.
    ///
    /// A file sink returns the path it created; the stdout sink has nothing
    /// to return.
    type Output;

    /// Writes one labeled artifact.
    async fn write(
        &self,
        label: &str,
        artifact: &serde_json::Value,
    ) -> Result<Self::Output, SinkError>;
}

/// Writes artifacts to standard output as pretty-printed JSON.
pub struct StdoutSink;

#[async_trait]
impl RenderSink for StdoutSink {
    type Output = ();

    async fn write(
        &self,
        label: &str,
        artifact: &serde_json::Value,
    ) -> Result<(), SinkError> {
        let rendered = serde_json::to_string_pretty(artifact).context(SerializeSnafu)?;
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("=== {label} ===\n{rendered}\n").as_bytes())
            .await
            .context(IoSnafu)?;
        Ok(())
    }
}

/// Writes each artifact to its own timestamped JSON file.
pub struct JsonFileSink {
    base_dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// A sink under the system temp directory.
    pub fn temp() -> Self {
        let mut base = std::env::temp_dir();
        base.push("market_dashboard");
        Self::new(base)
    }
}

#[async_trait]
impl RenderSink for JsonFileSink {
    type Output = PathBuf;

    async fn write(
        &self,
        label: &str,
        artifact: &serde_json::Value,
    ) -> Result<PathBuf, SinkError> {
        fs::create_dir_all(&self.base_dir).await.context(IoSnafu)?;

        let timestamp = Utc::now().format("%Y%m%d%H%M%S");
        let mut path = self.base_dir.clone();
        path.push(format!("{label}_{timestamp}.json"));

        let rendered = serde_json::to_vec_pretty(artifact).context(SerializeSnafu)?;
        fs::write(&path, rendered).await.context(IoSnafu)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn file_sink_writes_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonFileSink::new(dir.path());

        let artifact = json!({"title": "Trend comparison", "traces": []});
        let path = sink.write("trend", &artifact).await.unwrap();

        assert!(path.file_name().unwrap().to_str().unwrap().starts_with("trend_"));
        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["title"], "Trend comparison");
    }

    #[tokio::test]
    async fn stdout_sink_accepts_any_artifact() {
        let sink = StdoutSink;
        sink.write("noop", &json!([1, 2, 3])).await.unwrap();
    }
}
