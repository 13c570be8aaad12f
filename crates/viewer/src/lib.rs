mod config;
mod envelope;
mod surface;
pub mod text;

use std::sync::Arc;

use anyhow::{Context, Result};
use resultview_core::{classify, topic, Payload, RenderIntent, RenderIntentKind};
use resultview_observability::ClassifierMetrics;
use serde_json::Value;
use tracing::{info, instrument, warn};

pub use config::{ConfigError, ViewerConfig};
pub use envelope::{open_envelope, EnvelopeError};
pub use surface::{Artifact, Displayed, MemorySurface, RenderSurface};

/// Result of handling one inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Rendered(RenderIntentKind),
    NothingToDisplay,
    NoData,
}

/// Routes inbound messages through the classifier onto one output surface.
#[derive(Clone)]
pub struct Viewer<S>
where
    S: RenderSurface,
{
    surface: Arc<S>,
    config: ViewerConfig,
    metrics: Arc<ClassifierMetrics>,
}

impl<S> Viewer<S>
where
    S: RenderSurface,
{
    pub fn new(surface: Arc<S>, config: ViewerConfig, metrics: Arc<ClassifierMetrics>) -> Self {
        Self {
            surface,
            config,
            metrics,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[instrument(skip(self, message), fields(surface = self.surface.name()))]
    pub fn handle_message(&self, message: &Value) -> Result<Outcome> {
        self.metrics.inc_message();

        match open_envelope(message, &self.config) {
            Ok(payload) => self.render_payload(payload),
            Err(err) => {
                self.metrics.inc_malformed();
                warn!(error = %err, "malformed envelope");
                self.notice(self.config.no_data_message.clone())?;
                Ok(Outcome::NoData)
            }
        }
    }

    /// Classifies a payload that already left its envelope.
    pub fn handle_payload(&self, payload: &Payload) -> Result<Outcome> {
        self.metrics.inc_message();
        self.render_payload(payload)
    }

    fn render_payload(&self, payload: &Payload) -> Result<Outcome> {
        let intent = classify(payload);
        let kind = intent.kind();
        self.metrics.observe_intent(kind);

        let title = topic(payload).map(ToString::to_string);
        info!(
            kind = kind.as_str(),
            topic = title.as_deref().unwrap_or(""),
            "payload handled"
        );

        match self.artifact_for(title, intent) {
            Some(artifact) => {
                self.surface
                    .replace(artifact)
                    .with_context(|| format!("failed rendering to {}", self.surface.name()))?;
                Ok(Outcome::Rendered(kind))
            }
            None => {
                self.notice(self.config.unclassified_message.clone())?;
                Ok(Outcome::NothingToDisplay)
            }
        }
    }

    fn artifact_for(&self, title: Option<String>, intent: RenderIntent) -> Option<Artifact> {
        let precision = self.config.precision;
        let artifact = match intent {
            RenderIntent::Unclassified => return None,
            RenderIntent::FreeText(blocks) => Artifact::Text {
                title,
                body: text::render_text_blocks(&blocks),
            },
            RenderIntent::Table(table) => Artifact::Text {
                title,
                body: text::render_table(&table, precision),
            },
            RenderIntent::ScalarMap(map) if !map.is_fully_numeric() => Artifact::Text {
                title,
                body: text::render_scalar_map(&map, precision),
            },
            other => Artifact::Chart {
                title,
                intent: other,
            },
        };
        Some(artifact)
    }

    fn notice(&self, message: String) -> Result<()> {
        self.surface
            .replace(Artifact::Notice { message })
            .with_context(|| format!("failed writing notice to {}", self.surface.name()))
    }
}
