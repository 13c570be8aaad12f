use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use resultview_core::RenderIntent;
use serde::Serialize;

/// What ends up on the output surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "artifact", rename_all = "snake_case")]
pub enum Artifact {
    Chart {
        title: Option<String>,
        intent: RenderIntent,
    },
    Text {
        title: Option<String>,
        body: String,
    },
    /// Neutral centered message for the no-data and nothing-matched states.
    Notice { message: String },
}

/// A single named output area. Each call replaces whatever was shown before.
pub trait RenderSurface: Send + Sync {
    fn name(&self) -> &str;
    fn replace(&self, artifact: Artifact) -> Result<()>;
}

#[derive(Debug, Clone, Serialize)]
pub struct Displayed {
    pub artifact: Artifact,
    pub rendered_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct MemorySurface {
    name: String,
    current: Arc<RwLock<Option<Displayed>>>,
    replacements: Arc<AtomicU64>,
}

impl MemorySurface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current: Arc::new(RwLock::new(None)),
            replacements: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn current(&self) -> Option<Displayed> {
        self.current.read().clone()
    }

    pub fn artifact(&self) -> Option<Artifact> {
        self.current.read().as_ref().map(|shown| shown.artifact.clone())
    }

    pub fn replacements(&self) -> u64 {
        self.replacements.load(Ordering::Acquire)
    }
}

impl RenderSurface for MemorySurface {
    fn name(&self) -> &str {
        &self.name
    }

    fn replace(&self, artifact: Artifact) -> Result<()> {
        let mut current = self.current.write();
        *current = Some(Displayed {
            artifact,
            rendered_at: Utc::now(),
        });
        self.replacements.fetch_add(1, Ordering::Release);
        Ok(())
    }
}
