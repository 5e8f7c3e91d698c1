use crate::config::TimingConfig;
use crate::error::Result;
use crate::render::PageRenderer;
use crate::services::{ContentProvider, PortfolioContent, RoleBroadcaster};
use std::sync::Arc;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Content provider backing every endpoint
    pub content: Arc<dyn ContentProvider>,
    /// Shared rotating role ticker, exposed for health reporting
    pub roles: RoleBroadcaster,
    /// Page renderer with the compiled template
    pub renderer: Arc<PageRenderer>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("content", &"Arc<dyn ContentProvider>")
            .field("roles", &self.roles)
            .field("renderer", &self.renderer)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(content: PortfolioContent, renderer: PageRenderer) -> Self {
        let roles = content.role_broadcaster().clone();
        Self {
            content: Arc::new(content),
            roles,
            renderer: Arc::new(renderer),
        }
    }

    /// Build state from timing configuration with the shipped catalog
    pub fn from_timing(timing: TimingConfig) -> Result<Self> {
        Ok(Self::new(PortfolioContent::new(timing)?, PageRenderer::new()?))
    }

    /// Development state without artificial delays
    pub fn development() -> Result<Self> {
        Self::from_timing(TimingConfig::immediate())
    }
}
