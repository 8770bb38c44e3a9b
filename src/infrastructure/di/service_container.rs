//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::LoadService;
use crate::config::Settings;
use crate::infrastructure::traits::{DirectoryWalker, WalkDirWalker};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Bulk loading, configured from `settings`
    pub load_service: LoadService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(WalkDirWalker))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, walker: Arc<dyn DirectoryWalker>) -> Self {
        let load_service = LoadService::with_options(walker, settings.walk_options());
        let settings = Arc::new(settings);

        Self {
            settings,
            load_service,
        }
    }
}
