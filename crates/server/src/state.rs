use calendar::{
    GridConfig, LayoutEngine,
    matcher::{GuidelineMatcher, MatchOptions},
};
use database::services::guideline::DatabaseGuidelines;
use sea_orm::DatabaseConnection;

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub grid: GridConfig,
    pub match_options: MatchOptions,
}

impl AppState {
    pub fn layout_engine(&self) -> LayoutEngine {
        LayoutEngine::new(self.grid)
    }

    pub fn matcher(&self) -> GuidelineMatcher<DatabaseGuidelines> {
        let lookup = DatabaseGuidelines::new(self.db.clone());
        GuidelineMatcher::with_options(lookup, self.match_options)
    }

    /// Default settings over a connection that fails every request
    #[cfg(test)]
    pub fn disconnected() -> Self {
        Self {
            db: DatabaseConnection::Disconnected,
            grid: GridConfig::default(),
            match_options: MatchOptions::default(),
        }
    }
}
