#[derive(Debug, Clone)]
pub struct ScoringSettings {
    /// How many ranked movies the popular list shows by default.
    pub default_limit: usize,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self { default_limit: 10 }
    }
}

#[derive(Debug, Clone)]
pub struct SimilaritySettings {
    /// How many neighbors a recommendation query returns by default.
    pub default_top_n: usize,
}

impl Default for SimilaritySettings {
    fn default() -> Self {
        Self { default_top_n: 5 }
    }
}

#[derive(Debug, Clone)]
pub struct DatasetSettings {
    /// Fallback dataset location when DATASET_PATH is unset.
    pub default_path: &'static str,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            default_path: "dataset/movies.csv",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub similarity: SimilaritySettings,
    pub dataset: DatasetSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scoring: ScoringSettings::default(),
            similarity: SimilaritySettings::default(),
            dataset: DatasetSettings::default(),
        }
    }

    /// Resolve the dataset path: DATASET_PATH wins over the built-in default.
    pub fn dataset_path(&self) -> String {
        std::env::var("DATASET_PATH").unwrap_or_else(|_| self.dataset.default_path.to_string())
    }
}
