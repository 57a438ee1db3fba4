pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const DEFAULT_FILE_NAME: &str = "us-census-income";

pub const API_BASE_ENV: &str = "CENSUS_API_BASE";
pub const FILE_NAME_ENV: &str = "CENSUS_FILE_NAME";

/// Where the census service lives and which dataset it should serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub api_base: String,
    pub file_name: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl ViewerConfig {
    /// Reads the process environment, then values baked in at build time.
    /// The web bundle has no process environment, so only the latter apply
    /// there.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| build_time_value(key)))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, fallback: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        Self {
            api_base: read(API_BASE_ENV, DEFAULT_API_BASE),
            file_name: read(FILE_NAME_ENV, DEFAULT_FILE_NAME),
        }
    }
}

fn build_time_value(key: &str) -> Option<String> {
    let value = match key {
        API_BASE_ENV => option_env!("CENSUS_API_BASE"),
        FILE_NAME_ENV => option_env!("CENSUS_FILE_NAME"),
        _ => None,
    };
    value.map(str::to_string)
}
