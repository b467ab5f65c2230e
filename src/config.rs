//! Application configuration resolved at build time.
//!
//! A WASM bundle has no process environment, so values are baked in through
//! `option_env!` when the bundle is compiled and then parsed by the same
//! pure [`AppConfig::from_lookup`] used in tests. Every value has a default,
//! so an unconfigured build talks to the stock endpoint and product photo.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const ROWS_ENDPOINT_VAR: &str = "STOREFRONT_ROWS_ENDPOINT";
pub const BACKGROUND_URL_VAR: &str = "STOREFRONT_BACKGROUND_URL";
pub const EXPORT_FILE_VAR: &str = "STOREFRONT_EXPORT_FILE";
pub const ROWS_PER_PAGE_VAR: &str = "STOREFRONT_ROWS_PER_PAGE";

pub const DEFAULT_ROWS_ENDPOINT: &str = "https://api.razzakfashion.com";
pub const DEFAULT_BACKGROUND_URL: &str =
    "https://acquires.in/cdn/shop/files/smooth-white-cotton-t-shirt-with-beautiful-3d-design-879335.jpg?v=1723878953";
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Page sizes offered by the table's "Rows per page" select.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 20, 50];

/// Error returned by [`AppConfig::from_lookup`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid absolute URL: {reason}")]
    InvalidUrl { var: &'static str, reason: String },
    #[error("{var} must be a positive integer, got {value:?}")]
    InvalidRowsPerPage { var: &'static str, value: String },
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Remote endpoint serving `{ "data": [...] }` for the table.
    pub rows_endpoint: String,
    /// Product photo the logo is composited onto.
    pub background_image_url: String,
    /// Filename offered for the exported PNG.
    pub export_file_name: String,
    /// Initial "Rows per page" value.
    pub default_rows_per_page: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rows_endpoint: DEFAULT_ROWS_ENDPOINT.to_owned(),
            background_image_url: DEFAULT_BACKGROUND_URL.to_owned(),
            export_file_name: compositor::consts::DEFAULT_EXPORT_FILE_NAME.to_owned(),
            default_rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl AppConfig {
    /// Build config from the variables captured when the bundle was compiled.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a provided value fails validation.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                ROWS_ENDPOINT_VAR => option_env!("STOREFRONT_ROWS_ENDPOINT"),
                BACKGROUND_URL_VAR => option_env!("STOREFRONT_BACKGROUND_URL"),
                EXPORT_FILE_VAR => option_env!("STOREFRONT_EXPORT_FILE"),
                ROWS_PER_PAGE_VAR => option_env!("STOREFRONT_ROWS_PER_PAGE"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// Optional:
    /// - `STOREFRONT_ROWS_ENDPOINT`: absolute URL, default [`DEFAULT_ROWS_ENDPOINT`]
    /// - `STOREFRONT_BACKGROUND_URL`: absolute URL, default [`DEFAULT_BACKGROUND_URL`]
    /// - `STOREFRONT_EXPORT_FILE`: non-empty filename, default `custom-tshirt.png`
    /// - `STOREFRONT_ROWS_PER_PAGE`: positive integer, default 10
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a provided value fails validation.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let rows_endpoint = match lookup(ROWS_ENDPOINT_VAR) {
            Some(raw) => parse_url(ROWS_ENDPOINT_VAR, &raw)?,
            None => defaults.rows_endpoint,
        };
        let background_image_url = match lookup(BACKGROUND_URL_VAR) {
            Some(raw) => parse_url(BACKGROUND_URL_VAR, &raw)?,
            None => defaults.background_image_url,
        };
        let export_file_name = match lookup(EXPORT_FILE_VAR) {
            Some(raw) => parse_non_empty(EXPORT_FILE_VAR, &raw)?,
            None => defaults.export_file_name,
        };
        let default_rows_per_page = match lookup(ROWS_PER_PAGE_VAR) {
            Some(raw) => parse_rows_per_page(ROWS_PER_PAGE_VAR, &raw)?,
            None => defaults.default_rows_per_page,
        };
        Ok(Self { rows_endpoint, background_image_url, export_file_name, default_rows_per_page })
    }

    /// Page-size choices, including the configured default if it is not one
    /// of the stock options.
    #[must_use]
    pub fn page_size_options(&self) -> Vec<usize> {
        let mut options = PAGE_SIZE_OPTIONS.to_vec();
        if !options.contains(&self.default_rows_per_page) {
            options.push(self.default_rows_per_page);
            options.sort_unstable();
        }
        options
    }
}

fn parse_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl { var, reason: e.to_string() })?;
    Ok(trimmed.to_owned())
}

fn parse_non_empty(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    Ok(trimmed.to_owned())
}

fn parse_rows_per_page(var: &'static str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidRowsPerPage { var, value: raw.to_owned() }),
    }
}
