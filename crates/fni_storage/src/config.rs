use fni_core::{Error, Result, DEFAULT_API_URL};
use url::Url;

/// Where article requests go: the Articles API or an in-process list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    Http,
    Memory,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend: BackendKind,
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Http,
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// `{base_url}/articles/`, keeping any path prefix of the base.
    pub fn articles_url(&self) -> Result<Url> {
        let mut base = Url::parse(&self.base_url)?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidUrl(self.base_url.clone()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join("articles/")?)
    }
}
