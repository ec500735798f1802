use fni_core::{ArticlesApi, AssetClass, NewArticle, Sentiment};
use tracing::{error, info, warn};

use crate::error::SubmitError;
use crate::store::ArticleStore;

/// Text fields of the draft form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Source,
    Content,
}

/// The article being composed. Starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftArticle {
    pub title: String,
    pub source: String,
    pub content: String,
    pub asset_class: Option<AssetClass>,
    pub sentiment: Option<Sentiment>,
}

impl DraftArticle {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Source => &self.source,
            DraftField::Content => &self.content,
        }
    }

    /// Builds the create request, or refuses when title or content is blank.
    pub fn to_request(&self) -> Result<NewArticle, SubmitError> {
        let title = self.title.trim();
        let content = self.content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(SubmitError::Validation);
        }
        Ok(NewArticle {
            title: title.to_string(),
            source: self.source.trim().to_string(),
            content: content.to_string(),
            asset_class: self.asset_class.map(|t| t.as_str()).unwrap_or_default().to_string(),
            sentiment: self.sentiment.map(|t| t.as_str()).unwrap_or_default().to_string(),
        })
    }
}

/// Owns the draft and drives its submission.
#[derive(Debug, Default)]
pub struct ArticleFormController {
    draft: DraftArticle,
    submitting: bool,
}

impl ArticleFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &DraftArticle {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.draft.title = value,
            DraftField::Source => self.draft.source = value,
            DraftField::Content => self.draft.content = value,
        }
    }

    pub fn set_asset_class(&mut self, asset_class: Option<AssetClass>) {
        self.draft.asset_class = asset_class;
    }

    pub fn set_sentiment(&mut self, sentiment: Option<Sentiment>) {
        self.draft.sentiment = sentiment;
    }

    /// Validates the draft and marks a submission as outstanding.
    ///
    /// On a validation error nothing changes and no request should be sent.
    pub fn begin_submit(&mut self) -> Result<NewArticle, SubmitError> {
        let request = self.draft.to_request().map_err(|e| {
            warn!("Submission blocked: title or content is blank");
            e
        })?;
        self.submitting = true;
        Ok(request)
    }

    /// Applies the outcome of the create call.
    ///
    /// A failed create ends the submission. A successful one clears the
    /// draft and leaves the submission open for the follow-up reload; close
    /// it with [`ArticleFormController::finish_submit`].
    pub fn finish_create(&mut self, result: fni_core::Result<()>) -> Result<(), SubmitError> {
        let outcome = self.accept(result);
        if outcome.is_err() {
            self.submitting = false;
        }
        outcome
    }

    /// Ends the submission once the reload after a create has landed.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    fn accept(&mut self, result: fni_core::Result<()>) -> Result<(), SubmitError> {
        match result {
            Ok(()) => {
                info!("Article submitted: {}", self.draft.title.trim());
                self.draft = DraftArticle::default();
                Ok(())
            }
            Err(e) => {
                error!("Submitting article failed: {}", e);
                Err(SubmitError::Failed(e))
            }
        }
    }

    /// Validates, creates, and on success clears the draft and reloads
    /// `store` before returning.
    ///
    /// A failed reload does not fail the submission; it shows up as the
    /// store's load error instead.
    pub async fn submit(&mut self, api: &dyn ArticlesApi, store: &mut ArticleStore) -> Result<(), SubmitError> {
        let request = self.begin_submit()?;
        let created = api.create_article(&request).await;
        self.finish_create(created)?;
        let _ = store.load(api).await;
        self.finish_submit();
        Ok(())
    }
}
