pub mod error;
pub mod form;
pub mod selection;
pub mod session;
pub mod store;
pub mod view;

pub use error::{LoadError, SubmitError};
pub use form::{ArticleFormController, DraftArticle, DraftField};
pub use selection::Selection;
pub use session::Session;
pub use store::ArticleStore;
pub use view::{ArticleListView, ArticleRow, DetailView};

pub mod prelude {
    pub use crate::{ArticleFormController, ArticleStore, DraftField, Selection, Session, SubmitError};
    pub use fni_core::{Article, ArticlesApi, AssetClass, Result, Sentiment};
}
