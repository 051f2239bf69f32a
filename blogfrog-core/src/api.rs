//! Collaborators the store talks to
//!
//! The store only sees these traits; [`crate::http::HttpBlogApi`] is the
//! production implementation and [`crate::testing`] has scripted doubles.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::model::{BlogDetailEntry, BlogPreviewEntry, DraftPost};
use crate::route::Route;

/// Read access to published blogs
#[async_trait]
pub trait BlogApi: Send + Sync {
    async fn get_blogs(&self) -> Result<Vec<BlogPreviewEntry>, ApiError>;

    /// Not-found is an ordinary [`ApiError`], not a separate outcome.
    async fn get_blog_by_id(&self, id: i64) -> Result<BlogDetailEntry, ApiError>;
}

/// Publishing of new posts
#[async_trait]
pub trait AddBlogApi: Send + Sync {
    /// Send an already validated draft. The response body is opaque to the client.
    async fn create(&self, draft: &DraftPost) -> Result<Value, ApiError>;

    /// Validate the draft, then send it.
    ///
    /// A draft that fails validation never reaches [`AddBlogApi::create`].
    async fn submit(&self, draft: &DraftPost) -> Result<Value, ApiError> {
        draft.validate()?;
        self.create(draft).await
    }
}

/// Page switching, invoked fire-and-forget by the store
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);

    fn go_to_overview(&self) {
        self.navigate(Route::Overview);
    }
}

/// Navigator for stores without a view, e.g. scripts and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(%route, "Navigation requested without a view");
    }
}
