//! Articles (links with a short explanation) shared with the course.

use coursedesk_core::entity::Entity;
use coursedesk_core::types::{strict_timestamp, DbId, LocalTimestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::repositories::{PgEntity, PgQueryAs};

/// A row from the `articles` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    #[serde(deserialize_with = "strict_timestamp::deserialize")]
    pub date_added: LocalTimestamp,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleParams {
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    #[serde(deserialize_with = "strict_timestamp::deserialize")]
    pub date_added: LocalTimestamp,
}

impl Entity for Article {
    const NAME: &'static str = "Article";
    type Params = ArticleParams;

    fn from_params(params: ArticleParams) -> Self {
        Self {
            id: None,
            title: params.title,
            url: params.url,
            explanation: params.explanation,
            email: params.email,
            date_added: params.date_added,
        }
    }

    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn with_id(self, id: DbId) -> Self {
        Self { id: Some(id), ..self }
    }
}

impl PgEntity for Article {
    const TABLE: &'static str = "articles";
    const COLUMNS: &'static [&'static str] =
        &["title", "url", "explanation", "email", "date_added"];

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.title)
            .bind(&self.url)
            .bind(&self.explanation)
            .bind(&self.email)
            .bind(self.date_added)
    }
}
