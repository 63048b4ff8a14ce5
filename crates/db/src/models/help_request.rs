//! Help requests raised by student teams during lab sections.

use coursedesk_core::entity::Entity;
use coursedesk_core::types::{strict_timestamp, DbId, LocalTimestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::repositories::{PgEntity, PgQueryAs};

/// A row from the `help_requests` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    #[serde(deserialize_with = "strict_timestamp::deserialize")]
    pub request_time: LocalTimestamp,
    pub explanation: String,
    pub solved: bool,
}

/// Parameters accepted by `POST /api/helprequests/post`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequestParams {
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    pub explanation: String,
    pub solved: bool,
    #[serde(deserialize_with = "strict_timestamp::deserialize")]
    pub request_time: LocalTimestamp,
}

impl Entity for HelpRequest {
    const NAME: &'static str = "HelpRequest";
    type Params = HelpRequestParams;

    fn from_params(params: HelpRequestParams) -> Self {
        Self {
            id: None,
            requester_email: params.requester_email,
            team_id: params.team_id,
            table_or_breakout_room: params.table_or_breakout_room,
            request_time: params.request_time,
            explanation: params.explanation,
            solved: params.solved,
        }
    }

    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn with_id(self, id: DbId) -> Self {
        Self { id: Some(id), ..self }
    }
}

impl PgEntity for HelpRequest {
    const TABLE: &'static str = "help_requests";
    const COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "team_id",
        "table_or_breakout_room",
        "request_time",
        "explanation",
        "solved",
    ];

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.requester_email)
            .bind(&self.team_id)
            .bind(&self.table_or_breakout_room)
            .bind(self.request_time)
            .bind(&self.explanation)
            .bind(self.solved)
    }
}
