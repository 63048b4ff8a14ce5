//! Registered UCSB student organizations.

use coursedesk_core::entity::Entity;
use coursedesk_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::repositories::{PgEntity, PgQueryAs};

/// A row from the `ucsb_organizations` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbOrganization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationParams {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Entity for UcsbOrganization {
    const NAME: &'static str = "UCSBOrganization";
    type Params = OrganizationParams;

    fn from_params(params: OrganizationParams) -> Self {
        Self {
            id: None,
            org_code: params.org_code,
            org_translation_short: params.org_translation_short,
            org_translation: params.org_translation,
            inactive: params.inactive,
        }
    }

    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn with_id(self, id: DbId) -> Self {
        Self { id: Some(id), ..self }
    }
}

impl PgEntity for UcsbOrganization {
    const TABLE: &'static str = "ucsb_organizations";
    const COLUMNS: &'static [&'static str] = &[
        "org_code",
        "org_translation_short",
        "org_translation",
        "inactive",
    ];

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.org_code)
            .bind(&self.org_translation_short)
            .bind(&self.org_translation)
            .bind(self.inactive)
    }
}
