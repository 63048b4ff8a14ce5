//! Items served at a station of a UCSB dining commons.

use coursedesk_core::entity::Entity;
use coursedesk_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::repositories::{PgEntity, PgQueryAs};

/// A row from the `ucsb_dining_commons_menu_items` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbDiningCommonsMenuItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

/// Parameters accepted by `POST /api/ucsbdiningcommonsmenuitem/post`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemParams {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Entity for UcsbDiningCommonsMenuItem {
    const NAME: &'static str = "UCSBDiningCommonsMenuItem";
    type Params = MenuItemParams;

    fn from_params(params: MenuItemParams) -> Self {
        Self {
            id: None,
            dining_commons_code: params.dining_commons_code,
            name: params.name,
            station: params.station,
        }
    }

    fn id(&self) -> Option<DbId> {
        self.id
    }

    fn with_id(self, id: DbId) -> Self {
        Self { id: Some(id), ..self }
    }
}

impl PgEntity for UcsbDiningCommonsMenuItem {
    const TABLE: &'static str = "ucsb_dining_commons_menu_items";
    const COLUMNS: &'static [&'static str] = &["dining_commons_code", "name", "station"];

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.dining_commons_code)
            .bind(&self.name)
            .bind(&self.station)
    }
}
