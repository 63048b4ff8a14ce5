//! Entity models, one module per exposed entity family.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` params struct with one required field per attribute
//! - The [`Entity`](coursedesk_core::entity::Entity) and
//!   [`PgEntity`](crate::repositories::PgEntity) impls tying the two together

pub mod article;
pub mod dining_commons_menu_item;
pub mod help_request;
pub mod organization;

pub use article::Article;
pub use dining_commons_menu_item::UcsbDiningCommonsMenuItem;
pub use help_request::HelpRequest;
pub use organization::UcsbOrganization;
