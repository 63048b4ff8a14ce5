//! Request handlers.
//!
//! [`resource`] holds the list / create / get-by-id handlers shared by every
//! entity family. Handlers delegate to the family's repository and map
//! errors via [`AppError`](crate::error::AppError).

pub mod resource;
