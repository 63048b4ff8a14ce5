//! The contract every exposed entity family implements.
//!
//! An entity family is one kind of persisted record. The HTTP layer builds
//! its list / create / get-by-id endpoints from this trait alone, so adding a
//! family means writing a model struct and its creation parameters, nothing
//! else.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::DbId;

/// A persisted record with a surrogate identifier.
///
/// The identifier is `None` until the first successful save and never
/// changes afterwards.
pub trait Entity: Clone + PartialEq + Serialize + Send + Sync + 'static {
    /// Display name used in error messages, e.g. `"HelpRequest"`.
    const NAME: &'static str;

    /// Creation parameters: exactly one required field per entity attribute.
    type Params: DeserializeOwned + Send + 'static;

    /// Build an unsaved entity from creation parameters.
    fn from_params(params: Self::Params) -> Self;

    fn id(&self) -> Option<DbId>;

    /// Return the entity with its storage-assigned identifier.
    fn with_id(self, id: DbId) -> Self;

    /// Whether the entity has been saved at least once.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Note {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<DbId>,
        body: String,
    }

    #[derive(Deserialize)]
    struct NoteParams {
        body: String,
    }

    impl Entity for Note {
        const NAME: &'static str = "Note";
        type Params = NoteParams;

        fn from_params(params: NoteParams) -> Self {
            Self {
                id: None,
                body: params.body,
            }
        }

        fn id(&self) -> Option<DbId> {
            self.id
        }

        fn with_id(self, id: DbId) -> Self {
            Self { id: Some(id), ..self }
        }
    }

    #[test]
    fn new_entity_is_not_persisted() {
        let note = Note::from_params(NoteParams { body: "hi".into() });
        assert!(!note.is_persisted());
        assert_eq!(serde_json::to_string(&note).unwrap(), r#"{"body":"hi"}"#);
    }

    #[test]
    fn with_id_marks_entity_persisted() {
        let note = Note::from_params(NoteParams { body: "hi".into() }).with_id(3);
        assert!(note.is_persisted());
        assert_eq!(note.id(), Some(3));
        assert_eq!(
            serde_json::to_string(&note).unwrap(),
            r#"{"id":3,"body":"hi"}"#
        );
    }
}
