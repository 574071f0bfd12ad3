use serde::{Deserialize, Serialize};

use crate::error::{ModelsError, require_non_blank};
use crate::model::Model;

/// Conventional object tag for a model listing.
pub const LIST_OBJECT: &str = "list";

/// Response from the list models API endpoint.
///
/// Owns its models; immutable after construction. Every query returns a
/// freshly built value, so the backing list can never be mutated through
/// the results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawModelListResponse")]
pub struct ModelListResponse {
    /// The object type (typically "list")
    object: String,
    /// List of available models, in API response order
    data: Vec<Model>,
}

/// Wire shadow of [`ModelListResponse`]; a payload without a `data` array is
/// rejected by serde before validation runs.
#[derive(Debug, Deserialize)]
struct RawModelListResponse {
    object: String,
    data: Vec<Model>,
}

impl TryFrom<RawModelListResponse> for ModelListResponse {
    type Error = ModelsError;

    fn try_from(raw: RawModelListResponse) -> Result<Self, Self::Error> {
        Self::new(raw.object, raw.data)
    }
}

impl ModelListResponse {
    /// Validating constructor.
    ///
    /// Fails with [`ModelsError::InvalidArgument`] when the object tag is
    /// blank. An empty model list is valid.
    pub fn new(object: impl Into<String>, data: Vec<Model>) -> Result<Self, ModelsError> {
        let object = object.into();
        require_non_blank("object", &object)?;
        Ok(Self { object, data })
    }

    /// The object type tag
    pub fn object(&self) -> &str {
        &self.object
    }

    /// All models in the listing, in API response order
    pub fn models(&self) -> &[Model] {
        &self.data
    }

    /// Number of models in the listing
    pub fn model_count(&self) -> usize {
        self.data.len()
    }

    /// Check if the listing contains no models
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Models that are currently active, in listing order
    pub fn active_models(&self) -> Vec<&Model> {
        self.data.iter().filter(|m| m.is_active()).collect()
    }

    /// Active chat models, in listing order
    pub fn chat_models(&self) -> Vec<&Model> {
        self.data
            .iter()
            .filter(|m| m.is_active() && m.is_chat_model())
            .collect()
    }

    /// Active speech-to-text models, in listing order
    pub fn whisper_models(&self) -> Vec<&Model> {
        self.data
            .iter()
            .filter(|m| m.is_active() && m.is_whisper_model())
            .collect()
    }

    /// Active text-to-speech models, in listing order
    pub fn tts_models(&self) -> Vec<&Model> {
        self.data
            .iter()
            .filter(|m| m.is_active() && m.is_tts_model())
            .collect()
    }

    /// Every model id, in listing order, duplicates included
    pub fn model_ids(&self) -> Vec<&str> {
        self.data.iter().map(Model::id).collect()
    }

    /// Check whether some model has exactly this id (case-sensitive)
    pub fn has_model(&self, model_id: &str) -> bool {
        self.data.iter().any(|m| m.id() == model_id)
    }

    /// The first model with exactly this id.
    ///
    /// Fails with [`ModelsError::NotFound`] carrying the requested id when
    /// the listing has no match.
    pub fn find_model(&self, model_id: &str) -> Result<&Model, ModelsError> {
        self.data
            .iter()
            .find(|m| m.id() == model_id)
            .ok_or_else(|| ModelsError::NotFound(model_id.to_string()))
    }
}

impl From<Vec<Model>> for ModelListResponse {
    /// Wrap a ready-made model list under the conventional `"list"` tag.
    fn from(data: Vec<Model>) -> Self {
        Self {
            object: LIST_OBJECT.to_string(),
            data,
        }
    }
}
