use core::fmt;

use bon::bon;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

use crate::error::{ModelsError, require_non_blank};

/// Conventional object tag for a single model entry.
pub const MODEL_OBJECT: &str = "model";

/// Represents one model entry as reported by the provider.
///
/// Validated when constructed and immutable afterwards; a changed model is a
/// newly constructed `Model`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawModel")]
pub struct Model {
    /// The unique identifier for the model
    id: String,
    /// The object type (typically "model")
    object: String,
    /// Unix timestamp of when the model was created
    created: u64,
    /// The organization that owns the model
    owned_by: String,
    /// Whether the model is currently active and available
    active: bool,
    /// The context window size (maximum tokens) for this model
    context_window: u32,
    /// Opaque provider data about public app availability
    #[serde(skip_serializing_if = "Option::is_none")]
    public_apps: Option<Value>,
    /// Cap on tokens the model may generate in one response
    #[serde(skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<u32>,
}

/// Wire shadow of [`Model`]; deserialized first, then routed through the
/// validating constructor.
#[derive(Debug, Deserialize)]
struct RawModel {
    id: String,
    object: String,
    created: u64,
    owned_by: String,
    active: bool,
    context_window: u32,
    #[serde(default)]
    public_apps: Option<Value>,
    #[serde(default)]
    max_completion_tokens: Option<u32>,
}

impl TryFrom<RawModel> for Model {
    type Error = ModelsError;

    fn try_from(raw: RawModel) -> Result<Self, Self::Error> {
        Model::builder()
            .id(raw.id)
            .object(raw.object)
            .created(raw.created)
            .owned_by(raw.owned_by)
            .active(raw.active)
            .context_window(raw.context_window)
            .maybe_public_apps(raw.public_apps)
            .maybe_max_completion_tokens(raw.max_completion_tokens)
            .build()
    }
}

#[bon]
impl Model {
    /// Validating constructor, exposed through the generated `Model::builder()`.
    ///
    /// Fails with [`ModelsError::InvalidArgument`] when a required string
    /// field is blank or when `max_completion_tokens` is present but zero.
    #[builder]
    pub fn new(
        #[builder(into)] id: String,
        #[builder(into)] object: String,
        created: u64,
        #[builder(into)] owned_by: String,
        active: bool,
        context_window: u32,
        public_apps: Option<Value>,
        max_completion_tokens: Option<u32>,
    ) -> Result<Self, ModelsError> {
        require_non_blank("id", &id)?;
        require_non_blank("object", &object)?;
        require_non_blank("owned_by", &owned_by)?;
        if max_completion_tokens == Some(0) {
            return Err(ModelsError::InvalidArgument(
                "max_completion_tokens must be at least 1 when present".to_string(),
            ));
        }

        Ok(Self {
            id,
            object,
            created,
            owned_by,
            active,
            context_window,
            public_apps,
            max_completion_tokens,
        })
    }

    /// Build a bare-bones model: object tag `"model"`, `created` stamped with
    /// the current wall-clock time, no public apps, no completion-token cap.
    pub fn simple(
        id: impl Into<String>,
        owned_by: impl Into<String>,
        active: bool,
        context_window: u32,
    ) -> Result<Self, ModelsError> {
        // pre-epoch clocks collapse to 0
        let created = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
        Self::builder()
            .id(id)
            .object(MODEL_OBJECT)
            .created(created)
            .owned_by(owned_by)
            .active(active)
            .context_window(context_window)
            .build()
    }
}

impl Model {
    /// The unique identifier for the model
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The object type tag
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Unix timestamp of when the model was created
    pub fn created(&self) -> u64 {
        self.created
    }

    /// The organization that owns the model
    pub fn owned_by(&self) -> &str {
        &self.owned_by
    }

    /// The context window size (maximum tokens) for this model
    pub fn context_window(&self) -> u32 {
        self.context_window
    }

    /// Opaque provider data about public app availability, if reported
    pub fn public_apps(&self) -> Option<&Value> {
        self.public_apps.as_ref()
    }

    /// Cap on tokens the model may generate in one response, if reported
    pub fn max_completion_tokens(&self) -> Option<u32> {
        self.max_completion_tokens
    }

    /// Check if this model is currently active and available
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Check if the provider reported a completion-token cap
    pub fn has_max_completion_tokens(&self) -> bool {
        self.max_completion_tokens.is_some()
    }

    /// Check if the provider reported public app data
    pub fn has_public_apps(&self) -> bool {
        self.public_apps.is_some()
    }

    /// The completion-token cap when present, otherwise the context window
    pub fn effective_max_tokens(&self) -> u32 {
        self.max_completion_tokens.unwrap_or(self.context_window)
    }

    /// Human-readable name derived from the id: dashes become spaces,
    /// upper-cased (e.g. "llama-3.3" -> "LLAMA 3.3")
    pub fn display_name(&self) -> String {
        self.id.replace('-', " ").to_uppercase()
    }

    /// Check if this model is for speech-to-text
    pub fn is_whisper_model(&self) -> bool {
        self.id.to_lowercase().contains("whisper")
    }

    /// Check if this model is for text-to-speech
    pub fn is_tts_model(&self) -> bool {
        let id = self.id.to_lowercase();
        id.contains("tts") || id.contains("speech")
    }

    /// Check if this model supports chat completions.
    ///
    /// Note the classifier quirk: only a literal `"tts"` substring excludes
    /// a model here, so a `"speech"`-only id counts as both text-to-speech
    /// and chat. Kept as the provider-observed behavior.
    pub fn is_chat_model(&self) -> bool {
        !self.is_whisper_model() && !self.id.to_lowercase().contains("tts")
    }

    /// Get the model family derived from the id naming convention
    pub fn family(&self) -> ModelFamily {
        let id = self.id.to_lowercase();
        if id.starts_with("llama") {
            ModelFamily::Llama
        } else if id.starts_with("mixtral") {
            ModelFamily::Mixtral
        } else if id.starts_with("gemma") {
            ModelFamily::Gemma
        } else if id.contains("whisper") {
            ModelFamily::Whisper
        } else if id.contains("tts") {
            ModelFamily::Tts
        } else {
            ModelFamily::Unknown
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Model family classification derived from the id naming convention
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ModelFamily {
    Llama,
    Mixtral,
    Gemma,
    Whisper,
    Tts,
    Unknown,
}
