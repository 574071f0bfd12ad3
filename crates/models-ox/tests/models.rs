use models_ox::{Model, ModelFamily, ModelsError};

fn chat_model(id: &str) -> Model {
    Model::builder()
        .id(id)
        .object("model")
        .created(1_234_567_890)
        .owned_by("groq")
        .active(true)
        .context_window(131_072)
        .build()
        .expect("model should pass validation")
}

#[test]
fn test_round_trip_accessors() {
    let model = Model::builder()
        .id("llama-3.3-70b-versatile")
        .object("model")
        .created(1_234_567_890)
        .owned_by("groq")
        .active(true)
        .context_window(131_072)
        .public_apps(serde_json::json!({"main": null}))
        .max_completion_tokens(32_768)
        .build()
        .expect("model should pass validation");

    assert_eq!(model.id(), "llama-3.3-70b-versatile");
    assert_eq!(model.object(), "model");
    assert_eq!(model.created(), 1_234_567_890);
    assert_eq!(model.owned_by(), "groq");
    assert!(model.is_active());
    assert_eq!(model.context_window(), 131_072);
    assert_eq!(model.public_apps(), Some(&serde_json::json!({"main": null})));
    assert_eq!(model.max_completion_tokens(), Some(32_768));
}

#[test]
fn test_blank_required_fields_rejected() {
    for (id, object, owned_by) in [
        ("", "model", "groq"),
        ("   ", "model", "groq"),
        ("llama-3.1-8b-instant", "", "groq"),
        ("llama-3.1-8b-instant", "model", "\t\n"),
    ] {
        let result = Model::builder()
            .id(id)
            .object(object)
            .created(0)
            .owned_by(owned_by)
            .active(true)
            .context_window(8_192)
            .build();

        assert!(
            matches!(result, Err(ModelsError::InvalidArgument(_))),
            "expected InvalidArgument for id={id:?} object={object:?} owned_by={owned_by:?}"
        );
    }
}

#[test]
fn test_zero_max_completion_tokens_rejected() {
    let result = Model::builder()
        .id("llama-3.1-8b-instant")
        .object("model")
        .created(1_234_567_890)
        .owned_by("groq")
        .active(true)
        .context_window(131_072)
        .max_completion_tokens(0)
        .build();

    assert!(matches!(result, Err(ModelsError::InvalidArgument(_))));
}

#[test]
fn test_simple_constructor() {
    let model = Model::simple("a-b", "owner", true, 100).expect("simple model should build");

    assert_eq!(model.object(), "model");
    assert!(model.created() > 0);
    assert_eq!(model.display_name(), "A B");
    assert!(!model.has_max_completion_tokens());
    assert!(!model.has_public_apps());
    assert_eq!(model.effective_max_tokens(), 100);
}

#[test]
fn test_simple_constructor_still_validates() {
    assert!(matches!(
        Model::simple("  ", "owner", true, 100),
        Err(ModelsError::InvalidArgument(_))
    ));
}

#[test]
fn test_effective_max_tokens_prefers_cap() {
    let model = Model::builder()
        .id("llama-3.3-70b-versatile")
        .object("model")
        .created(1_234_567_890)
        .owned_by("groq")
        .active(true)
        .context_window(131_072)
        .max_completion_tokens(32_768)
        .build()
        .expect("model should pass validation");

    assert_eq!(model.effective_max_tokens(), 32_768);
}

#[test]
fn test_whisper_classification() {
    let model = chat_model("whisper-large-v3");

    assert!(model.is_whisper_model());
    assert!(!model.is_tts_model());
    assert!(!model.is_chat_model());
    assert_eq!(model.family(), ModelFamily::Whisper);
}

#[test]
fn test_tts_classification() {
    let model = chat_model("playai-tts");

    assert!(model.is_tts_model());
    assert!(!model.is_whisper_model());
    assert!(!model.is_chat_model());
    assert_eq!(model.family(), ModelFamily::Tts);
}

#[test]
fn test_chat_classification() {
    let model = chat_model("llama-3.3-70b-versatile");

    assert!(model.is_chat_model());
    assert!(!model.is_whisper_model());
    assert!(!model.is_tts_model());
    assert_eq!(model.family(), ModelFamily::Llama);
}

// Known classifier inconsistency, kept on purpose: the text-to-speech check
// also matches "speech", but the chat check only excludes a literal "tts".
#[test]
fn speech_only_id_is_both_tts_and_chat() {
    let model = chat_model("text-to-speech");

    assert!(model.is_tts_model());
    assert!(model.is_chat_model());
    assert!(!model.is_whisper_model());
}

#[test]
fn test_classification_is_case_insensitive() {
    assert!(chat_model("Whisper-Large-V3").is_whisper_model());
    assert!(chat_model("PlayAI-TTS").is_tts_model());
    assert!(!chat_model("PlayAI-TTS").is_chat_model());
}

#[test]
fn test_family_classification() {
    assert_eq!(chat_model("mixtral-8x7b-32768").family(), ModelFamily::Mixtral);
    assert_eq!(chat_model("gemma2-9b-it").family(), ModelFamily::Gemma);
    assert_eq!(chat_model("qwen-qwq-32b").family(), ModelFamily::Unknown);
    assert_eq!(ModelFamily::Mixtral.to_string(), "mixtral");
}

#[test]
fn test_display_writes_the_id() {
    let model = chat_model("llama-3.1-8b-instant");
    assert_eq!(model.to_string(), "llama-3.1-8b-instant");
}
