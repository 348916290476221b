//! `ERNIE` model constants and endpoint routing
//!
//! Wenxin Workshop serves each chat model under its own path segment
//! (`.../wenxinworkshop/chat/{path}`). [`model_to_path`] is the single place
//! that knows this mapping.

use super::types::ModelPath;

/// Flagship general-purpose chat model.
pub const ERNIE_BOT: &str = "ERNIE-Bot";
/// Faster, cheaper variant.
pub const ERNIE_BOT_TURBO: &str = "ERNIE-Bot-turbo";
/// Extended 8K context variant.
pub const ERNIE_BOT_8K: &str = "ERNIE-Bot-8K";
/// ERNIE 4.0 ("pro").
pub const ERNIE_BOT_PRO: &str = "ERNIE-Bot-Pro";

// Open third-party models hosted on Wenxin Workshop
pub const BLOOMZ_7B: &str = "BLOOMZ-7B";
pub const LLAMA2_7B_CHAT: &str = "Llama-2-7b-chat";
pub const LLAMA2_13B_CHAT: &str = "Llama-2-13b-chat";
pub const LLAMA2_70B_CHAT: &str = "Llama-2-70b-chat";

/// Path used for any model identifier not listed above.
pub const DEFAULT_COMPLETION_MODEL_PATH: &str = "completions";

/// Path of the Embedding-V1 model.
pub const EMBEDDING_V1_PATH: &str = "embedding-v1";

/// All known `ERNIE` chat models
pub const ALL: &[&str] = &[
    ERNIE_BOT,
    ERNIE_BOT_TURBO,
    ERNIE_BOT_8K,
    ERNIE_BOT_PRO,
    BLOOMZ_7B,
    LLAMA2_7B_CHAT,
    LLAMA2_13B_CHAT,
    LLAMA2_70B_CHAT,
];

/// Get all known `ERNIE` chat models
pub fn all_models() -> Vec<String> {
    ALL.iter().map(|&s| s.to_string()).collect()
}

pub fn is_model_supported(model: &str) -> bool {
    ALL.contains(&model)
}

/// Map a model identifier to its completion endpoint path.
///
/// Total and pure: unknown identifiers (including the empty string) map to
/// [`DEFAULT_COMPLETION_MODEL_PATH`].
pub fn model_to_path(model: &str) -> ModelPath {
    let path = match model {
        ERNIE_BOT => "completions",
        ERNIE_BOT_TURBO => "eb-instant",
        ERNIE_BOT_8K => "ernie_bot_8k",
        ERNIE_BOT_PRO => "completions_pro",
        BLOOMZ_7B => "bloomz_7b1",
        LLAMA2_7B_CHAT => "llama_2_7b",
        LLAMA2_13B_CHAT => "llama_2_13b",
        LLAMA2_70B_CHAT => "llama_2_70b",
        _ => DEFAULT_COMPLETION_MODEL_PATH,
    };
    ModelPath::new(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_models_map_to_their_paths() {
        let expected = [
            (ERNIE_BOT, "completions"),
            (ERNIE_BOT_TURBO, "eb-instant"),
            (ERNIE_BOT_8K, "ernie_bot_8k"),
            (ERNIE_BOT_PRO, "completions_pro"),
            (BLOOMZ_7B, "bloomz_7b1"),
            (LLAMA2_7B_CHAT, "llama_2_7b"),
            (LLAMA2_13B_CHAT, "llama_2_13b"),
            (LLAMA2_70B_CHAT, "llama_2_70b"),
        ];
        for (model, path) in expected {
            assert_eq!(model_to_path(model).as_str(), path, "model {model}");
        }
    }

    #[test]
    fn turbo_never_maps_to_default() {
        assert_ne!(
            model_to_path(ERNIE_BOT_TURBO).as_str(),
            DEFAULT_COMPLETION_MODEL_PATH
        );
    }

    #[test]
    fn unknown_models_fall_back_to_default_path() {
        for model in ["", "gpt-4", "ernie-bot", "ERNIE-Bot-4"] {
            assert_eq!(
                model_to_path(model).as_str(),
                DEFAULT_COMPLETION_MODEL_PATH,
                "model {model:?}"
            );
        }
    }

    #[test]
    fn catalog_lists_every_routed_model() {
        assert_eq!(all_models().len(), ALL.len());
        assert!(is_model_supported(LLAMA2_70B_CHAT));
        assert!(!is_model_supported("non-existent-model"));
    }
}
