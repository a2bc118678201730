use rainshift_core::catalog::Catalog;
use rainshift_core::core_api::{
    CoreError, CoreErrorCode, DEFAULT_MAX_COINS, Edit, Engine, EngineOptions, Session,
};
use rainshift_render::{
    JsonStyle, TextRenderOptions, TextStyle, render_json_full, render_text_with_options,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct WebRenderOptions {
    pub json_output: bool,
    pub verbose: bool,
    pub max_coins: Option<u32>,
    /// Replacement catalog in the same JSON shape the CLI accepts.
    pub catalog_json: Option<String>,
}

#[derive(Debug, Clone)]
struct WebError {
    code: &'static str,
    message: String,
}

#[derive(Debug, Clone, Serialize)]
struct WebErrorPayload {
    code: String,
    message: String,
}

impl WebError {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn to_js_value(&self) -> JsValue {
        let payload = WebErrorPayload {
            code: self.code.to_string(),
            message: self.message.clone(),
        };
        serde_wasm_bindgen::to_value(&payload).unwrap_or_else(|_| {
            JsValue::from_str(&format!("{}: {}", payload.code, payload.message))
        })
    }
}

impl From<CoreError> for WebError {
    fn from(err: CoreError) -> Self {
        let code = match err.code {
            CoreErrorCode::Io => "io_failed",
            CoreErrorCode::MalformedInput => "malformed_input",
            CoreErrorCode::InvalidStructure => "invalid_structure",
            CoreErrorCode::Serialization => "serialization_failed",
            CoreErrorCode::Catalog => "invalid_catalog",
            CoreErrorCode::UnknownEntry => "unknown_entry",
        };
        Self::new(code, err.message)
    }
}

#[wasm_bindgen]
pub fn render_profile(profile_bytes: &[u8], options: JsValue) -> Result<String, JsValue> {
    let parsed_options = parse_options(options).map_err(|err| err.to_js_value())?;
    render_profile_impl(profile_bytes, &parsed_options).map_err(|err| err.to_js_value())
}

/// Applies a list of edits and returns the rewritten profile XML.
#[wasm_bindgen]
pub fn edit_profile(
    profile_bytes: &[u8],
    edits: JsValue,
    options: JsValue,
) -> Result<String, JsValue> {
    let parsed_options = parse_options(options).map_err(|err| err.to_js_value())?;
    let parsed_edits = parse_edits(edits).map_err(|err| err.to_js_value())?;
    edit_profile_impl(profile_bytes, &parsed_edits, &parsed_options)
        .map_err(|err| err.to_js_value())
}

fn render_profile_impl(
    profile_bytes: &[u8],
    options: &WebRenderOptions,
) -> Result<String, WebError> {
    let session = open_session(profile_bytes, options)?;

    if options.json_output {
        let value = render_json_full(&session, JsonStyle::CanonicalV1);
        return serde_json::to_string_pretty(&value).map_err(|err| {
            WebError::new(
                "render_failed",
                format!("failed to serialize rendered JSON output: {err}"),
            )
        });
    }

    Ok(render_text_with_options(
        &session,
        TextStyle::Summary,
        TextRenderOptions {
            verbose: options.verbose,
        },
    ))
}

fn edit_profile_impl(
    profile_bytes: &[u8],
    edits: &[Edit],
    options: &WebRenderOptions,
) -> Result<String, WebError> {
    let mut session = open_session(profile_bytes, options)?;
    session.apply_edits(edits)?;
    Ok(session.to_xml_string()?)
}

fn open_session(profile_bytes: &[u8], options: &WebRenderOptions) -> Result<Session, WebError> {
    if profile_bytes.is_empty() {
        return Err(WebError::new(
            "unsupported_file",
            "The uploaded file is empty. Please provide a UserProfile XML file.",
        ));
    }

    let catalog = match options.catalog_json.as_deref() {
        Some(text) => Catalog::from_json(text)?,
        None => Catalog::builtin(),
    };
    let engine = Engine::new(catalog).with_options(EngineOptions {
        max_coins: options.max_coins.unwrap_or(DEFAULT_MAX_COINS),
    });
    Ok(engine.open_bytes(profile_bytes)?)
}

fn parse_options(options: JsValue) -> Result<WebRenderOptions, WebError> {
    if options.is_null() || options.is_undefined() {
        return Ok(WebRenderOptions::default());
    }

    serde_wasm_bindgen::from_value(options).map_err(|err| {
        WebError::new(
            "invalid_options",
            format!("Failed to parse web render options: {err}"),
        )
    })
}

fn parse_edits(edits: JsValue) -> Result<Vec<Edit>, WebError> {
    if edits.is_null() || edits.is_undefined() {
        return Ok(Vec::new());
    }

    serde_wasm_bindgen::from_value(edits).map_err(|err| {
        WebError::new("invalid_edits", format!("Failed to parse edit list: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use rainshift_core::core_api::{Edit, load_save_file};

    use super::{WebRenderOptions, edit_profile_impl, render_profile_impl};

    #[test]
    fn render_profile_impl_renders_fixture() {
        let bytes = fixture_bytes("tests/fixtures/UserProfile.xml");
        let rendered = render_profile_impl(&bytes, &WebRenderOptions::default())
            .expect("fixture should render");
        assert!(rendered.contains("RISK OF RAIN 2"));
        assert!(rendered.contains("Lunar Coins: 245"));
        assert!(!rendered.contains(":::"));
    }

    #[test]
    fn render_profile_impl_can_list_entries() {
        let bytes = fixture_bytes("tests/fixtures/UserProfile.xml");
        let options = WebRenderOptions {
            verbose: true,
            ..WebRenderOptions::default()
        };
        let rendered = render_profile_impl(&bytes, &options).expect("fixture should render");
        assert!(rendered.contains("::: ARTIFACTS :::"));
    }

    #[test]
    fn render_profile_impl_rejects_empty_payload() {
        let err = render_profile_impl(&[], &WebRenderOptions::default())
            .expect_err("empty payload should fail");
        assert_eq!(err.code, "unsupported_file");
    }

    #[test]
    fn render_profile_impl_maps_core_errors() {
        let err = render_profile_impl(b"<Save><coins>1</coins></Save>", &WebRenderOptions::default())
            .expect_err("wrong root should fail");
        assert_eq!(err.code, "invalid_structure");

        let err = render_profile_impl(b"<UserProfile>", &WebRenderOptions::default())
            .expect_err("malformed XML should fail");
        assert_eq!(err.code, "malformed_input");

        let options = WebRenderOptions {
            catalog_json: Some("not json".to_string()),
            ..WebRenderOptions::default()
        };
        let bytes = fixture_bytes("tests/fixtures/UserProfile.xml");
        let err = render_profile_impl(&bytes, &options).expect_err("bad catalog should fail");
        assert_eq!(err.code, "invalid_catalog");
    }

    #[test]
    fn render_profile_impl_can_emit_json() {
        let bytes = fixture_bytes("tests/fixtures/UserProfile.xml");
        let options = WebRenderOptions {
            json_output: true,
            ..WebRenderOptions::default()
        };
        let rendered = render_profile_impl(&bytes, &options).expect("json output should render");

        let parsed: serde_json::Value =
            serde_json::from_str(&rendered).expect("json output should parse");
        assert_eq!(parsed["name"], "Scav & Friends");
        assert!(parsed.get("challenge_stats").is_some());
        assert!(parsed.get("logbook").is_some());
    }

    #[test]
    fn edit_profile_impl_returns_updated_xml() {
        let bytes = fixture_bytes("tests/fixtures/UserProfile.xml");
        let options = WebRenderOptions {
            max_coins: Some(100),
            ..WebRenderOptions::default()
        };
        let edits = [
            Edit::SetCoins { value: 5_000 },
            Edit::SetLogbookEntry {
                id: "item-clover".to_string(),
                enabled: true,
            },
        ];
        let xml = edit_profile_impl(&bytes, &edits, &options).expect("edits should apply");

        let data = load_save_file(&xml).expect("edited XML should load").save_data;
        assert_eq!(data.coins, 100);
        assert!(data.discovered_pickups.contains("ItemIndex.Clover"));
        assert!(xml.contains("<version>2</version>"));
    }

    #[test]
    fn edit_profile_impl_reports_unknown_entries() {
        let bytes = fixture_bytes("tests/fixtures/UserProfile.xml");
        let edits = [Edit::SetChallenge {
            id: "missing".to_string(),
            enabled: true,
        }];
        let err = edit_profile_impl(&bytes, &edits, &WebRenderOptions::default())
            .expect_err("unknown id should fail");
        assert_eq!(err.code, "unknown_entry");
        assert!(err.message.contains("missing"));
    }

    fn fixture_bytes(relative_path: &str) -> Vec<u8> {
        let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../..")
            .join(relative_path);
        fs::read(full_path).expect("fixture bytes should be readable")
    }
}
