//! WASM bindings for texstate
//!
//! This module provides JavaScript-accessible expression evaluation, numeral
//! formatting, list splitting and a command session.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{DivisionMode, Expansion, Session, SessionOptions, StateError};

/// Session options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct WasmSessionOptions {
    /// Reject names that TeX could not tokenize as a control sequence
    #[serde(default = "default_true")]
    pub validate_names: bool,
    /// `"rounded"`, `"truncated"` or `"real"`
    #[serde(default)]
    pub division: Option<String>,
}

#[cfg(feature = "wasm")]
impl Default for WasmSessionOptions {
    fn default() -> Self {
        Self {
            validate_names: true,
            division: None,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

#[cfg(feature = "wasm")]
impl From<WasmSessionOptions> for SessionOptions {
    fn from(opts: WasmSessionOptions) -> Self {
        let division = match opts.division.as_deref() {
            Some("truncated") => DivisionMode::Truncated,
            Some("real") => DivisionMode::Real,
            _ => DivisionMode::Rounded,
        };
        SessionOptions {
            validate_names: opts.validate_names,
            division,
        }
    }
}

/// Command result with error details
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct CommandResult {
    /// Expansion kind: `nothing`, `text`, `math`, `number`, `tokens` or `branch`
    pub kind: String,
    /// What the host should insert or re-read
    pub output: String,
    /// Condition of a `branch` result
    pub condition: Option<bool>,
    /// Whether the command succeeded
    pub success: bool,
    /// Error id such as `UndefinedCounter`
    pub error_kind: Option<String>,
    /// Error message if the command failed
    pub error: Option<String>,
}

#[cfg(feature = "wasm")]
impl CommandResult {
    fn from_result(result: Result<Expansion, StateError>) -> Self {
        match result {
            Ok(expansion) => {
                let condition = match &expansion {
                    Expansion::Branch { condition, .. } => Some(*condition),
                    _ => None,
                };
                CommandResult {
                    kind: expansion.kind().to_string(),
                    output: expansion.to_string(),
                    condition,
                    success: true,
                    ..Default::default()
                }
            }
            Err(e) => CommandResult {
                error_kind: Some(e.kind().to_string()),
                error: Some(e.to_string()),
                ..Default::default()
            },
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Evaluate an integer expression, rounding like `\numexpr`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "evaluateInteger")]
pub fn evaluate_integer_wasm(input: &str) -> Result<f64, JsError> {
    crate::evaluate_integer(input)
        .map(|n| n as f64)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// Format a number with a formatting command name such as `"Roman"`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "formatNumeral")]
pub fn format_numeral_wasm(n: i32, style: &str) -> Result<String, JsError> {
    crate::format_numeral(n.into(), style).map_err(|e| JsError::new(&e.to_string()))
}

/// Split separated text into items
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "separateList")]
pub fn separate_list_wasm(input: &str, separator: &str) -> Result<JsValue, JsError> {
    let items = crate::separate_list(input, separator).map_err(|e| JsError::new(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&items).map_err(|e| JsError::new(&e.to_string()))
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// A command session that keeps state between calls
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "Session")]
pub struct WasmSession {
    inner: Session,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen(js_class = "Session")]
impl WasmSession {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> WasmSession {
        let opts: WasmSessionOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
        WasmSession {
            inner: Session::with_options(opts.into()),
        }
    }

    /// Run a command; `args` is LaTeX source such as `{section}{3}`
    pub fn invoke(&mut self, name: &str, args: &str) -> JsValue {
        let result = CommandResult::from_result(self.inner.invoke(name, args));
        serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
    }

    /// Clear all counters, flags and lists
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}
