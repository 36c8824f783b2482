//! Error types for page mounting, content loading and the contact form.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while wiring components into the browser.
#[derive(Debug, Error)]
pub enum PortfolioError {
	/// No global `window` (not running in a browser main thread)
	#[error("browser window is not available")]
	NoWindow,

	/// `window.document` is missing
	#[error("document is not available")]
	NoDocument,

	/// The canvas refused to hand out a 2D rendering context
	#[error("canvas 2d context is not available")]
	NoCanvasContext,

	/// A DOM call threw
	#[error("javascript error: {0}")]
	Js(String),

	/// A particle style override is outside its accepted range
	#[error("particle style {field} = {value} is out of range")]
	FieldStyle {
		/// Name of the offending setting
		field: &'static str,
		/// The rejected value
		value: f64,
	},

	/// The portfolio content JSON did not match the expected shape
	#[error("invalid portfolio content: {0}")]
	Content(#[from] serde_json::Error),
}

impl From<JsValue> for PortfolioError {
	fn from(value: JsValue) -> Self {
		PortfolioError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// Type alias for Results from page wiring.
pub type Result<T> = std::result::Result<T, PortfolioError>;

/// Reasons a contact form submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
	/// Name field is blank
	#[error("Please tell me your name.")]
	EmptyName,

	/// Email field does not look like an address
	#[error("That email address doesn't look right.")]
	InvalidEmail,

	/// Message field is blank
	#[error("The message is empty.")]
	EmptyMessage,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_display() {
		assert_eq!(
			PortfolioError::NoCanvasContext.to_string(),
			"canvas 2d context is not available"
		);
		assert_eq!(
			PortfolioError::Js("boom".to_string()).to_string(),
			"javascript error: boom"
		);
		assert_eq!(
			PortfolioError::NoDocument.to_string(),
			"document is not available"
		);
		assert_eq!(
			PortfolioError::FieldStyle {
				field: "speed",
				value: -0.2
			}
			.to_string(),
			"particle style speed = -0.2 is out of range"
		);
		assert_eq!(
			ContactError::InvalidEmail.to_string(),
			"That email address doesn't look right."
		);
	}

	#[test]
	fn test_content_error_from_serde() {
		let err = serde_json::from_str::<u32>("not json").unwrap_err();
		let err: PortfolioError = err.into();
		assert!(err.to_string().starts_with("invalid portfolio content:"));
	}
}
