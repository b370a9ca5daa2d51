//! Trigger configuration.
//! Keys are camelCase so option objects can come straight from JS; the
//! legacy plugin keys are accepted as aliases.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::errors::TriggerError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TriggerOptions {
    /// Only fire on an axis once the element's content can no longer scroll along it.
    #[serde(alias = "isScrollSlideSync")]
    pub sync_with_scroll: bool,
    /// Prevent native scrolling on every touchmove. Disables `sync_with_scroll`.
    #[serde(alias = "isPreventScroll")]
    pub block_scroll: bool,
    #[serde(alias = "slideX")]
    pub enable_x: bool,
    #[serde(alias = "slideY")]
    pub enable_y: bool,
    /// Pixels travelled from the segment anchor before X can fire.
    pub threshold_x: f64,
    /// Pixels travelled from the segment anchor before Y can fire.
    pub threshold_y: f64,
    /// Pixels per second, measured from the segment anchor.
    #[serde(alias = "slideSpeed")]
    pub min_speed: f64,
    /// Log every fire to the console.
    pub debug: bool,
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self {
            sync_with_scroll: false,
            block_scroll: false,
            enable_x: false,
            enable_y: true,
            threshold_x: 50.0,
            threshold_y: 50.0,
            min_speed: 200.0,
            debug: false,
        }
    }
}

impl TriggerOptions {
    pub fn from_json(raw: &str) -> Result<Self, TriggerError> {
        let opts: Self = serde_json::from_str(raw)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reads a plain JS options object (anything `JSON.stringify` accepts).
    pub fn from_js(value: &JsValue) -> Result<Self, TriggerError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let raw = js_sys::JSON::stringify(value)
            .map(|s| s.as_string())
            .map_err(|err| format!("{err:?}"));
        Self::from_stringified(raw)
    }

    /// `JSON.stringify` throws on cyclic objects and yields `undefined`
    /// for values it cannot represent; neither is an options document.
    fn from_stringified(raw: Result<Option<String>, String>) -> Result<Self, TriggerError> {
        match raw {
            Ok(Some(raw)) => Self::from_json(&raw),
            Ok(None) => Err(TriggerError::Unserializable {
                reason: "JSON.stringify returned undefined".to_string(),
            }),
            Err(reason) => Err(TriggerError::Unserializable { reason }),
        }
    }

    pub fn to_json(&self) -> String {
        // A struct of bools and floats always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), TriggerError> {
        for (name, value) in [
            ("thresholdX", self.threshold_x),
            ("thresholdY", self.threshold_y),
            ("minSpeed", self.min_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TriggerError::InvalidOption { name, value });
            }
        }
        Ok(())
    }

    /// Scroll sync only runs when scrolling is left to the browser.
    pub fn syncs_scroll(&self) -> bool {
        self.sync_with_scroll && !self.block_scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let o = TriggerOptions::default();
        assert!(!o.sync_with_scroll);
        assert!(!o.block_scroll);
        assert!(!o.enable_x);
        assert!(o.enable_y);
        assert_eq!(o.threshold_x, 50.0);
        assert_eq!(o.threshold_y, 50.0);
        assert_eq!(o.min_speed, 200.0);
    }

    #[test]
    fn missing_keys_take_defaults() {
        let o = TriggerOptions::from_json(r#"{"enableX": true, "thresholdX": 30}"#).unwrap();
        assert!(o.enable_x);
        assert_eq!(o.threshold_x, 30.0);
        assert!(o.enable_y);
        assert_eq!(o.min_speed, 200.0);
    }

    #[test]
    fn legacy_keys_are_aliases() {
        let o = TriggerOptions::from_json(
            r#"{"isScrollSlideSync": true, "isPreventScroll": true, "slideX": true, "slideY": false, "slideSpeed": 120}"#,
        )
        .unwrap();
        assert!(o.sync_with_scroll);
        assert!(o.block_scroll);
        assert!(o.enable_x);
        assert!(!o.enable_y);
        assert_eq!(o.min_speed, 120.0);
        assert!(!o.syncs_scroll());
    }

    #[test]
    fn rejects_negative_threshold() {
        let err = TriggerOptions::from_json(r#"{"thresholdY": -1}"#).unwrap_err();
        assert!(matches!(err, TriggerError::InvalidOption { name: "thresholdY", .. }));
    }

    #[test]
    fn rejects_mistyped_field() {
        let err = TriggerOptions::from_json(r#"{"enableX": "yes"}"#).unwrap_err();
        assert!(matches!(err, TriggerError::InvalidJson(_)));
    }

    #[test]
    fn stringify_failure_is_reported_as_such() {
        let err = TriggerOptions::from_stringified(Err("TypeError: cyclic object value".into()))
            .unwrap_err();
        assert!(err.to_string().contains("cyclic"));
        let TriggerError::Unserializable { reason } = err else {
            panic!("expected Unserializable, got {err}");
        };
        assert!(reason.starts_with("TypeError"));

        let err = TriggerOptions::from_stringified(Ok(None)).unwrap_err();
        assert!(matches!(err, TriggerError::Unserializable { .. }));

        let o = TriggerOptions::from_stringified(Ok(Some(r#"{"enableX":true}"#.into()))).unwrap();
        assert!(o.enable_x);
    }

    #[test]
    fn json_survives_a_trip_through_storage() {
        let o = TriggerOptions {
            enable_x: true,
            sync_with_scroll: true,
            ..Default::default()
        };
        assert_eq!(TriggerOptions::from_json(&o.to_json()).unwrap(), o);
    }
}
