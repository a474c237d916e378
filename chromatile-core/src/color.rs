use crate::space::Mode;
use serde::{Deserialize, Serialize};

/// A color as a model tag plus the model's three channel values, stored in
/// the model's key order.
///
/// Values are unconstrained; range enforcement is cosmetic and lives in the
/// UI controls. Records are immutable. Changes go through [`merge`], which
/// produces a new record with the old values for every untouched channel.
///
/// [`merge`]: ColorRecord::merge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    mode: Mode,
    values: [f64; 3],
}

impl ColorRecord {
    /// Create a record with `values` in `mode.channel_keys()` order.
    pub fn new(mode: Mode, values: [f64; 3]) -> Self {
        Self { mode, values }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Channel values in the mode's key order.
    pub fn values(&self) -> [f64; 3] {
        self.values
    }

    /// Look up a channel value by key.
    pub fn get(&self, key: &str) -> Option<f64> {
        let keys = self.mode.channel_keys();
        keys.iter().position(|k| *k == key).map(|i| self.values[i])
    }

    /// Look up a channel value by key, panicking on a key the mode does not
    /// define.
    ///
    /// Descriptors only query keys of their own model, so a miss here is a
    /// wiring bug, not a runtime condition.
    #[track_caller]
    pub fn channel(&self, key: &str) -> f64 {
        match self.get(key) {
            Some(value) => value,
            None => panic!("channel `{key}` is not defined by mode `{}`", self.mode.tag()),
        }
    }

    /// Atomic merge: the returned record has the patch's values for patched
    /// channels and this record's values everywhere else. The mode tag never
    /// changes. Patch keys the mode does not define are ignored.
    pub fn merge(&self, patch: &ColorPatch) -> Self {
        let keys = self.mode.channel_keys();
        let mut values = self.values;
        for (key, value) in patch.entries() {
            if let Some(i) = keys.iter().position(|k| k == key) {
                values[i] = *value;
            }
        }
        Self { mode: self.mode, values }
    }
}

/// A partial color update: one to three `(channel key, value)` pairs.
///
/// Patches carry no mode tag; they only make sense against the shared
/// record they are merged into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorPatch {
    entries: Vec<(&'static str, f64)>,
}

impl ColorPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(key: &'static str, value: f64) -> Self {
        Self { entries: vec![(key, value)] }
    }

    pub fn push(&mut self, key: &'static str, value: f64) {
        self.entries.push((key, value));
    }

    pub fn entries(&self) -> &[(&'static str, f64)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_follows_mode_key_order() {
        let color = ColorRecord::new(Mode::Oklch, [0.64, 0.12, 0.0]);
        assert_eq!(color.get("l"), Some(0.64));
        assert_eq!(color.get("c"), Some(0.12));
        assert_eq!(color.get("h"), Some(0.0));
        assert_eq!(color.get("r"), None);
    }

    #[test]
    fn merge_updates_only_patched_channels() {
        let color = ColorRecord::new(Mode::Oklch, [0.64, 0.12, 0.0]);
        let merged = color.merge(&ColorPatch::single("h", 200.0));
        assert_eq!(merged.get("l"), Some(0.64));
        assert_eq!(merged.get("c"), Some(0.12));
        assert_eq!(merged.get("h"), Some(200.0));
        assert_eq!(merged.mode(), Mode::Oklch);
    }

    #[test]
    fn merge_ignores_foreign_keys() {
        let color = ColorRecord::new(Mode::Rgb, [0.5, 0.5, 0.5]);
        let merged = color.merge(&ColorPatch::single("h", 120.0));
        assert_eq!(merged, color);
    }

    #[test]
    fn merge_applies_multi_entry_patches_in_order() {
        let color = ColorRecord::new(Mode::Rgb, [0.0, 0.0, 0.0]);
        let mut patch = ColorPatch::single("r", 1.0);
        patch.push("b", 0.25);
        let merged = color.merge(&patch);
        assert_eq!(merged.values(), [1.0, 0.0, 0.25]);
    }

    #[test]
    fn serialization_roundtrip_preserves_record() {
        let original = ColorRecord::new(Mode::Oklch, [0.64, 0.12, 280.0]);
        let json = serde_json::to_string(&original).unwrap();
        let restored: ColorRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    #[should_panic(expected = "channel `q`")]
    fn channel_panics_on_undefined_key() {
        let color = ColorRecord::new(Mode::Hsl, [120.0, 0.5, 0.5]);
        color.channel("q");
    }
}
