//! Saved dashboard state (`.motodash/motorcycle_state.json`).
//!
//! Loading never fails outward: a missing, unreadable, or malformed record
//! means "no vehicle selected".

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::record::{StateRecord, deserialize, serialize};
use crate::core::variant::Variant;

/// JSON Schema every saved record must satisfy.
pub const STATE_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/motorcycle_state/v1.schema.json"
));

/// Read and schema-check the record at `path`.
pub fn read_record(path: &Path) -> Result<StateRecord> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read state {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse state {}", path.display()))?;
    validate_schema(&value).with_context(|| format!("validate state {}", path.display()))?;
    let record: StateRecord = serde_json::from_value(value)
        .with_context(|| format!("deserialize state {}", path.display()))?;
    Ok(record)
}

/// Load the saved variant, or `None` when there is nothing usable on disk.
pub fn load_state(path: &Path) -> Option<Variant> {
    if !path.exists() {
        debug!(path = %path.display(), "no saved state");
        return None;
    }
    let record = match read_record(path) {
        Ok(record) => record,
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %format!("{err:#}"),
                "ignoring unusable saved state"
            );
            return None;
        }
    };
    let variant = deserialize(&record);
    match &variant {
        Some(bike) => debug!(
            model = %bike.model(),
            speed = bike.speed(),
            rpm = bike.rpm(),
            gear = bike.gear(),
            "saved state loaded"
        ),
        None => warn!(
            path = %path.display(),
            model = %record.model,
            "saved state names unknown model"
        ),
    }
    variant
}

/// Overwrite the saved state with `variant`.
pub fn save_state(path: &Path, variant: &Variant) -> Result<()> {
    let record = serialize(variant);
    debug!(path = %path.display(), model = %record.model, speed = record.speed, "writing state");
    let mut buf = serde_json::to_string_pretty(&record).context("serialize state json")?;
    buf.push('\n');
    super::write_atomic(path, &buf)
}

fn validate_schema(record: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(STATE_SCHEMA).context("parse state schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    let messages = compiled
        .iter_errors(record)
        .map(|err| err.to_string())
        .collect::<Vec<_>>();
    if !messages.is_empty() {
        return Err(anyhow!("state schema validation failed: {}", messages.join("; ")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::Model;

    /// Verifies save → load preserves model and readings.
    #[test]
    fn save_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("motorcycle_state.json");

        let mut bike = Variant::new(Model::HondaCbr);
        for _ in 0..12 {
            bike.accelerate();
        }
        save_state(&path, &bike).expect("save");

        let loaded = load_state(&path).expect("load");
        assert_eq!(loaded, bike);
    }

    /// Guards the on-disk layout against accidental field renames or reordering.
    #[test]
    fn saved_record_format_is_stable() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("motorcycle_state.json");

        save_state(&path, &Variant::new(Model::SuzukiGsx)).expect("save");
        let contents = fs::read_to_string(&path).expect("read");
        let expected =
            "{\n  \"model\": \"Suzuki GSX\",\n  \"speed\": 0,\n  \"rpm\": 1000,\n  \"gear\": 1\n}\n";
        assert_eq!(contents, expected);
    }

    #[test]
    fn save_creates_parent_directory() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("state.json");
        save_state(&path, &Variant::new(Model::HondaHornet)).expect("save");
        assert!(path.exists());
        assert!(!temp.path().join("nested").join("state.json.tmp").exists());
    }

    #[test]
    fn missing_file_loads_as_none() {
        let temp = tempfile::tempdir().expect("tempdir");
        assert!(load_state(&temp.path().join("absent.json")).is_none());
    }

    #[test]
    fn malformed_records_load_as_none() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("state.json");
        let cases = [
            "not json",
            "[]",
            r#"{"model":"Honda CBR","speed":10,"rpm":2000}"#,
            r#"{"model":"Honda CBR","speed":"fast","rpm":2000,"gear":1}"#,
            r#"{"model":"Honda CBR","speed":-5,"rpm":2000,"gear":1}"#,
            r#"{"model":"Ducati","speed":10,"rpm":2000,"gear":1}"#,
        ];
        for case in cases {
            fs::write(&path, case).expect("write");
            assert!(load_state(&path).is_none(), "case {case}");
        }
    }

    #[test]
    fn read_record_reports_missing_field() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("state.json");
        fs::write(&path, r#"{"model":"Honda CBR","speed":10,"rpm":2000}"#).expect("write");
        let err = read_record(&path).expect_err("missing gear");
        assert!(format!("{err:#}").contains("gear"));
    }

    #[test]
    fn legacy_type_name_records_load() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("state.json");
        fs::write(&path, r#"{"model": "HondaHornet", "speed": 66, "rpm": 5100, "gear": 2}"#)
            .expect("write");
        let bike = load_state(&path).expect("load");
        assert_eq!(bike.model(), Model::HondaHornet);
        assert_eq!((bike.speed(), bike.rpm(), bike.gear()), (66, 5100, 2));
    }
}
