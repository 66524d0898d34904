//! Patient record normalization.
//!
//! Callers send patient records with inconsistent field naming (camelCase on
//! the wire, snake_case in the artifact) and inconsistent boolean encodings
//! (true/false, 0/1, arbitrary truthy values). This module deterministically
//! maps every supported input shape to the canonical ordered feature vector.

use serde_json::{Map, Value};

use super::features::{FeatureValue, FeatureVector, MODEL_FEATURES};

/// A caller-supplied patient record, loosely typed on the wire.
pub type PatientRecord = Map<String, Value>;

/// Wire alias for each canonical feature, in canonical order.
///
/// camelCase is what the frontend sends; records already keyed by canonical
/// names pass through unchanged. When both spellings are present, the
/// camelCase key wins.
const WIRE_ALIASES: [(&str, &str); 10] = [
    ("gender", "gender"),
    ("age", "age"),
    ("hypertension", "hypertension"),
    ("heart_disease", "heartDisease"),
    ("ever_married", "everMarried"),
    ("work_type", "workType"),
    ("Residence_type", "residenceType"),
    ("avg_glucose_level", "avgGlucoseLevel"),
    ("bmi", "bmi"),
    ("smoking_status", "smokingStatus"),
];

/// Errors produced while building the feature vector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// A required field is absent (or unusable: null, array, object).
    #[error("Missing required field '{0}'")]
    MissingField(String),

    /// Strict mode only: the record carries a key outside the accepted set.
    #[error("Unrecognized field '{0}'")]
    UnknownField(String),
}

/// Build the canonical feature vector from a raw patient record.
///
/// The two boolean-like features (`hypertension`, `heart_disease`) are
/// coerced via truthiness to 1.0/0.0 and default to 0.0 when absent. Every
/// other feature is required; keys outside the accepted set are ignored
/// unless `strict` is set.
///
/// Normalization is a pure function of the record: the same input always
/// yields the same vector.
///
/// # Errors
/// Returns [`NormalizeError::MissingField`] naming the first canonical field
/// that cannot be resolved, or [`NormalizeError::UnknownField`] in strict
/// mode for an unrecognized key.
pub fn normalize(record: &PatientRecord, strict: bool) -> Result<FeatureVector, NormalizeError> {
    if strict {
        for key in record.keys() {
            let recognized = WIRE_ALIASES
                .iter()
                .any(|(canonical, wire)| key == canonical || key == wire);
            if !recognized {
                return Err(NormalizeError::UnknownField(key.clone()));
            }
        }
    }

    let mut values = Vec::with_capacity(MODEL_FEATURES.len());
    for (canonical, wire) in WIRE_ALIASES {
        let raw = record.get(wire).or_else(|| record.get(canonical));

        let value = if matches!(canonical, "hypertension" | "heart_disease") {
            FeatureValue::Num(f64::from(u8::from(is_truthy(raw))))
        } else {
            raw.and_then(FeatureValue::from_json)
                .ok_or_else(|| NormalizeError::MissingField(canonical.to_string()))?
        };
        values.push(value);
    }

    // Length is ten by construction; from_values only re-checks the invariant.
    FeatureVector::from_values(values)
        .map_err(|_| NormalizeError::MissingField("feature vector".to_string()))
}

/// Python-style truthiness for the boolean-like features.
///
/// `true`, nonzero numbers and non-empty strings/containers coerce to 1;
/// `false`, `0`, `null`, empty values and absent keys coerce to 0.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> PatientRecord {
        let value = serde_json::json!({
            "gender": "Male",
            "age": 67,
            "hypertension": false,
            "heartDisease": true,
            "everMarried": "Yes",
            "workType": "Private",
            "residenceType": "Urban",
            "avgGlucoseLevel": 228.69,
            "bmi": 36.6,
            "smokingStatus": "formerly smoked"
        });
        value.as_object().expect("Should be an object").clone()
    }

    #[test]
    fn test_canonical_order_is_fixed() {
        let vector = normalize(&sample_record(), false).expect("Should normalize");
        let expected = vec![
            FeatureValue::Cat("Male".into()),
            FeatureValue::Num(67.0),
            FeatureValue::Num(0.0),
            FeatureValue::Num(1.0),
            FeatureValue::Cat("Yes".into()),
            FeatureValue::Cat("Private".into()),
            FeatureValue::Cat("Urban".into()),
            FeatureValue::Num(228.69),
            FeatureValue::Num(36.6),
            FeatureValue::Cat("formerly smoked".into()),
        ];
        assert_eq!(vector.values(), expected.as_slice());
    }

    #[test]
    fn test_order_independent_of_input_key_order() {
        let reversed: PatientRecord = sample_record().into_iter().rev().collect();
        let a = normalize(&sample_record(), false).expect("Should normalize");
        let b = normalize(&reversed, false).expect("Should normalize");
        assert_eq!(a, b);
    }

    #[test]
    fn test_idempotent() {
        let record = sample_record();
        let a = normalize(&record, false).expect("Should normalize");
        let b = normalize(&record, false).expect("Should normalize");
        assert_eq!(a, b);
    }

    #[test]
    fn test_boolean_truthiness() {
        let truthy = [
            serde_json::json!(true),
            serde_json::json!(1),
            serde_json::json!(2.5),
            serde_json::json!("yes"),
            serde_json::json!("no"), // non-empty string is truthy
        ];
        for v in truthy {
            let mut record = sample_record();
            record.insert("hypertension".into(), v.clone());
            let vector = normalize(&record, false).expect("Should normalize");
            assert_eq!(vector.values()[2], FeatureValue::Num(1.0), "value {v}");
        }

        let falsy = [
            serde_json::json!(false),
            serde_json::json!(0),
            serde_json::Value::Null,
            serde_json::json!(""),
        ];
        for v in falsy {
            let mut record = sample_record();
            record.insert("hypertension".into(), v.clone());
            let vector = normalize(&record, false).expect("Should normalize");
            assert_eq!(vector.values()[2], FeatureValue::Num(0.0), "value {v}");
        }
    }

    #[test]
    fn test_missing_boolean_coerces_to_zero() {
        let mut record = sample_record();
        record.remove("heartDisease");
        let vector = normalize(&record, false).expect("Should normalize");
        assert_eq!(vector.values()[3], FeatureValue::Num(0.0));
    }

    #[test]
    fn test_each_required_field_missing_fails() {
        let required = [
            ("gender", "gender"),
            ("age", "age"),
            ("everMarried", "ever_married"),
            ("workType", "work_type"),
            ("residenceType", "Residence_type"),
            ("avgGlucoseLevel", "avg_glucose_level"),
            ("bmi", "bmi"),
            ("smokingStatus", "smoking_status"),
        ];
        for (wire, canonical) in required {
            let mut record = sample_record();
            record.remove(wire);
            let err = normalize(&record, false).expect_err("Should fail");
            assert_eq!(err, NormalizeError::MissingField(canonical.to_string()));
        }
    }

    #[test]
    fn test_null_required_field_is_missing() {
        let mut record = sample_record();
        record.insert("bmi".into(), serde_json::Value::Null);
        let err = normalize(&record, false).expect_err("Should fail");
        assert_eq!(err, NormalizeError::MissingField("bmi".to_string()));
    }

    #[test]
    fn test_canonical_keys_pass_through() {
        let value = serde_json::json!({
            "gender": "Female",
            "age": 49,
            "hypertension": 0,
            "heart_disease": 0,
            "ever_married": "Yes",
            "work_type": "Self-employed",
            "Residence_type": "Rural",
            "avg_glucose_level": 171.23,
            "bmi": 34.4,
            "smoking_status": "smokes"
        });
        let record = value.as_object().expect("Should be an object").clone();

        let vector = normalize(&record, false).expect("Should normalize");
        assert_eq!(vector.values()[6], FeatureValue::Cat("Rural".into()));
    }

    #[test]
    fn test_camel_case_wins_over_canonical() {
        let mut record = sample_record();
        record.insert("work_type".into(), serde_json::json!("Govt_job"));
        let vector = normalize(&record, false).expect("Should normalize");
        assert_eq!(vector.values()[5], FeatureValue::Cat("Private".into()));
    }

    #[test]
    fn test_unknown_keys_ignored_when_lenient() {
        let mut record = sample_record();
        record.insert("smokingStatsu".into(), serde_json::json!("never smoked"));
        assert!(normalize(&record, false).is_ok());
    }

    #[test]
    fn test_unknown_keys_rejected_when_strict() {
        let mut record = sample_record();
        record.insert("smokingStatsu".into(), serde_json::json!("never smoked"));
        let err = normalize(&record, true).expect_err("Should fail");
        assert_eq!(err, NormalizeError::UnknownField("smokingStatsu".to_string()));
    }
}
