use serde_json::Value;

use crate::JsonMap;
use crate::error::PwError;

/// Typed accessor over a raw endpoint payload.
///
/// The three endpoint families name and encode the same concepts
/// differently (numbers as strings, booleans as stringified ints, renamed
/// keys), so every accessor takes a primary key plus an optional fallback
/// and applies one coercion rule. Entity constructors read as
/// field-resolution tables on top of this.
#[derive(Clone, Copy)]
pub struct Raw<'a>(&'a JsonMap);

impl<'a> Raw<'a> {
    pub fn new(data: &'a JsonMap) -> Self {
        Raw(data)
    }

    fn resolve(&self, primary: &str, fallback: Option<&str>) -> Result<(&'a str, &'a Value), PwError> {
        if let Some((key, value)) = self.0.get_key_value(primary) {
            return Ok((key.as_str(), value));
        }
        if let Some(fb) = fallback {
            if let Some((key, value)) = self.0.get_key_value(fb) {
                return Ok((key.as_str(), value));
            }
        }
        Err(PwError::missing(primary, fallback))
    }

    pub fn string(&self, primary: &str, fallback: Option<&str>) -> Result<String, PwError> {
        let (key, value) = self.resolve(primary, fallback)?;
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(PwError::malformed(key, format!("expected a string, got {other}"))),
        }
    }

    /// Integer field, whether the wire sent a JSON number or a numeric string.
    pub fn int(&self, primary: &str, fallback: Option<&str>) -> Result<i64, PwError> {
        let (key, value) = self.resolve(primary, fallback)?;
        coerce_int(key, value)
    }

    /// ID field: like [`Raw::int`] but rejects negative values.
    pub fn id(&self, primary: &str, fallback: Option<&str>) -> Result<u32, PwError> {
        let (key, value) = self.resolve(primary, fallback)?;
        coerce_id(key, value)
    }

    pub fn float(&self, primary: &str, fallback: Option<&str>) -> Result<f64, PwError> {
        let (key, value) = self.resolve(primary, fallback)?;
        match value {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| PwError::malformed(key, "number out of f64 range")),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| PwError::malformed(key, format!("non-numeric string {s:?}"))),
            other => Err(PwError::malformed(key, format!("expected a number, got {other}"))),
        }
    }

    /// Boolean field encoded as a bool, an integer, or a stringified
    /// integer (`"0"`/`"1"`). Any other string is a construction error.
    pub fn flag(&self, primary: &str, fallback: Option<&str>) -> Result<bool, PwError> {
        let (key, value) = self.resolve(primary, fallback)?;
        match value {
            Value::Bool(b) => Ok(*b),
            _ => coerce_int(key, value).map(|n| n != 0),
        }
    }

    /// Ordered list of IDs, coerced element-wise, source order preserved.
    pub fn id_list(&self, primary: &str, fallback: Option<&str>) -> Result<Vec<u32>, PwError> {
        let (key, value) = self.resolve(primary, fallback)?;
        let Value::Array(items) = value else {
            return Err(PwError::malformed(key, format!("expected an array, got {value}")));
        };
        items.iter().map(|item| coerce_id(key, item)).collect()
    }
}

fn coerce_int(key: &str, value: &Value) -> Result<i64, PwError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64().filter(|f| f.fract() == 0.0) {
                Ok(f as i64)
            } else {
                Err(PwError::malformed(key, format!("non-integral number {n}")))
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| PwError::malformed(key, format!("non-numeric string {s:?}"))),
        other => Err(PwError::malformed(key, format!("expected a number, got {other}"))),
    }
}

fn coerce_id(key: &str, value: &Value) -> Result<u32, PwError> {
    let n = coerce_int(key, value)?;
    u32::try_from(n).map_err(|_| PwError::malformed(key, format!("ID out of range: {n}")))
}
