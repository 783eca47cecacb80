//! Field decoders that never fail: a value of the wrong JSON type reads as absent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes a whole argument bag, falling back to empty params when it is not
/// an object.
pub(crate) fn params<P>(tool_name: &str, args: &Value) -> P
where
    P: DeserializeOwned + Default,
{
    match serde_json::from_value(args.clone()) {
        Ok(params) => params,
        Err(e) => {
            tracing::debug!(tool_name, error = %e, "Tool arguments are not an object; using empty params");
            P::default()
        }
    }
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

pub(crate) fn command<'de, D, C>(deserializer: D) -> Result<Option<C>, D::Error>
where
    D: Deserializer<'de>,
    C: From<String>,
{
    Ok(string(deserializer)?.map(C::from))
}
