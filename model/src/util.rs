use serde::de::Unexpected;
use serde_json::Value;

pub fn to_unexpected<'a>(value: Value) -> Unexpected<'a> {
    match value {
        Value::Null => Unexpected::Other("null"),
        Value::Bool(b) => Unexpected::Bool(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Unexpected::Signed(i);
            }

            if let Some(u) = n.as_u64() {
                return Unexpected::Unsigned(u);
            }

            Unexpected::Other("number")
        }
        Value::String(_) => Unexpected::Other("string"),
        Value::Array(_) => Unexpected::Other("array"),
        Value::Object(_) => Unexpected::Map,
    }
}
