//! Serialización JSON con indentación de 4 espacios, el formato de los
//! archivos que ya publica la aplicación.
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

pub fn to_pretty_vec<T>(value: &T) -> Result<Vec<u8>, serde_json::Error>
    where T: Serialize + ?Sized
{
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_four_space_indent() {
        let bytes = to_pretty_vec(&json!({"id": "x", "steps": [1]})).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "{\n    \"id\": \"x\",\n    \"steps\": [\n        1\n    ]\n}");
    }
}
