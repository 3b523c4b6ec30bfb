//! Tree-shaped encodings (XML, YAML) of the nested export.
//!
//! Both encoders accept anything serializable so they work for the full
//! nested export and for one location's sub-mapping alike.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde::Serialize;
use serde_json::Value;

use codmeta_model::{MetaError, Result};

/// Encode a nested mapping as XML wrapped in a `<root>` element. Mapping
/// keys become elements, list values repeated sibling elements, null an
/// empty element.
pub fn to_xml<T: Serialize>(tree: &T) -> Result<String> {
    let value = serde_json::to_value(tree).map_err(|err| MetaError::Encode(err.to_string()))?;
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_element(&mut writer, "root", &value)?;
    let bytes = writer.into_inner();
    String::from_utf8(bytes).map_err(|err| MetaError::Encode(err.to_string()))
}

fn write_element(writer: &mut Writer<Vec<u8>>, tag: &str, value: &Value) -> Result<()> {
    match value {
        Value::Array(items) => {
            for item in items {
                write_element(writer, tag, item)?;
            }
            Ok(())
        }
        Value::Object(map) => {
            writer
                .write_event(Event::Start(BytesStart::new(tag)))
                .map_err(|err| MetaError::Encode(err.to_string()))?;
            for (key, child) in map {
                write_element(writer, key, child)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(tag)))
                .map_err(|err| MetaError::Encode(err.to_string()))
        }
        scalar => {
            writer
                .write_event(Event::Start(BytesStart::new(tag)))
                .map_err(|err| MetaError::Encode(err.to_string()))?;
            let text = scalar_text(scalar);
            if !text.is_empty() {
                writer
                    .write_event(Event::Text(BytesText::new(&text)))
                    .map_err(|err| MetaError::Encode(err.to_string()))?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(tag)))
                .map_err(|err| MetaError::Encode(err.to_string()))
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => unreachable!("handled by write_element"),
    }
}

/// Encode a nested mapping as YAML, insertion order preserved. The empty
/// mapping encodes as the empty string rather than a literal `{}` document.
pub fn to_yaml<T: Serialize>(tree: &T) -> Result<String> {
    let yaml = serde_yaml::to_string(tree).map_err(|err| MetaError::Encode(err.to_string()))?;
    if yaml.trim_start().starts_with("{}") {
        return Ok(String::new());
    }
    Ok(yaml)
}
