use serde_json::{json, Map, Value};

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(output_format: &OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = Map::new();
            response.insert("success".into(), json!(true));
            response.insert("message".into(), json!(message));
            if let Some(Value::Object(extra)) = data {
                response.extend(extra);
            }
            println!("{}", serde_json::to_string_pretty(&Value::Object(response))?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Print an envelope: as-is in JSON mode, as a status line plus data in text mode
pub fn output_envelope(output_format: &OutputFormat, envelope: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(envelope)?);
        }
        OutputFormat::Text => {
            println!("{}", envelope_summary(envelope));
            if let Some(data) = envelope.get("data").filter(|d| !d.is_null()) {
                println!("{}", serde_json::to_string_pretty(data)?);
            }
        }
    }
    Ok(())
}

fn envelope_summary(envelope: &Value) -> String {
    let mark = if envelope["success"].as_bool().unwrap_or(false) { "✓" } else { "✗" };
    format!(
        "{} {} {}",
        mark,
        envelope["code"],
        envelope["message"].as_str().unwrap_or_default()
    )
}
