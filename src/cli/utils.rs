use serde_json::{json, Value};

use crate::cli::client::Envelope;
use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(Value::Object(fields)) = data {
                if let Some(obj) = response.as_object_mut() {
                    obj.extend(fields);
                }
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
            if let Some(Value::Object(fields)) = data {
                for (key, value) in fields {
                    match value {
                        Value::String(s) => println!("{}: {}", key, s),
                        other => println!("{}:\n{}", key, serde_json::to_string_pretty(&other)?),
                    }
                }
            }
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(
    output_format: &OutputFormat,
    message: &str,
    error_code: Option<&str>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(code) = error_code {
                response["code"] = json!(code);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => match error_code {
            Some(code) => eprintln!("Error [{}]: {}", code, message),
            None => eprintln!("Error: {}", message),
        },
    }
    Ok(())
}

/// Print a portal envelope; failures are printed then returned as errors
pub fn output_envelope(
    output_format: &OutputFormat,
    message: &str,
    key: &str,
    envelope: Envelope,
) -> anyhow::Result<()> {
    if !envelope.is_success() {
        output_error(output_format, &envelope.error_message(), envelope.error_code())?;
        anyhow::bail!("portal answered {}", envelope.status);
    }

    let payload = envelope.body.get(key).cloned().unwrap_or(Value::Null);
    output_success(output_format, message, Some(json!({ key: payload })))
}
