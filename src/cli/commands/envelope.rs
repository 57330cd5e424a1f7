use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::http::StatusCode;
use clap::{Subcommand, ValueEnum};
use serde_json::Value;

use crate::cli::utils::output_envelope;
use crate::cli::OutputFormat;
use crate::envelope::{Envelope, ErrorCatalog, ErrorTranslator, ResponseNormalizer};
use crate::error::TenantFault;

#[derive(Subcommand)]
pub enum EnvelopeCommands {
    #[command(about = "Normalize a JSON payload returned under a transport status")]
    Wrap {
        #[arg(long, default_value_t = 200, help = "Transport status the payload is returned under")]
        status: u16,
        #[arg(long, help = "Read the payload from a file instead of stdin")]
        file: Option<PathBuf>,
    },

    #[command(about = "Translate an error response by transport status")]
    Error {
        #[arg(long, help = "Transport status (4xx or 5xx)")]
        status: u16,
        #[arg(long, help = "Error detail text carried by the response")]
        detail: Option<String>,
    },

    #[command(about = "Translate a tenant fault")]
    Fault {
        #[arg(value_enum)]
        kind: FaultKind,
        #[arg(long, help = "Custom message overriding the default")]
        message: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FaultKind {
    NotFound,
    Inactive,
    Quota,
}

impl FaultKind {
    fn into_fault(self, message: Option<String>) -> TenantFault {
        match self {
            FaultKind::NotFound => TenantFault::NotFound { message },
            FaultKind::Inactive => TenantFault::Inactive { message },
            FaultKind::Quota => TenantFault::QuotaExceeded { message },
        }
    }
}

pub fn handle(cmd: EnvelopeCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let catalog = Arc::new(ErrorCatalog::default());

    match cmd {
        EnvelopeCommands::Wrap { status, file } => {
            let source = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf).context("failed to read stdin")?;
                    buf
                }
            };
            let value = wrap_payload(&ResponseNormalizer::new(catalog), &source, status)?;
            output_envelope(&output_format, &value)
        }
        EnvelopeCommands::Error { status, detail } => {
            let envelope = translate_error(&ErrorTranslator::new(catalog), status, detail)?;
            output_envelope(&output_format, &envelope.into_value())
        }
        EnvelopeCommands::Fault { kind, message } => {
            let envelope = ErrorTranslator::new(catalog).translate_fault(&kind.into_fault(message));
            output_envelope(&output_format, &envelope.into_value())
        }
    }
}

/// Empty input is treated as a `null` payload.
pub fn wrap_payload(normalizer: &ResponseNormalizer, source: &str, status: u16) -> anyhow::Result<Value> {
    let status = parse_status(status)?;
    let payload = if source.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(source).context("payload is not valid JSON")?
    };
    Ok(normalizer.normalize(payload, status))
}

pub fn translate_error(translator: &ErrorTranslator, status: u16, detail: Option<String>) -> anyhow::Result<Envelope> {
    let status = parse_status(status)?;
    if !translator.catalog().is_failure(status) {
        anyhow::bail!("status {} is not an error status", status.as_u16());
    }
    let detail = detail.map(Value::String);
    Ok(translator.translate_status(status, detail.as_ref()))
}

fn parse_status(status: u16) -> anyhow::Result<StatusCode> {
    StatusCode::from_u16(status).with_context(|| format!("invalid HTTP status {}", status))
}
