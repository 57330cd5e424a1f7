use chrono::{TimeZone, Utc};
use clap::Args;
use serde_json::json;

use crate::auth::{generate_jwt, Claims};
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config;

#[derive(Args)]
pub struct TokenArgs {
    #[arg(long, help = "Tenant name")]
    pub tenant: String,
    #[arg(long, help = "User name")]
    pub user: String,
    #[arg(long, default_value = "full", help = "Access level (use 'root' for tenant administration)")]
    pub access: String,
    #[arg(long, help = "Token lifetime in hours (defaults to SECURITY_JWT_EXPIRY_HOURS)")]
    pub hours: Option<u64>,
}

pub fn handle(args: TokenArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let security = &config::config().security;
    let hours = args.hours.unwrap_or(security.jwt_expiry_hours);

    let claims = Claims::new(args.tenant, args.user, args.access, hours)?;
    let token = generate_jwt(&claims, &security.jwt_secret)?;

    match output_format {
        OutputFormat::Text => println!("{}", token),
        OutputFormat::Json => {
            let expires_at = Utc.timestamp_opt(claims.exp, 0).single();
            output_success(
                &output_format,
                "Token generated",
                Some(json!({
                    "token": token,
                    "tenant": claims.tenant,
                    "user": claims.user,
                    "access": claims.access,
                    "expires_at": expires_at,
                })),
            )?;
        }
    }

    Ok(())
}
