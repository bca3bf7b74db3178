use clap::{Parser, Subcommand};
use mercanet::application::checkout::CheckoutService;
use mercanet::config::GatewayConfig;
use mercanet::domain::ports::ReferenceSourceBox;
use mercanet::domain::response::{PaymentResponse, ResponseStatus};
use mercanet::domain::response_codes::describe_response_code;
use mercanet::infrastructure::in_memory::SequentialReferenceSource;
use mercanet::interfaces::csv::envelope_writer::EnvelopeWriter;
use mercanet::interfaces::csv::order_reader::OrderReader;
use mercanet::telemetry::{LogFormat, init_tracing};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{error, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seal payment requests for the orders of a CSV file
    Sign {
        /// Orders CSV file (order_id,total,currency,email,language)
        input: PathBuf,

        /// Merchant configuration (JSON)
        #[arg(long)]
        config: PathBuf,

        /// Prefix of generated transaction references. Defaults to the current time in hex.
        #[arg(long)]
        reference_prefix: Option<String>,
    },
    /// Authenticate a gateway callback and print the decision as JSON
    Verify {
        /// Merchant configuration (JSON)
        #[arg(long)]
        config: PathBuf,

        /// The DATA field of the callback
        #[arg(long)]
        data: String,

        /// The SEAL field of the callback
        #[arg(long)]
        seal: String,
    },
}

#[derive(Serialize)]
struct VerifyReport<'a> {
    status: &'static str,
    response_code: Option<&'a str>,
    description: Option<&'static str>,
    transaction_reference: Option<&'a str>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(LogFormat::from_env());
    let cli = Cli::parse();

    match cli.command {
        Command::Sign {
            input,
            config,
            reference_prefix,
        } => sign(input, config, reference_prefix).await,
        Command::Verify { config, data, seal } => verify(config, &data, &seal),
    }
}

async fn sign(input: PathBuf, config: PathBuf, reference_prefix: Option<String>) -> Result<()> {
    let config = GatewayConfig::load(config).into_diagnostic()?;
    let prefix = reference_prefix.unwrap_or_else(time_prefix);
    let references: ReferenceSourceBox = Box::new(SequentialReferenceSource::new(prefix));
    let service = CheckoutService::new(config, references);

    let file = File::open(input).into_diagnostic()?;
    let reader = OrderReader::new(file);
    let stdout = io::stdout();
    let mut writer = EnvelopeWriter::new(stdout.lock());

    for order in reader.orders() {
        match order {
            Ok(order) => match service.prepare(&order).await {
                Ok(form) => writer.write_form(&order.order_id, &form).into_diagnostic()?,
                Err(e) => error!(order_id = %order.order_id, error = %e, "cannot seal order"),
            },
            Err(e) => warn!(error = %e, "cannot read order"),
        }
    }

    writer.finish().into_diagnostic()?;
    Ok(())
}

fn verify(config: PathBuf, data: &str, seal: &str) -> Result<()> {
    let config = GatewayConfig::load(config).into_diagnostic()?;
    let response = PaymentResponse::from_fields(config.secret_key, [("DATA", data), ("SEAL", seal)])
        .into_diagnostic()?;

    let status = response.status();
    let authenticated = status != ResponseStatus::AuthenticationFailed;
    let response_code = response.response_code().filter(|_| authenticated);
    let report = VerifyReport {
        status: match status {
            ResponseStatus::AuthenticationFailed => {
                warn!(data = response.data_string(), "seal mismatch, possibly forged");
                "authentication_failed"
            }
            ResponseStatus::Declined { .. } => "declined",
            ResponseStatus::Successful => "successful",
        },
        response_code,
        description: response_code.map(describe_response_code),
        transaction_reference: response
            .param("transactionReference")
            .ok()
            .filter(|_| authenticated),
    };

    println!("{}", serde_json::to_string(&report).into_diagnostic()?);
    Ok(())
}

fn time_prefix() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("{secs:x}")
}
