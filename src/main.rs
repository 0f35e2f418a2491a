use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pix_transfer::pix::{Amount, PixController, RemotePixProcessor, ResponseCode};
use pix_transfer::transport::FakeServer;

/// Confirm a Pix transfer against a simulated banking server and print the outcome.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Amount to transfer, in currency minor units
  #[arg(allow_negative_numbers = true)]
  amount: Amount,

  /// Destination Pix key
  key: String,

  /// Response code the simulated banking server answers with
  #[arg(long, default_value_t = ResponseCode::Success.as_str().to_string())]
  response_code: String,

  /// Simulate a banking server that cannot be reached
  #[arg(long)]
  unreachable: bool,
}

impl Cli {
  fn server(&self) -> FakeServer {
    if self.unreachable {
      FakeServer::unreachable()
    } else {
      FakeServer::responding_with(self.response_code.as_str())
    }
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .try_init()
    .map_err(|err| anyhow::anyhow!(err))?;

  let cli = Cli::parse();

  let controller = PixController::new(RemotePixProcessor::new(cli.server()));
  let message = controller.when_confirming_pix(cli.amount, &cli.key).await;
  println!("{}", message);

  Ok(())
}
