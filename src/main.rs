use anyhow::Context;
use clap::Parser;
use shopping_cart::{console, telemetry, Session};
use tokio::io::{self, AsyncWriteExt, BufReader};

/// Console shopping cart with discounts and currency conversion
#[derive(Parser, Debug)]
#[command(name = "shopping_cart")]
struct Cli {
    /// Enable verbose logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the checkout receipt as JSON after checkout
    #[arg(long)]
    receipt_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    // Initialize session state
    let mut session = Session::new();

    let stdin = BufReader::new(io::stdin());
    let mut stdout = io::stdout();

    let receipt = console::run(&mut session, stdin, &mut stdout)
        .await
        .context("console I/O failed")?;

    if let (true, Some(receipt)) = (cli.receipt_json, receipt) {
        let json = serde_json::to_string_pretty(&receipt).context("serializing receipt")?;
        stdout.write_all(json.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    Ok(())
}
