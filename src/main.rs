//! Token Buyer CLI
//!
//! Spends SOL on an SPL token and reports balances before and after.

use std::process::ExitCode;

use clap::Parser;
use token_buyer::{
	init_tracing, load_config_from, log_service_info, log_service_shutdown, log_wallet_ready,
	AcquireError, AssetReference, BuyerBuilder, Decimal,
};
use tracing::{error, warn};

#[derive(Debug, Parser)]
#[command(name = "token-buyer", version, about = "Buy SPL tokens using SOL")]
struct Cli {
	/// Mint address of the token to buy
	#[arg(long)]
	token: String,

	/// Amount of SOL to spend [default: trade.default_spend_amount]
	#[arg(long)]
	amount: Option<Decimal>,

	/// Configuration file, without extension
	#[arg(long, env = "BUYER_CONFIG", default_value = "config/config")]
	config: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
	let cli = Cli::parse();

	let settings = load_config_from(&cli.config)?;
	init_tracing(&settings.logging)?;
	log_service_info(&settings);

	let amount = cli.amount.unwrap_or(settings.trade.default_spend_amount);
	let target = AssetReference::from(cli.token);

	let buyer = BuyerBuilder::from_config(settings).build()?;
	log_wallet_ready(buyer.identity().public_address());

	let code = match buyer.buy(amount, &target).await {
		Ok(report) => {
			println!("Wallet:       {}", report.owner);
			println!("Token:        {}", report.target);
			println!("Spent:        {} SOL ({} lamports)", report.spend_amount, report.lamports);
			println!("Before:       {}", report.before);
			println!("After:        {}", report.after);
			println!("Token change: {}", report.token_delta().normalize());
			println!("Transaction:  {}", report.transaction_url);
			ExitCode::SUCCESS
		},
		Err(err) => {
			error!("Error during buy: {}", err);
			if let AcquireError::Indeterminate { .. } = err {
				warn!("Outcome unknown; check the wallet on-chain before retrying");
			}
			eprintln!("Buy failed: {}", err);
			ExitCode::FAILURE
		},
	};

	log_service_shutdown();
	Ok(code)
}
