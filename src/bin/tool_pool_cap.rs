/// Pool Market Cap Tool
///
/// Reads a liquidity pool's fixed-layout record from the ledger and
/// prints the estimated aggregate value of its reserves.
///
/// Usage: cargo run --bin tool_pool_cap -- --pool <POOL_ADDRESS> [--rpc <URL>]

use clap::{Arg, Command};
use lockbot::configs::read_configs;
use lockbot::logger::{self, log, LogTag};
use lockbot::pool_price::get_pool_market_cap;
use lockbot::pricing::StaticPriceTable;
use lockbot::rpc::{self, parse_pubkey_string};
use std::process;

#[tokio::main]
async fn main() {
    logger::init();

    let matches = Command::new("Pool Market Cap")
        .version("1.0")
        .about("Estimate a pool's aggregate reserve value from its on-ledger record")
        .arg(
            Arg::new("pool")
                .short('p')
                .long("pool")
                .value_name("POOL_ADDRESS")
                .help("Pool account address to read")
                .required(true),
        )
        .arg(
            Arg::new("rpc")
                .short('r')
                .long("rpc")
                .value_name("RPC_URL")
                .help("Custom RPC URL (defaults to configs.json, then mainnet)")
                .required(false),
        )
        .get_matches();

    let pool_address = matches.get_one::<String>("pool").unwrap();
    let rpc_url = match matches.get_one::<String>("rpc") {
        Some(url) => url.clone(),
        None => match read_configs("configs.json") {
            Ok(configs) => configs.rpc_url,
            Err(_) => "https://api.mainnet-beta.solana.com".to_string(),
        },
    };

    rpc::init_rpc(&rpc_url);

    log(LogTag::System, "START", "Pool Market Cap Tool");
    log(LogTag::System, "INFO", &format!("Pool Address: {}", pool_address));
    log(LogTag::System, "INFO", &format!("RPC URL: {}", rpc_url));

    let pool_pubkey = match parse_pubkey_string(pool_address) {
        Ok(pubkey) => pubkey,
        Err(e) => {
            log(LogTag::System, "ERROR", &e);
            process::exit(1);
        }
    };

    let prices = StaticPriceTable::new();
    match get_pool_market_cap(&pool_pubkey, &prices).await {
        Ok(market_cap) => {
            log(LogTag::System, "SUCCESS", "Market cap estimate completed");

            println!("\n=== POOL MARKET CAP ===");
            println!("Pool Address: {}", pool_address);
            println!("Aggregate Value: {}", market_cap);
        }
        Err(e) => {
            log(LogTag::System, "ERROR", &format!("Market cap estimate failed: {}", e));
            process::exit(1);
        }
    }
}
