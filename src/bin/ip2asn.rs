//! ip2asn: look up the ASN announcing one or more IPv4 addresses.

use clap::Parser;
use ip2asn::{DatasetConfig, Encoding, IpQuery, RangeTable};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ip2asn")]
#[command(author = "Kaitu.io")]
#[command(version = "0.1.0")]
#[command(about = "Look up the ASN announcing IPv4 addresses", long_about = None)]
struct Cli {
    /// Dataset of low,high,label records (defaults to $IP2ASN_DATA or GeoIPASNum2.csv)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Dataset encoding: latin1 or utf8 (defaults to $IP2ASN_ENCODING or latin1)
    #[arg(short, long)]
    encoding: Option<Encoding>,

    /// Print one JSON object per address
    #[arg(short, long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Addresses to look up (dotted decimal or integer)
    #[arg(required = true)]
    ips: Vec<String>,
}

#[derive(Serialize)]
struct LookupOutput<'a> {
    ip: &'a str,
    point: u32,
    asn: Option<u32>,
    label: Option<&'a str>,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` if any address was invalid.
fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let mut config = DatasetConfig::from_env()?;
    if let Some(ref data) = cli.data {
        config.path = data.clone();
    }
    if let Some(encoding) = cli.encoding {
        config.encoding = encoding;
    }

    let table = config.open_table()?;

    let mut all_ok = true;
    for ip in &cli.ips {
        if let Err(e) = print_lookup(&table, ip, cli.json) {
            eprintln!("{} => error: {}", ip, e);
            all_ok = false;
        }
    }

    Ok(all_ok)
}

fn print_lookup(table: &RangeTable, ip: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let point = parse_query(ip).to_u32()?;
    let range = table.resolve(point);

    if json {
        let output = LookupOutput {
            ip,
            point,
            asn: range.and_then(|r| r.asn()),
            label: range.map(|r| r.label.as_str()),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        match range {
            Some(r) => println!("{} => {}", ip, r.label),
            None => println!("{} => None", ip),
        }
    }

    Ok(())
}

/// Bare integers are taken as precomputed address values.
fn parse_query(arg: &str) -> IpQuery {
    match arg.trim().parse::<u32>() {
        Ok(value) => IpQuery::Integer(value),
        Err(_) => IpQuery::from(arg),
    }
}
