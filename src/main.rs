//! netdiag - subnet calculator and traceroute ASN visualizer.
//!
//! This is the command-line interface for the netdiag library.

#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use netdiag::asn::{AsnLookup, IpInfo, IpLookup, LookupProvider};
use netdiag::config::{timing, TimingConfig};
use netdiag::enrichment::HopEnricher;
use netdiag::subnet::{calculate_ip_info, SubnetInfo};
use netdiag::traceroute::{visualize, visualize_unenriched, HopGroup};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncReadExt;

/// Command-line arguments for the diagnostics tool.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Subnet calculator and traceroute ASN visualizer",
    long_about = None
)]
struct Args {
    #[clap(subcommand)]
    command: Command,

    /// Output results in JSON format
    #[clap(long, global = true)]
    json: bool,

    /// Enable verbose output (use -vv for trace logging)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Wait before each uncached ASN lookup in milliseconds
    #[clap(long, global = true)]
    delay_ms: Option<u64>,

    /// Timeout for lookup requests in milliseconds
    #[clap(long, global = true)]
    timeout_ms: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate subnet details for an IP/prefix (e.g., 192.168.1.1/24)
    Subnet {
        /// Address and prefix length
        cidr: String,
    },
    /// Group traceroute/tracert output by autonomous system
    Trace {
        /// File containing traceroute output (reads stdin when omitted)
        input: Option<PathBuf>,

        /// Lookup provider
        #[clap(long, value_enum, default_value_t = ProviderArg::IpApi)]
        provider: ProviderArg,

        /// Skip ASN lookups and only list the parsed hops
        #[clap(long)]
        no_enrich: bool,
    },
    /// Look up ASN, ISP and location for an IP address or hostname
    Lookup {
        /// IP address or hostname
        query: String,

        /// Lookup provider
        #[clap(long, value_enum, default_value_t = ProviderArg::IpApi)]
        provider: ProviderArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ProviderArg {
    IpApi,
    Ipwho,
    Cymru,
}

impl From<ProviderArg> for LookupProvider {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::IpApi => LookupProvider::IpApi,
            ProviderArg::Ipwho => LookupProvider::IpWhoIs,
            ProviderArg::Cymru => LookupProvider::Cymru,
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = netdiag::logging::init_logging(args.verbose) {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    // Lookups are strictly sequential, so one thread is all we need
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to create Tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(async_main(args)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn async_main(args: Args) -> Result<()> {
    apply_timing_overrides(&args);

    match &args.command {
        Command::Subnet { cidr } => {
            let info = calculate_ip_info(cidr.trim())?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print!("{}", format_subnet(&info));
            }
        }
        Command::Trace {
            input,
            provider,
            no_enrich,
        } => {
            let data = read_input(input.as_ref()).await?;
            let groups = if *no_enrich {
                visualize_unenriched(&data)?
            } else {
                let provider = LookupProvider::from(*provider);
                if !args.json {
                    println!("Performing ASN lookups via {}...\n", provider);
                }
                let enricher = HopEnricher::new(AsnLookup::new(provider)?);

                tokio::select! {
                    result = visualize(&data, &enricher) => result?,
                    _ = tokio::signal::ctrl_c() => anyhow::bail!("Interrupted"),
                }
            };

            if args.json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                print!("{}", format_groups(&groups));
            }
        }
        Command::Lookup { query, provider } => {
            let provider = LookupProvider::from(*provider);
            let info = AsnLookup::new(provider)?.lookup(query.trim()).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print!("{}", format_lookup(&info, provider));
            }
        }
    }

    Ok(())
}

/// Install CLI timing overrides, if any were given
fn apply_timing_overrides(args: &Args) {
    if args.delay_ms.is_none() && args.timeout_ms.is_none() {
        return;
    }

    let mut config = TimingConfig::default();
    if let Some(ms) = args.delay_ms {
        config.lookup_delay = Duration::from_millis(ms);
    }
    if let Some(ms) = args.timeout_ms {
        config.http_timeout = Duration::from_millis(ms);
    }

    if timing::set_config(config).is_err() {
        tracing::warn!("timing configuration already set; ignoring overrides");
    }
}

/// Read traceroute text from a file, or stdin when no path is given
async fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Could not read {}", path.display())),
        None => {
            let mut data = String::new();
            tokio::io::stdin()
                .read_to_string(&mut data)
                .await
                .context("Could not read stdin")?;
            Ok(data)
        }
    }
}

/// Format a host count with thousands separators
fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render subnet details as aligned text
fn format_subnet(info: &SubnetInfo) -> String {
    let usable = |addr: std::net::Ipv4Addr| {
        if info.has_usable_hosts() {
            addr.to_string()
        } else {
            "N/A".to_string()
        }
    };

    let rows = [
        ("Network Address", info.network.to_string()),
        ("Subnet Mask", info.mask.to_string()),
        ("Broadcast Address", info.broadcast.to_string()),
        ("First Usable Host", usable(info.first_usable_host)),
        ("Last Usable Host", usable(info.last_usable_host)),
        ("Total Hosts", format_count(info.total_hosts)),
        ("Usable Hosts", format_count(info.usable_hosts)),
        ("Wildcard Mask", info.wildcard_mask.to_string()),
    ];

    let mut out = format!("Analysis for {}\n", info.cidr);
    for (label, value) in rows {
        let _ = writeln!(out, "  {:<20}{}", label, value);
    }
    out
}

/// Render hop groups, numbering hops by their position in the whole trace
fn format_groups(groups: &[HopGroup]) -> String {
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", group.asn);
        if let Some(org) = &group.org {
            let _ = writeln!(out, "  {}", org);
        }
        for hop in &group.hops {
            let _ = writeln!(
                out,
                "    {}: {}",
                hop.hop.sequence_index + 1,
                hop.hop.original_line
            );
        }
    }
    out
}

/// Render a lookup result, skipping fields the provider left empty
fn format_lookup(info: &IpInfo, provider: LookupProvider) -> String {
    let rows = [
        ("IP Address", Some(info.ip.clone())),
        ("ASN", info.asn.clone()),
        ("ISP", info.isp.clone()),
        ("Organization", info.org.clone()),
        ("Location", Some(info.location().unwrap_or_else(|| "N/A".to_string()))),
        (
            "Coordinates",
            Some(info.coordinates().unwrap_or_else(|| "N/A".to_string())),
        ),
    ];

    let mut out = format!("Lookup Results for {}\n", info.ip);
    for (label, value) in rows {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            let _ = writeln!(out, "  {:<15}{}", label, value);
        }
    }
    let _ = writeln!(out, "\nData from {}.", provider);
    out
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod main_tests;
