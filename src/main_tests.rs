//! Tests for main.rs functionality

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::*;
    use clap::Parser;
    use netdiag::traceroute::visualize_unenriched;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(254), "254");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(65_534), "65,534");
        assert_eq!(format_count(4_294_967_296), "4,294,967,296");
    }

    #[test]
    fn test_format_subnet() {
        let info = calculate_ip_info("192.168.1.1/24").unwrap();
        let text = format_subnet(&info);

        assert!(text.starts_with("Analysis for 192.168.1.1/24\n"));
        assert!(text.contains("Network Address     192.168.1.0"));
        assert!(text.contains("First Usable Host   192.168.1.1"));
        assert!(text.contains("Last Usable Host    192.168.1.254"));
        assert!(text.contains("Usable Hosts        254"));
        assert!(text.contains("Wildcard Mask       0.0.0.255"));
    }

    #[test]
    fn test_format_subnet_without_usable_hosts() {
        let info = calculate_ip_info("10.0.0.0/31").unwrap();
        let text = format_subnet(&info);

        assert!(text.contains("First Usable Host   N/A"));
        assert!(text.contains("Last Usable Host    N/A"));
        assert!(text.contains("Broadcast Address   10.0.0.1"));
    }

    #[test]
    fn test_format_groups() {
        let groups = visualize_unenriched("1 192.168.1.1 1 ms\n2 * * *\n3 8.8.8.8 9 ms").unwrap();
        let text = format_groups(&groups);

        assert!(text.starts_with("Private/Unknown ASN\n"));
        assert!(text.contains("    1: 1 192.168.1.1 1 ms\n"));
        assert!(text.contains("    2: 3 8.8.8.8 9 ms\n"));
    }

    #[test]
    fn test_format_lookup() {
        let info = IpInfo {
            ip: "8.8.8.8".to_string(),
            asn: Some("AS15169 Google LLC".to_string()),
            isp: Some("Google LLC".to_string()),
            ..Default::default()
        };
        let text = format_lookup(&info, LookupProvider::IpApi);

        assert!(text.starts_with("Lookup Results for 8.8.8.8\n"));
        assert!(text.contains("ASN            AS15169 Google LLC"));
        assert!(text.contains("Location       N/A"));
        assert!(!text.contains("Organization"));
        assert!(text.ends_with("Data from ip-api.com.\n"));
    }

    #[test]
    fn test_args_parsing() {
        let args = Args::try_parse_from(["netdiag", "subnet", "10.0.0.0/8", "--json"]).unwrap();
        assert!(args.json);
        assert!(matches!(args.command, Command::Subnet { ref cidr } if cidr == "10.0.0.0/8"));

        let args = Args::try_parse_from([
            "netdiag",
            "-vv",
            "--delay-ms",
            "100",
            "trace",
            "hops.txt",
            "--provider",
            "cymru",
        ])
        .unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.delay_ms, Some(100));
        match args.command {
            Command::Trace {
                input,
                provider,
                no_enrich,
            } => {
                assert_eq!(input, Some(PathBuf::from("hops.txt")));
                assert_eq!(provider, ProviderArg::Cymru);
                assert!(!no_enrich);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_default_provider_arg() {
        let args = Args::try_parse_from(["netdiag", "lookup", "1.1.1.1"]).unwrap();
        match args.command {
            Command::Lookup { provider, .. } => {
                assert_eq!(LookupProvider::from(provider), LookupProvider::IpApi);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(
            LookupProvider::from(ProviderArg::Ipwho),
            LookupProvider::IpWhoIs
        );
    }

    #[test]
    fn test_missing_subcommand_rejected() {
        assert!(Args::try_parse_from(["netdiag"]).is_err());
        assert!(Args::try_parse_from(["netdiag", "subnet"]).is_err());
    }
}
