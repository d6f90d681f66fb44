//! Tests for the run module.

use super::*;
use myip::config::Cli;
use myip::result::AddressResult;

fn make_config(args: &[&str]) -> ValidatedConfig {
    let cli = Cli::try_parse_from_iter(std::iter::once("myip").chain(args.iter().copied())).unwrap();
    ValidatedConfig::from_cli(&cli).unwrap()
}

fn ethernet_report() -> Report {
    Report {
        ethernet: Some(AddressResult::new("192.168.1.10", "")),
        ..Report::default()
    }
}

mod run_error {
    use super::*;

    #[test]
    fn query_error_is_transparent() {
        let error = RunError::from(QueryError::NothingRequested);
        assert_eq!(error.to_string(), "No address category requested");
    }

    #[test]
    fn debug_format_works() {
        let error = RunError::from(QueryError::NothingRequested);
        assert!(format!("{error:?}").contains("NothingRequested"));
    }
}

mod render {
    use super::*;

    #[test]
    fn text_mode_prints_label_lines_between_blank_lines() {
        let output = render(&ethernet_report(), false).unwrap();
        assert_eq!(output, "\nEthernet (IPv4): 192.168.1.10\n\n");
    }

    #[test]
    fn json_mode_prints_one_object() {
        let output = render(&ethernet_report(), true).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["ethernet"]["ipv4"], "192.168.1.10");
        assert!(output.ends_with("}\n"));
    }
}

mod create_aggregator {
    use super::*;

    #[test]
    fn applies_configured_timeout() {
        let config = make_config(&["--timeout", "9"]);
        let aggregator = create_aggregator(&config);

        assert_eq!(
            aggregator.resolver().timeout(),
            std::time::Duration::from_secs(9)
        );
    }

    #[test]
    fn default_config_uses_default_timeout() {
        let config = make_config(&[]);
        let aggregator = create_aggregator(&config);

        assert_eq!(
            aggregator.resolver().timeout(),
            myip::config::defaults::timeout()
        );
    }
}
