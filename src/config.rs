/// Vendor ids of recognized Ledger devices.
pub const DEFAULT_VENDOR_IDS: [u16; 2] = [0x2c97, 0x2581];
/// The HID interface carrying the APDU channel.
pub const LEDGER_INTERFACE: i32 = 0;
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(clap::Parser, Debug, Clone)]
#[command(
    name = "ledger-check",
    about = "Scan Ledger devices and display their app version and ledger id."
)]
pub struct Config {
    // `::std::vec::Vec` keeps clap from treating these as multi-value args:
    // each flag is one comma-separated string, empty meaning no filter.
    /// Filter by bus (first part of HID path), comma-separated hex.
    #[arg(short, long, default_value = "", hide_default_value = true, value_parser = parse_hex_list)]
    pub bus: ::std::vec::Vec<u64>,
    /// Filter by address (second part of HID path), comma-separated hex.
    #[arg(short, long, default_value = "", hide_default_value = true, value_parser = parse_hex_list)]
    pub address: ::std::vec::Vec<u64>,
    /// Filter by ledger id, comma-separated.
    #[arg(long, default_value = "", hide_default_value = true, value_parser = parse_list)]
    pub ledger_id: ::std::vec::Vec<String>,
    /// Set the log level (debug, info, warn, error)
    #[arg(
        short,
        long,
        default_value = "info",
        value_parser = ["debug", "info", "warn", "error"]
    )]
    pub log_level: String,
    #[arg(
        long = "vendor-id",
        value_delimiter = ',',
        value_parser = parse_hex_u16,
        default_values = ["2c97", "2581"],
        hide = true
    )]
    pub vendor_ids: Vec<u16>,
    /// Prints the version
    #[arg(long)]
    pub version: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the CLI version
    #[command(visible_alias = "v")]
    Version,
}

impl Config {
    pub fn wants_version(&self) -> bool {
        self.version || self.command == Some(Command::Version)
    }
}

fn parse_list(s: &str) -> Result<Vec<String>, String> {
    Ok(s.split(',').map(str::trim).filter(|p| !p.is_empty()).map(String::from).collect())
}

fn parse_hex_list(s: &str) -> Result<Vec<u64>, String> {
    parse_list(s)?
        .iter()
        .map(|p| u64::from_str_radix(p.trim_start_matches("0x"), 16).map_err(|e| format!("invalid hex {p:?}: {e}")))
        .collect()
}

fn parse_hex_u16(s: &str) -> Result<u16, String> {
    u16::from_str_radix(s.trim_start_matches("0x"), 16).map_err(|e| format!("invalid hex {s:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cfg = Config::try_parse_from(["ledger-check"]).unwrap();
        assert!(cfg.bus.is_empty());
        assert!(cfg.address.is_empty());
        assert!(cfg.ledger_id.is_empty());
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.vendor_ids, DEFAULT_VENDOR_IDS.to_vec());
        assert!(!cfg.wants_version());
    }

    #[test]
    fn test_filters_are_comma_separated_hex() {
        let cfg = Config::try_parse_from([
            "ledger-check",
            "-b",
            "1,0a",
            "--address",
            "1f",
            "--ledger-id",
            "foo-bar,baz-qux",
        ])
        .unwrap();
        assert_eq!(cfg.bus, vec![0x1, 0xa]);
        assert_eq!(cfg.address, vec![0x1f]);
        assert_eq!(cfg.ledger_id, vec!["foo-bar", "baz-qux"]);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Config::try_parse_from(["ledger-check", "-b", "xyz"]).is_err());
        assert!(Config::try_parse_from(["ledger-check", "-l", "trace"]).is_err());
    }

    #[test]
    fn test_version_flag_and_subcommand() {
        assert!(Config::try_parse_from(["ledger-check", "--version"]).unwrap().wants_version());
        assert!(Config::try_parse_from(["ledger-check", "version"]).unwrap().wants_version());
        assert!(Config::try_parse_from(["ledger-check", "v"]).unwrap().wants_version());
    }

    #[test]
    fn test_empty_filters_mean_no_filter() {
        let cfg = Config::try_parse_from([
            "ledger-check",
            "--bus",
            "",
            "--address",
            "",
            "--ledger-id",
            "",
        ])
        .unwrap();
        assert!(cfg.bus.is_empty());
        assert!(cfg.address.is_empty());
        assert!(cfg.ledger_id.is_empty());
    }

    #[test]
    fn test_empty_segments_are_ignored() {
        let cfg = Config::try_parse_from(["ledger-check", "-b", "1,,0a,", "--ledger-id", ",foo-bar"]).unwrap();
        assert_eq!(cfg.bus, vec![0x1, 0xa]);
        assert_eq!(cfg.ledger_id, vec!["foo-bar"]);
    }
}
