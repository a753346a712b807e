use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Validate an IP allowlist and build the AWS WAF regional IPSet update command.",
    long_about = None
)]
#[command(group(ArgGroup::new("input").required(true).args(["filename", "ip_list"])))]
#[command(group(ArgGroup::new("ip_set").multiple(true).args(["ip_set_id", "change_token"])))]
pub struct Args {
    /// Name of file containing IPs/CIDRs/ranges, one per line
    #[arg(short = 'f', long)]
    pub filename: Option<PathBuf>,

    /// Comma separated list of IPs/CIDRs/ranges
    #[arg(short = 'l', long)]
    pub ip_list: Option<String>,

    /// IPSet ID of the WAF IP list
    #[arg(short = 'i', long = "ipset-id", requires = "region")]
    pub ip_set_id: Option<String>,

    /// Region that the WAF IPSet resides in
    #[arg(short = 'r', long, requires = "ip_set")]
    pub region: Option<String>,

    /// IPSet change token
    #[arg(short = 'c', long, requires = "region")]
    pub change_token: Option<String>,

    /// Do not retrieve the IPSet or filter networks it already contains
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Save the per-network report to a CSV file
    #[arg(long = "csv")]
    pub csv_file: Option<PathBuf>,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("wafipset").chain(args.iter().copied()))
    }

    #[test]
    fn test_args_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_exactly_one_input_required() {
        let error = parse(&[]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);

        let error = parse(&["-f", "list.txt", "-l", "8.8.8.8"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ArgumentConflict);

        assert!(parse(&["-l", "8.8.8.8"]).is_ok());
        assert!(parse(&["--filename", "list.txt"]).is_ok());
    }

    #[test]
    fn test_ip_set_id_requires_region() {
        let error = parse(&["-l", "8.8.8.8", "--ipset-id", "abc"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);

        let error = parse(&["-l", "8.8.8.8", "--change-token", "token"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_region_requires_ip_set_id_or_change_token() {
        let error = parse(&["-l", "8.8.8.8", "--region", "us-east-1"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);

        assert!(parse(&["-l", "8.8.8.8", "-r", "us-east-1", "-i", "abc"]).is_ok());
        assert!(parse(&["-l", "8.8.8.8", "-r", "us-east-1", "-c", "token"]).is_ok());

        let args = parse(&["-l", "8.8.8.8", "-r", "us-east-1", "-i", "abc", "-c", "t", "-n"]).unwrap();
        assert_eq!(args.ip_set_id.as_deref(), Some("abc"));
        assert_eq!(args.change_token.as_deref(), Some("t"));
        assert!(args.dry_run);
    }
}
