use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, ValueEnum};
use irods_core::Fill;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Format iRODS data object stats as mpistat rows",
    long_about = None
)]
pub struct Cli {
    /// file stats from iRODS (iquest export, first line is a header)
    #[arg(short = 'f', long = "input", default_value = "/tmp/iRodsData.txt")]
    pub input: PathBuf,

    /// group names and ids from `getent group`
    #[arg(short = 'g', long = "groups", default_value = "/tmp/groups.txt")]
    pub groups: PathBuf,

    /// name of output file
    #[arg(short = 'o', long = "output", default_value = "/tmp/iRodsFormatted.txt")]
    pub output: PathBuf,

    /// field delimiter used in the input
    #[arg(
        short = 'd',
        long,
        default_value = irods_core::transcode::DEFAULT_DELIMITER,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub delimiter: String,

    /// only report lines starting with one of these (repeatable)
    #[arg(
        short = 'p',
        long = "prefix",
        default_values_t = irods_core::transcode::DEFAULT_PREFIXES.map(String::from)
    )]
    pub prefixes: Vec<String>,

    /// report every line, ignoring --prefix
    #[arg(long)]
    pub all: bool,

    /// value written into columns with no data
    #[arg(long, value_enum, default_value_t = FillArg::Empty)]
    pub fill: FillArg,

    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FillArg {
    Empty,
    Zero,
}

impl From<FillArg> for Fill {
    fn from(f: FillArg) -> Self {
        match f {
            FillArg::Empty => Fill::Empty,
            FillArg::Zero => Fill::Zero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["irodsfmt"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("/tmp/iRodsData.txt"));
        assert_eq!(cli.groups, PathBuf::from("/tmp/groups.txt"));
        assert_eq!(cli.output, PathBuf::from("/tmp/iRodsFormatted.txt"));
        assert_eq!(cli.delimiter, "???");
        assert_eq!(cli.prefixes, ["/humgen/projects", "/humgen/teams"]);
        assert!(!cli.all);
        assert_eq!(cli.fill, FillArg::Empty);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "irodsfmt", "-f", "in.txt", "-g", "g.txt", "-o", "out.txt", "-d", ">>", "-p", "/a",
            "-p", "/b", "--fill", "zero",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("in.txt"));
        assert_eq!(cli.groups, PathBuf::from("g.txt"));
        assert_eq!(cli.output, PathBuf::from("out.txt"));
        assert_eq!(cli.delimiter, ">>");
        assert_eq!(cli.prefixes, ["/a", "/b"]);
        assert_eq!(Fill::from(cli.fill), Fill::Zero);
    }

    #[test]
    fn test_empty_delimiter_is_rejected() {
        assert!(Cli::try_parse_from(["irodsfmt", "-d", ""]).is_err());
    }
}
