use clap::{Parser, Subcommand};
use elide_core::RetentionPolicy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "elide")]
#[command(version)]
#[command(about = "Lossy text compression with LLM-backed reconstruction")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Strip redundant characters and entropy-code the result
    Compress {
        /// Retention policy: letter, space, or combined
        #[arg(short, long)]
        policy: RetentionPolicy,

        /// Input text file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output blob file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// API key (falls back to the OPENAI_API_KEY environment variable)
        #[arg(long)]
        api_key: Option<String>,

        /// Override the oracle model
        #[arg(long)]
        model: Option<String>,

        /// Strip with the deterministic rules instead of the oracle
        #[arg(long)]
        offline: bool,
    },

    /// Entropy-decode a blob and reconstruct the elided characters
    ///
    /// Must be given the same policy the blob was compressed with; the blob
    /// itself does not record it.
    Decompress {
        /// Retention policy: letter, space, or combined
        #[arg(short, long)]
        policy: RetentionPolicy,

        /// Input blob file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output text file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// API key (falls back to the OPENAI_API_KEY environment variable)
        #[arg(long)]
        api_key: Option<String>,

        /// Override the oracle model
        #[arg(long)]
        model: Option<String>,
    },

    /// Report the byte and character size of a file
    Stats {
        /// File to measure
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["elide", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_compress() {
        let cli = Cli::try_parse_from(["elide", "compress", "--policy", "letter"]).unwrap();
        match cli.command {
            Commands::Compress {
                policy, offline, ..
            } => {
                assert_eq!(policy, RetentionPolicy::Letter);
                assert!(!offline);
            }
            _ => panic!("Expected Compress command"),
        }
    }

    #[test]
    fn test_cli_parse_compress_offline_with_files() {
        let cli = Cli::try_parse_from([
            "elide", "compress", "-p", "combined", "-i", "in.txt", "-o", "out.bin", "--offline",
        ])
        .unwrap();
        match cli.command {
            Commands::Compress {
                policy,
                input,
                output,
                offline,
                ..
            } => {
                assert_eq!(policy, RetentionPolicy::Combined);
                assert_eq!(input, Some(PathBuf::from("in.txt")));
                assert_eq!(output, Some(PathBuf::from("out.bin")));
                assert!(offline);
            }
            _ => panic!("Expected Compress command"),
        }
    }

    #[test]
    fn test_cli_parse_decompress() {
        let cli =
            Cli::try_parse_from(["elide", "decompress", "--policy", "space", "-i", "blob.bin"])
                .unwrap();
        match cli.command {
            Commands::Decompress { policy, input, .. } => {
                assert_eq!(policy, RetentionPolicy::Space);
                assert_eq!(input, Some(PathBuf::from("blob.bin")));
            }
            _ => panic!("Expected Decompress command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_policy() {
        let cli = Cli::try_parse_from(["elide", "compress", "--policy", "vowels"]);
        assert!(cli.is_err());
    }
}
