use std::path::PathBuf;

use clap::Parser;
use rsa_compat::{Error, KeyBridge, DEFAULT_BITS, DEFAULT_EXPONENT};

#[derive(Parser)]
#[command(
    name = "rsa-keygen",
    about = "Generate an RSA keypair as privkey.pem and pubkey.pem",
    version
)]
struct Cli {
    /// Modulus size in bits
    #[arg(short, long, default_value_t = DEFAULT_BITS)]
    bits: usize,

    /// Public exponent
    #[arg(short, long, default_value_t = DEFAULT_EXPONENT)]
    exponent: u64,

    /// Directory to write the key files into (defaults to the current directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("rsa_compat={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    let dir = match cli.dir {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    };

    let bridge = KeyBridge::new();
    match bridge.write_key_files(&dir, cli.bits, cli.exponent) {
        Ok(files) => {
            println!();
            println!();
            println!("{}:", files.private_key_path.display());
            println!();
            println!("{}", files.private_key_pem);
            println!();
            println!("{}:", files.public_key_path.display());
            println!();
            println!("{}", files.public_key_pem);
        }
        Err(Error::AlreadyExists(path)) => {
            eprintln!("{} already exists", path.display());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
