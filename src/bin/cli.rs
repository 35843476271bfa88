//! geoquery CLI Client
//!
//! Sends a single lookup request to a running server and prints the reply.

use std::net::TcpStream;

use clap::{Parser, Subcommand};

use geoquery::protocol::{read_message, write_message};
use geoquery::Result;

/// geoquery CLI
#[derive(Parser, Debug)]
#[command(name = "geoquery-cli")]
#[command(about = "CLI for the geoquery lookup service")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:5555")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up an IP address
    Lookup {
        /// The IP address to resolve
        ip: String,
    },
}

fn main() {
    let args = Args::parse();

    let result = match args.command {
        Commands::Lookup { ip } => lookup(&args.server, &ip),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Send one `geoip` request and print the reply payload
fn lookup(server: &str, ip: &str) -> Result<()> {
    let mut stream = TcpStream::connect(server)?;

    let request = format!("geoip {}", ip);
    write_message(&mut stream, request.as_bytes())?;

    let reply = read_message(&mut stream)?;
    println!("{}", String::from_utf8_lossy(&reply));

    Ok(())
}
