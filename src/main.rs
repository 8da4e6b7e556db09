use std::error::Error;
use std::io::{self, BufRead};

use clap::{Parser, Subcommand};
use log::LevelFilter;

use adaptive_arithmetic_coding::{Alphabet, EncodedValue, Precision, Session};

#[derive(Parser)]
#[command(name = "adaptive-ac", version, about = "Adaptive arithmetic coder")]
struct Cli {
    #[arg(short, long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Fractional decimal digits for interval arithmetic. Sized to the
    /// message when omitted.
    #[arg(short, long)]
    precision: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a message, decode it again and print statistics.
    Encode {
        /// Message to encode; read from stdin when omitted.
        message: Option<String>,
    },
    /// Decode a value produced by `encode`.
    Decode {
        #[arg(short, long)]
        alphabet: String,
        #[arg(short, long)]
        length: usize,
        value: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();

    match cli.command {
        Commands::Encode { message } => {
            let message = match message {
                Some(message) => message,
                None => read_line()?,
            };
            let symbols: Vec<char> = message.chars().collect();
            let session = match cli.precision {
                Some(digits) => Session::from_message(&symbols, Precision::new(digits))?,
                None => Session::sized_for(&symbols)?,
            };

            println!("Input message to encode: {message}");
            println!("Precision: {} digits", session.precision().digits());

            let report = session.round_trip(&symbols)?;
            let decoded: String = report.decoded.iter().collect();
            println!("Encoded message (one decimal number): {}", report.value);
            println!("Decoded message: {decoded}");
            println!(
                "Input message is equal to decoded message: {}",
                report.round_trip
            );
            println!("Size of input message (in bits): {}", report.input_bits);
            println!("Size of encoded message (in bits): {}", report.encoded_bits);
            println!("Compression ratio: {:.3}", report.ratio());
        }
        Commands::Decode {
            alphabet,
            length,
            value,
        } => {
            let alphabet = Alphabet::from_text(&alphabet)?;
            let precision = match cli.precision {
                Some(digits) => Precision::new(digits),
                None => Precision::sufficient_for(length, alphabet.len()),
            };
            let value: EncodedValue = value.parse()?;
            let session = Session::new(alphabet, precision);
            let decoded: String = session.decode(&value, length)?.into_iter().collect();
            println!("{decoded}");
        }
    }

    Ok(())
}

fn read_line() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
