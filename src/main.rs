//! # posprint CLI
//!
//! Command-line interface for ESC/POS receipt documents.
//!
//! ## Usage
//!
//! ```bash
//! # Encode a JSON document to a raw byte file
//! posprint encode receipt.json -o receipt.bin
//!
//! # Show the bytes as hex, with extended framing and a partial cut
//! posprint encode receipt.json --framing extended --cut partial --hex
//!
//! # Send a document to a spooled printer
//! posprint print receipt.json --printer TM-T20
//!
//! # Encode the built-in sample receipt
//! posprint demo --hex
//!
//! # List placeholder names usable as {name} in text
//! posprint chars
//! ```
//!
//! Set `RUST_LOG=debug` for encoder and spooler logging.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use posprint::{
    Document, DispatchConfig, Framing, PosError, ReceiptBuilder, SpoolTransport,
    elements::{BarcodeBuilder, BarcodeType, QrCodeBuilder},
    json_api::JsonDocument,
    protocol::{commands, special_chars, text::PrintStyle},
    transport::{Dispatched, dispatch},
};

/// posprint - ESC/POS receipt printer utility
#[derive(Parser, Debug)]
#[command(name = "posprint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a JSON document to ESC/POS bytes
    Encode {
        /// JSON document to encode
        input: PathBuf,

        /// Write bytes to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Override the document's framing policy
        #[arg(long, value_enum)]
        framing: Option<FramingArg>,

        /// Append a paper cut after the document
        #[arg(long, value_enum)]
        cut: Option<CutArg>,

        /// Print a hex dump instead of raw bytes
        #[arg(long)]
        hex: bool,
    },

    /// Encode a JSON document and send it to a printer
    Print {
        /// JSON document to print
        input: PathBuf,

        /// Printer name as known to the OS spooler
        #[arg(long)]
        printer: String,

        /// Encode nothing and send nothing
        #[arg(long)]
        dry_run: bool,

        /// Directory for spool files
        #[arg(long, value_name = "DIR")]
        spool_dir: Option<PathBuf>,
    },

    /// Encode a sample receipt
    Demo {
        /// Send the sample to this printer instead of stdout
        #[arg(long)]
        printer: Option<String>,

        /// Print a hex dump instead of raw bytes
        #[arg(long)]
        hex: bool,
    },

    /// List special-character placeholder names
    Chars,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FramingArg {
    Plain,
    Extended,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CutArg {
    Full,
    Partial,
}

impl CutArg {
    fn bytes(self) -> Vec<u8> {
        match self {
            CutArg::Full => commands::cut_full(),
            CutArg::Partial => commands::cut_partial(),
        }
    }
}

impl From<FramingArg> for Framing {
    fn from(arg: FramingArg) -> Self {
        match arg {
            FramingArg::Plain => Framing::plain(),
            FramingArg::Extended => Framing::extended(),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PosError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            output,
            framing,
            cut,
            hex,
        } => {
            let mut doc = load_document(&input)?;
            if let Some(framing) = framing {
                doc.set_framing(framing.into());
            }
            let mut bytes = doc.encode()?;
            if let Some(cut) = cut {
                bytes.extend(cut.bytes());
            }
            match output {
                Some(path) if !hex => {
                    fs::write(&path, &bytes)?;
                    println!("Wrote {} bytes to {}", bytes.len(), path.display());
                }
                Some(path) => fs::write(&path, hex_dump(&bytes))?,
                None => write_stdout(&bytes, hex)?,
            }
            Ok(())
        }

        Commands::Print {
            input,
            printer,
            dry_run,
            spool_dir,
        } => {
            let doc = load_document(&input)?;
            let mut config = DispatchConfig::from_env();
            if dry_run {
                config = config.suppress(true);
            }
            if let Some(dir) = spool_dir {
                config = config.spool_dir(dir);
            }
            print_document(&doc, &printer, &config)
        }

        Commands::Demo { printer, hex } => {
            let doc = demo_receipt()?;
            match printer {
                Some(printer) => print_document(&doc, &printer, &DispatchConfig::from_env()),
                None => Ok(write_stdout(&doc.encode()?, hex)?),
            }
        }

        Commands::Chars => {
            println!("Special characters (use as {{name}} in text):");
            for name in special_chars::names() {
                println!("  {}", name);
            }
            Ok(())
        }
    }
}

fn load_document(path: &Path) -> Result<Document, PosError> {
    let json = fs::read_to_string(path)?;
    let parsed: JsonDocument = serde_json::from_str(&json)?;
    Ok(parsed.to_document()?)
}

fn print_document(doc: &Document, printer: &str, config: &DispatchConfig) -> Result<(), PosError> {
    let mut transport = SpoolTransport::from_config(printer, config);

    match dispatch(doc, &mut transport, config)? {
        Dispatched::Suppressed => println!("Printing is disabled, nothing sent."),
        Dispatched::Sent { bytes } => println!("Sent {} bytes to {}", bytes, printer),
    }
    Ok(())
}

fn demo_receipt() -> Result<Document, PosError> {
    let barcode = BarcodeBuilder::new("4006381333931")
        .kind(BarcodeType::Ean13)
        .build()?;
    let qr = QrCodeBuilder::new("https://example.com/r/0042").build()?;

    Ok(ReceiptBuilder::new()
        .title("CHURRA MART")
        .feed(1)
        .item("Espresso", 2.5)
        .item("Croissant", 1.8)
        .item("Orange juice", 3.2)
        .item_styled("TOTAL {euro}", 7.5, [PrintStyle::BOLD])
        .feed(1)
        .element(barcode)
        .feed(1)
        .element(qr)
        .feed(1)
        .footer("Thank you!")
        .build())
}

fn write_stdout(bytes: &[u8], hex: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    if hex {
        stdout.write_all(hex_dump(bytes).as_bytes())?;
    } else {
        stdout.write_all(bytes)?;
    }
    stdout.flush()
}

/// 16 bytes per line, uppercase, space separated.
fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for line in bytes.chunks(16) {
        let hex: Vec<String> = line.iter().map(|b| format!("{:02X}", b)).collect();
        out.push_str(&hex.join(" "));
        out.push('\n');
    }
    out
}
