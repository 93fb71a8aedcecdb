use clap::Parser;
use dot11_cat::FrameParser;

/// `cat` for IEEE 802.11 management frames.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The IEEE 802.11 management frame to parse, hex encoded.
    #[clap(value_parser(clap::builder::NonEmptyStringValueParser::new()))]
    input: String,
    /// The frame ends with a 4 byte FCS, which is checked and stripped.
    #[clap(long)]
    fcs: bool,
}

fn main() {
    let args = Args::parse();

    let output = if args.fcs {
        FrameParser::parse_hex_with_fcs(&args.input)
    } else {
        FrameParser::parse_hex(&args.input)
    };

    match output {
        Ok(output) => print!("{output}"),
        Err(_) => {
            eprintln!("invalid IEEE 802.11 management frame");
            std::process::exit(1);
        }
    }
}
