use std::io::BufReader;

use misc::{examine_parser_report, examine_transform_report, write_output};
use parse_args::parse_args;
use three_occ::{config::Config, context::Context};

mod misc;
mod parse_args;

const USAGE: &str = "Usage: three_occ [--bound=N] [--strict_preamble=true|false] <input.cnf> <output.cnf>";

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let mut config = Config::default();

    let args: Vec<String> = std::env::args().collect();

    let (input, output) = match parse_args(&args, &mut config) {
        Ok(paths) => paths,
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    };

    let mut ctx = Context::from_config(config);

    println!("c Reading DIMACS file from {input:?}");

    let file = match std::fs::File::open(&input) {
        Ok(file) => file,
        Err(e) => {
            println!("c Parse error: failed to open {input:?}: {e}");
            std::process::exit(2);
        }
    };

    let parse_report = match &input.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if *extension == "xz" => {
            ctx.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        #[cfg(not(feature = "xz"))]
        Some(extension) if *extension == "xz" => {
            println!("c Parse error: reading xz input requires the xz feature");
            std::process::exit(2);
        }

        _ => ctx.read_dimacs(BufReader::new(&file)),
    };

    examine_parser_report(parse_report);

    let report = match ctx.transform() {
        Ok(report) => report,

        Err(e) => {
            println!("c Transform error: {e}");
            std::process::exit(3);
        }
    };

    examine_transform_report(&report);

    let mut rendered = Vec::default();
    if let Err(e) = ctx.write_dimacs(&mut rendered) {
        println!("c Write error: {e}");
        std::process::exit(4);
    }

    if let Err(e) = write_output(&output, &rendered) {
        println!("c Write error: failed to write {output:?}: {e}");
        std::process::exit(4);
    }

    println!("c Wrote DIMACS file to {output:?}");
}
