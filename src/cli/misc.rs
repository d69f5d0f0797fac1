use std::path::Path;

use three_occ::{builder::ParserInfo, transform::TransformReport, types::err::ErrorKind};

/// Prints a summary of a parse, or exits if the parse failed.
pub fn examine_parser_report(parse_report: Result<ParserInfo, ErrorKind>) {
    match parse_report {
        Ok(info) => {
            match info.expected_atoms {
                Some(count) => println!("c Expected {count} atoms."),

                None => println!("c No preamble was found."),
            }

            println!("c Added    {} atoms.", info.added_atoms);

            if let Some(count) = info.expected_clauses {
                println!("c Expected {count} clauses.")
            }

            println!("c Added    {} clauses.", info.added_clauses);
        }
        Err(e) => {
            println!("c Parse error: {e}");
            std::process::exit(2);
        }
    }
}

pub fn examine_transform_report(report: &TransformReport) {
    println!("c Rewrote  {} atoms.", report.chains.len());
    println!("c Fresh    {} atoms.", report.fresh_atom_count());
    println!(
        "c Atoms    {} -> {}.",
        report.atoms_before, report.atoms_after
    );
    println!(
        "c Clauses  {} -> {}.",
        report.clauses_before, report.clauses_after
    );
}

/// Writes the rendered output to the path, removing any partial file if the write fails.
pub fn write_output(path: &Path, rendered: &[u8]) -> std::io::Result<()> {
    match std::fs::write(path, rendered) {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = std::fs::remove_file(path);
            Err(e)
        }
    }
}

#[cfg(test)]
mod misc_tests {
    use super::*;

    #[test]
    fn output_is_written() {
        let path = std::env::temp_dir().join(format!("three_occ_{}_written.cnf", std::process::id()));

        assert!(write_output(&path, b"p cnf 1 1\n1 0\n").is_ok());
        assert_eq!(std::fs::read(&path).unwrap(), b"p cnf 1 1\n1 0\n");

        assert!(std::fs::remove_file(&path).is_ok());
    }

    #[test]
    fn failed_write_leaves_no_file() {
        let path = std::env::temp_dir()
            .join(format!("three_occ_{}_missing", std::process::id()))
            .join("out.cnf");

        assert!(write_output(&path, b"p cnf 1 1\n1 0\n").is_err());
        assert!(!path.exists());
    }
}
