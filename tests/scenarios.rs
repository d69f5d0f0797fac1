use std::collections::BTreeMap;

use three_occ::{config::Config, context::Context, transform::occurrences::occurrence_counts};

mod common;

fn context_with(dimacs: &str) -> Context {
    let mut ctx = Context::from_config(Config::default());
    assert!(ctx.read_dimacs(dimacs.as_bytes()).is_ok());
    ctx
}

fn transformed_dimacs(ctx: &Context) -> String {
    let mut output = Vec::default();
    assert!(ctx.write_dimacs(&mut output).is_ok());
    String::from_utf8(output).unwrap()
}

mod gadgets {
    use super::*;

    #[test]
    fn four_occurrences() {
        let mut ctx = context_with("p cnf 1 4\n1 0\n1 0\n1 0\n-1 0\n");

        let report = ctx.transform().unwrap();

        assert_eq!(report.chains.len(), 1);
        assert_eq!(report.chains[0].fresh_atoms(), 2..=4);
        assert_eq!(
            occurrence_counts(&ctx.clause_db),
            BTreeMap::from([(1, 3), (2, 3), (3, 3), (4, 3)])
        );

        assert_eq!(
            transformed_dimacs(&ctx),
            "p cnf 4 8
1 0
2 0
3 0
-4 0
-1 2 0
-2 3 0
-3 4 0
-4 1 0
"
        );
    }

    #[test]
    fn untouched_formula_is_written_as_read() {
        let dimacs = "p cnf 3 3
1 -2 0
2 -3 0
-1 3 0
";
        let mut ctx = context_with(dimacs);

        let report = ctx.transform().unwrap();

        assert!(report.chains.is_empty());
        assert_eq!(transformed_dimacs(&ctx), dimacs);
    }

    #[test]
    fn two_gadgets_share_no_atoms() {
        let mut ctx = context_with(
            "p cnf 3 5
1 2 0
1 2 0
-1 -2 3 0
1 -2 0
-3 0
",
        );

        let report = ctx.transform().unwrap();

        assert_eq!(report.chains.len(), 2);
        assert_eq!(report.chains[0].fresh_atoms(), 4..=6);
        assert_eq!(report.chains[1].fresh_atoms(), 7..=9);
        assert_eq!(report.atoms_after, 9);
        assert_eq!(report.clauses_after, 5 + 4 + 4);

        let counts = occurrence_counts(&ctx.clause_db);
        assert_eq!(counts[&3], 2);
        assert!(counts.values().all(|count| *count <= 3));
    }

    #[test]
    fn configured_bound() {
        let mut config = Config::default();
        assert!(config.occurrence_bound.set(4));
        let mut ctx = Context::from_config(config);

        assert!(ctx
            .read_dimacs("p cnf 2 5\n1 2 0\n1 2 0\n1 2 0\n1 2 0\n1 0\n".as_bytes())
            .is_ok());

        let report = ctx.transform().unwrap();

        assert_eq!(report.chains.len(), 1);
        assert_eq!(report.chains[0].origin, 1);
        assert_eq!(occurrence_counts(&ctx.clause_db)[&2], 4);
    }

    #[test]
    fn sparse_large_atom() {
        let mut ctx = context_with("p cnf 2147483647 2\n1 2147483647 0\n-1 0\n");

        let report = ctx.transform().unwrap();

        assert!(report.chains.is_empty());
        assert_eq!(report.atoms_after, 2147483647);
        assert_eq!(
            transformed_dimacs(&ctx),
            "p cnf 2147483647 2\n1 2147483647 0\n-1 0\n"
        );
    }

    #[test]
    fn large_atom_beside_a_gadget() {
        let mut ctx = context_with("p cnf 2147483643 5\n1 0\n1 0\n1 0\n-1 0\n2147483643 0\n");

        let report = ctx.transform().unwrap();

        assert_eq!(report.chains.len(), 1);
        assert_eq!(report.chains[0].fresh_atoms(), 2147483644..=2147483646);
        assert!(occurrence_counts(&ctx.clause_db).values().all(|count| *count <= 3));
    }

    #[test]
    fn too_few_fresh_atoms() {
        let mut ctx = context_with("p cnf 2147483646 5\n1 0\n1 0\n1 0\n-1 0\n2147483646 0\n");
        let before = ctx.clause_db.clone();

        assert!(ctx.transform().is_err());
        assert_eq!(ctx.clause_db, before);
    }

    #[test]
    fn unsatisfiable_stays_unsatisfiable() {
        let mut ctx = context_with(
            "p cnf 2 4
1 2 0
-1 2 0
1 -2 0
-1 -2 0
",
        );
        assert!(common::solve(&ctx.clause_db).is_none());

        assert!(ctx.transform().is_ok());

        assert!(common::solve(&ctx.clause_db).is_none());
    }
}

mod parsing {
    use super::*;

    use three_occ::types::err::{ErrorKind, ParseError};

    fn read(config: Config, dimacs: &str) -> Result<Context, ErrorKind> {
        let mut ctx = Context::from_config(config);
        ctx.read_dimacs(dimacs.as_bytes())?;
        Ok(ctx)
    }

    #[test]
    fn comments_and_trailing_tokens() {
        let ctx = read(
            Config::default(),
            "c leading comment
c another
p cnf 3 2
c inside the formula
1 -2 0 3 4
2 3 0
",
        )
        .unwrap();

        assert_eq!(ctx.clause_db.clause_count(), 2);
        assert_eq!(ctx.clause_db.clause(0), Some([1, -2].as_slice()));
    }

    #[test]
    fn missing_preamble() {
        assert_eq!(
            read(Config::default(), "c comment\n1 2 0\n").err(),
            Some(ErrorKind::Parse(ParseError::MissingPreamble(2)))
        );

        assert_eq!(
            read(Config::default(), "").err(),
            Some(ErrorKind::Parse(ParseError::MissingPreamble(1)))
        );
    }

    #[test]
    fn percent_ends_the_formula() {
        let ctx = read(Config::default(), "p cnf 2 1\n1 2 0\n%\n0\n").unwrap();

        assert_eq!(ctx.clause_db.clause_count(), 1);
    }

    #[test]
    fn malformed_token() {
        assert_eq!(
            read(Config::default(), "p cnf 2 1\n1 x 0\n").err(),
            Some(ErrorKind::Parse(ParseError::Literal {
                line: 2,
                token: "x".to_string()
            }))
        );
    }

    #[test]
    fn strict_preamble_mismatch() {
        let mut config = Config::default();
        assert!(config.strict_preamble.set(true));

        assert!(read(config.clone(), "p cnf 2 1\n1 2 0\n").is_ok());

        assert_eq!(
            read(config, "p cnf 1 1\n1 2 0\n-1 0\n").err(),
            Some(ErrorKind::Parse(ParseError::PreambleMismatch {
                expected_atoms: 1,
                expected_clauses: 1,
                found_atoms: 2,
                found_clauses: 2,
            }))
        );
    }

    #[test]
    fn failed_read_leaves_context_unchanged() {
        let mut ctx = context_with("p cnf 2 1\n1 2 0\n");
        let before = ctx.clause_db.clone();

        assert!(ctx.read_dimacs("p cnf 2 2\n1 0\n0\n".as_bytes()).is_err());

        assert_eq!(ctx.clause_db, before);
    }
}

mod compressed {
    use super::*;

    use std::io::{BufReader, Write};
    use xz2::{read::XzDecoder, write::XzEncoder};

    #[test]
    fn xz_input() {
        let mut encoder = XzEncoder::new(Vec::default(), 6);
        assert!(encoder
            .write_all(b"c compressed\np cnf 1 4\n1 0\n1 0\n1 0\n-1 0\n")
            .is_ok());
        let compressed = encoder.finish().unwrap();

        let mut ctx = Context::from_config(Config::default());
        let info = ctx
            .read_dimacs(BufReader::new(XzDecoder::new(compressed.as_slice())))
            .unwrap();
        assert_eq!(info.added_clauses, 4);

        assert!(ctx.transform().is_ok());
        assert!(transformed_dimacs(&ctx).starts_with("p cnf 4 8\n"));
    }
}
