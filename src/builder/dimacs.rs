use crate::{
    builder::ParserInfo,
    context::Context,
    db::clause::ClauseDB,
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        literal::{is_literal, CLiteral},
    },
    types::err::{self},
};

use std::io::BufRead;

impl Context {
    /// Reads a DIMACS formula into the context.
    ///
    /// ```rust,ignore
    /// context.read_dimacs(BufReader::new(&file))?;
    /// ```
    ///
    /// ```rust
    /// # use three_occ::context::Context;
    /// # use three_occ::config::Config;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let dimacs = b"
    /// c An example formula
    /// p cnf 4 4
    ///  1  2       0
    /// -1  2  3    0
    ///        3 -4 0
    ///  4          0
    /// ";
    ///
    /// let info = the_context.read_dimacs(dimacs.as_slice()).unwrap();
    /// assert_eq!(info.expected_clauses, Some(4));
    /// assert_eq!(info.added_clauses, 4);
    /// assert_eq!(the_context.clause_db.clause(1), Some([-1, 2, 3].as_slice()));
    /// ```
    ///
    /// In detail:
    /// - Lines beginning with `c` are comments, and are skipped wherever they appear.
    /// - Blank lines are skipped.
    /// - The first other line must contain `p cnf`, otherwise the input is not DIMACS.
    ///   The counts which follow are advisory, unless the [strict_preamble](crate::config::Config::strict_preamble) option is set.
    /// - Each other line holds (at most) one clause: the literals up to a `0`.
    ///   Anything after the `0` is ignored, and a line without a `0` is ignored.
    /// - A line beginning with `%` ends the formula.
    /// - A token which is not a literal, or a clause without literals, is an error.
    ///
    /// If an error is returned the clause database of the context is unchanged.
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        //

        let strict = self.config.strict_preamble.value;

        let mut info = ParserInfo::default();
        let mut clause_db = ClauseDB::default();

        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();

        let mut line_counter = 0;

        // first phase, read until the formula begins
        'preamble_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => return Err(err::ParseError::MissingPreamble(line_counter + 1).into()),
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter + 1).into()),
            }

            match buffer.chars().next() {
                Some('c') => continue,

                _ if buffer.trim().is_empty() => continue,

                _ => {
                    let Some(index) = buffer.find("p cnf") else {
                        return Err(err::ParseError::MissingPreamble(line_counter).into());
                    };

                    let mut problem_details = buffer[index + "p cnf".len()..].split_whitespace();
                    let atom_count = problem_details.next().map(|s| s.parse::<usize>());
                    let clause_count = problem_details.next().map(|s| s.parse::<usize>());

                    match (atom_count, clause_count) {
                        (Some(Ok(atoms)), Some(Ok(clauses))) => {
                            info.expected_atoms = Some(atoms);
                            info.expected_clauses = Some(clauses);
                        }

                        _ if strict => return Err(err::ParseError::ProblemSpecification.into()),

                        _ => {
                            log::warn!(target: targets::PARSER, "Malformed problem specification at line {line_counter}");
                        }
                    }

                    break 'preamble_loop;
                }
            }
        }

        // second phase, read until the formula ends
        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ParseError::Line(line_counter + 1).into()),
            }

            match buffer.chars().next() {
                Some('%') => break 'formula_loop,
                Some('c') => continue,
                _ => {}
            }

            clause_buffer.clear();
            for token in buffer.split_whitespace() {
                let literal = match token.parse::<CLiteral>() {
                    Ok(0) => {
                        match clause_db.add_clause(clause_buffer.drain(..)) {
                            Ok(_) => info.added_clauses += 1,

                            Err(err::ClauseDBError::EmptyClause) => {
                                return Err(err::ParseError::EmptyClause(line_counter).into())
                            }

                            Err(e) => return Err(e.into()),
                        }
                        continue 'formula_loop;
                    }

                    Ok(int) if is_literal(int) => int,

                    _ => {
                        return Err(err::ParseError::Literal {
                            line: line_counter,
                            token: token.to_string(),
                        }
                        .into())
                    }
                };

                clause_buffer.push(literal);
            }

            if !clause_buffer.is_empty() {
                log::warn!(target: targets::PARSER, "Unterminated clause at line {line_counter} ignored");
            }
        }

        info.added_atoms = clause_db.max_atom() as usize;

        if strict {
            let expected_atoms = info.expected_atoms.unwrap_or_default();
            let expected_clauses = info.expected_clauses.unwrap_or_default();

            if expected_clauses != info.added_clauses || expected_atoms < info.added_atoms {
                return Err(err::ParseError::PreambleMismatch {
                    expected_atoms,
                    expected_clauses,
                    found_atoms: info.added_atoms,
                    found_clauses: info.added_clauses,
                }
                .into());
            }
        }

        log::info!(target: targets::PARSER, "Read {} clauses over {} atoms", info.added_clauses, info.added_atoms);

        match self.clause_db.clause_count() {
            0 => self.clause_db = clause_db,
            _ => {
                for clause in clause_db.clauses() {
                    self.clause_db.add_clause(clause.iter().copied())?;
                }
            }
        }

        Ok(info)
    }
}
