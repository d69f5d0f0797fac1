/*!
A database of clauses, stored in a compressed sparse row (CSR) layout.

All literals of all clauses are kept in a single growable array, and a second growable array records, for each clause, the index one past its final literal.
So, the literals of clause *i* are `literals[offsets[i - 1] .. offsets[i]]`, where `offsets[-1]` is taken to be 0.

```rust
# use three_occ::db::clause::ClauseDB;
let mut clause_db = ClauseDB::default();

assert!(clause_db.add_clause(vec![1, -2]).is_ok());
assert!(clause_db.add_clause(vec![2, 3, -4]).is_ok());

assert_eq!(clause_db.clause_count(), 2);
assert_eq!(clause_db.literal_count(), 5);
assert_eq!(clause_db.max_atom(), 4);

assert_eq!(clause_db.clause(1), Some([2, 3, -4].as_slice()));
assert_eq!(clause_db.offsets(), &[2, 5]);
```

# Invariants

1. The offsets are strictly increasing, and so no clause is empty.
2. There is one offset for each clause.
3. The number of literals is the final offset (or 0, if there are no clauses).
4. Every literal is a [literal](crate::structures::literal::is_literal), and so every atom is at most the maximum atom.

No clause or literal is removed from the database.
Literals may be rewritten in place (by a [gadget](crate::transform::gadget)), and clauses may be appended.

# Notes
- The maximum atom is not cached, as fresh atoms are introduced by rewriting literals in place, and so [max_atom](ClauseDB::max_atom) scans every literal.
*/

use std::io::Write;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::Clause,
        literal::{is_literal, CLiteral, Literal},
        valuation::Valuation,
    },
    types::err::{self},
};

/// The index of a clause in a clause database.
pub type ClauseKey = usize;

/// A clause database, with literals stored in a flat array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClauseDB {
    /// The index one past the final literal of each clause.
    offsets: Vec<usize>,

    /// The literals of every clause, in order.
    literals: Vec<CLiteral>,
}

impl ClauseDB {
    /// A clause database with space reserved for the given number of clauses and literals.
    pub fn with_capacity(clauses: usize, literals: usize) -> Self {
        ClauseDB {
            offsets: Vec::with_capacity(clauses),
            literals: Vec::with_capacity(literals),
        }
    }

    /// Appends a clause to the database, returning the key of the clause.
    ///
    /// An empty clause or a clause containing some integer which is not a literal is not added, and the database is unchanged.
    pub fn add_clause(
        &mut self,
        clause: impl IntoIterator<Item = CLiteral>,
    ) -> Result<ClauseKey, err::ClauseDBError> {
        let start = self.literals.len();

        for literal in clause {
            if !is_literal(literal) {
                self.literals.truncate(start);
                return Err(err::ClauseDBError::InvalidLiteral(literal));
            }
            self.literals.push(literal);
        }

        if self.literals.len() == start {
            return Err(err::ClauseDBError::EmptyClause);
        }

        let key = self.offsets.len();
        self.offsets.push(self.literals.len());
        log::trace!(target: targets::CLAUSE_DB, "Clause {key}: {}", self.literals[start..].as_dimacs(false));
        Ok(key)
    }

    /// Appends the clause `(-a b)`, i.e. the implication a → b.
    pub(crate) fn add_implication(&mut self, a: Atom, b: Atom) -> ClauseKey {
        self.literals.push(CLiteral::new(a, false));
        self.literals.push(CLiteral::new(b, true));

        let key = self.offsets.len();
        self.offsets.push(self.literals.len());
        key
    }

    /// A count of clauses in the database.
    pub fn clause_count(&self) -> usize {
        self.offsets.len()
    }

    /// A count of literals in the database, i.e. the sum of the size of each clause.
    pub fn literal_count(&self) -> usize {
        self.literals.len()
    }

    /// The largest atom in some clause of the database, or 0 if the database is empty.
    pub fn max_atom(&self) -> Atom {
        self.literals
            .iter()
            .map(|literal| literal.atom())
            .max()
            .unwrap_or(0)
    }

    /// The clause with the given key, if it exists.
    pub fn clause(&self, key: ClauseKey) -> Option<&[CLiteral]> {
        let end = *self.offsets.get(key)?;
        let start = match key {
            0 => 0,
            _ => self.offsets[key - 1],
        };
        Some(&self.literals[start..end])
    }

    /// An iterator over every clause in the database, in order.
    pub fn clauses(&self) -> impl Iterator<Item = &[CLiteral]> {
        let starts = std::iter::once(0).chain(self.offsets.iter().copied());
        starts
            .zip(self.offsets.iter().copied())
            .map(move |(start, end)| &self.literals[start..end])
    }

    /// The literals of every clause, in order.
    pub fn literals(&self) -> &[CLiteral] {
        &self.literals
    }

    /// The index one past the final literal of each clause.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Mutable access to literals, for rewriting the atom of a literal in place.
    ///
    /// The caller must write only [literals](crate::structures::literal::is_literal).
    pub(crate) fn literals_mut(&mut self) -> &mut [CLiteral] {
        &mut self.literals
    }

    /// Whether every clause in the database is satisfied on the given valuation.
    pub fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.clauses().all(|clause| clause.satisfied_on(valuation))
    }

    /// Writes the database in DIMACS form.
    ///
    /// The problem specification reflects the current state of the database.
    pub fn write_dimacs(&self, mut writer: impl Write) -> std::io::Result<()> {
        writeln!(writer, "p cnf {} {}", self.max_atom(), self.clause_count())?;
        for clause in self.clauses() {
            writeln!(writer, "{}", clause.as_dimacs(true))?;
        }
        writer.flush()
    }

    /// The database in DIMACS form.
    pub fn as_dimacs(&self) -> String {
        let mut dimacs_string = format!("p cnf {} {}\n", self.max_atom(), self.clause_count());
        for clause in self.clauses() {
            dimacs_string.push_str(clause.as_dimacs(true).as_str());
            dimacs_string.push('\n');
        }
        dimacs_string
    }
}
