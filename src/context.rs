/*!
The context of a transform.

A context is a [configuration](crate::config) paired with a [clause database](crate::db::clause).

Typical use is to:
1. Build a context from some configuration.
2. Read a formula into the context, via [read_dimacs](Context::read_dimacs) or by adding clauses to the clause database.
3. [Transform](Context::transform) the formula.
4. Write the transformed formula, via [write_dimacs](Context::write_dimacs).

```rust
# use three_occ::context::Context;
# use three_occ::config::Config;
let mut the_context = Context::from_config(Config::default());

let dimacs = b"p cnf 1 4
1 0
1 0
1 0
-1 0
";

assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());

let report = the_context.transform().unwrap();
assert_eq!(report.chains.len(), 1);

let mut output = Vec::new();
assert!(the_context.write_dimacs(&mut output).is_ok());
assert_eq!(
    String::from_utf8(output).unwrap(),
    "p cnf 4 8\n1 0\n2 0\n3 0\n-4 0\n-1 2 0\n-2 3 0\n-3 4 0\n-4 1 0\n"
);
```

Contexts share nothing, so distinct formulas may be transformed in distinct contexts on distinct threads.
*/

use std::io::Write;

use crate::{
    config::Config,
    db::clause::ClauseDB,
    transform::{reduce_occurrences, TransformReport},
    types::err::{self},
};

/// A configuration and a formula.
#[derive(Clone, Debug, Default)]
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The formula of the context.
    pub clause_db: ClauseDB,
}

impl Context {
    /// A context with an empty formula.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            clause_db: ClauseDB::default(),
        }
    }

    /// Transforms the formula of the context so that no atom occurs more than the configured [bound](Config::occurrence_bound).
    ///
    /// If an error is returned the formula of the context is unchanged.
    pub fn transform(&mut self) -> Result<TransformReport, err::ErrorKind> {
        reduce_occurrences(&mut self.clause_db, self.config.occurrence_bound.value)
    }

    /// Writes the formula of the context in DIMACS form.
    pub fn write_dimacs(&self, writer: impl Write) -> std::io::Result<()> {
        self.clause_db.write_dimacs(writer)
    }
}
