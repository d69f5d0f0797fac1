/*!
Configuration of a context.

All configuration for a context is contained within a [Config] structure, and each option is a [ConfigOption] which records the name of the option and the range of permitted values.

```rust
# use three_occ::config::Config;
let mut config = Config::default();

assert_eq!(config.occurrence_bound.value, 3);
assert!(!config.occurrence_bound.set(2));
assert!(config.occurrence_bound.set(5));
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// The number of occurrences of each atom in a gadget.
pub const GADGET_OCCURRENCES: usize = 3;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum number of occurrences of an atom which is left untouched by a transform.
    ///
    /// Atoms introduced by a transform always occur [GADGET_OCCURRENCES] times, and so this may not be lower.
    pub occurrence_bound: ConfigOption<usize>,

    /// Require the problem specification of a DIMACS input to match the formula read.
    pub strict_preamble: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            occurrence_bound: ConfigOption {
                name: "bound",
                min: GADGET_OCCURRENCES,
                max: usize::MAX,
                value: GADGET_OCCURRENCES,
            },

            strict_preamble: ConfigOption {
                name: "strict_preamble",
                min: false,
                max: true,
                value: false,
            },
        }
    }
}
