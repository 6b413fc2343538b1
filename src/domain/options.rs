//! Free-form option bags

use std::collections::HashMap;

/// A single option value.
///
/// Options carry no schema: strings, numbers, booleans, sequences and nested
/// mappings are all accepted. Consumers decide what a value means.
pub type OptionValue = serde_json::Value;

/// Option bag keyed by option name
pub type Options = HashMap<String, OptionValue>;
