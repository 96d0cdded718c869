//! Runtime environment for the tree-walking interpreter.

use rustc_hash::FxHashMap;

/// Variable bindings and collected output for one interpreted run.
///
/// Variables are keyed by name; `Assign` writes them and `Variable` reads
/// them. This state is entirely separate from the compiled path's static
/// register bindings: the two execution modes share nothing.
///
/// Output is collected rather than printed so callers (and tests) can
/// observe `WRITELN` effects directly.
#[derive(Debug, Default)]
pub struct Environment {
    vars: FxHashMap<String, i64>,
    output: Vec<i64>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a variable's current value.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.vars.get(name).copied()
    }

    /// Assign a variable, creating it on first write.
    pub fn set(&mut self, name: &str, value: i64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Append a value to the output channel.
    pub fn write(&mut self, value: i64) {
        self.output.push(value);
    }

    /// Everything written so far, in order.
    pub fn output(&self) -> &[i64] {
        &self.output
    }

    /// Drain the output channel, leaving it empty.
    pub fn take_output(&mut self) -> Vec<i64> {
        std::mem::take(&mut self.output)
    }
}
