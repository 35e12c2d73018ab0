use std::collections::HashMap;

use crate::interpreter::value::Value;

/// Stores the variable bindings of one interpreter instance.
///
/// The environment is a single flat namespace mapping identifiers to values.
/// It is owned by the interpreter and lives as long as the instance does, so
/// bindings accumulate across submitted chunks. The math constants `PI` and
/// `E` are installed at construction as ordinary bindings; nothing protects
/// them from reassignment.
///
/// A binding may hold no value: a variable declared without an initializer
/// occupies its slot but is empty until assigned.
pub struct Environment {
    values: HashMap<String, Option<Value>>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates an environment pre-populated with `PI` and `E`.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::environment::Environment;
    ///
    /// let environment = Environment::new();
    ///
    /// assert!(environment.is_defined("PI"));
    /// assert!(environment.is_defined("E"));
    /// assert!(!environment.is_defined("x"));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut values = HashMap::new();
        values.insert("PI".to_string(), Some(Value::Number(std::f64::consts::PI)));
        values.insert("E".to_string(), Some(Value::Number(std::f64::consts::E)));
        Self { values }
    }

    /// Installs or overwrites a binding.
    ///
    /// Used by declarations; an existing binding of the same name is
    /// replaced. `None` declares the name with an empty slot.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `value`: The initial value, or `None` for a declaration without an
    ///   initializer.
    pub fn define(&mut self, name: &str, value: Option<Value>) {
        self.values.insert(name.to_string(), value);
    }

    /// Overwrites an existing binding.
    ///
    /// Returns `false` when the name is unbound; the caller raises the
    /// undefined-variable error with its line information. Assignment never
    /// creates a binding, declaration and assignment are distinct
    /// operations.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `value`: The value to store.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut environment = Environment::new();
    ///
    /// assert!(!environment.assign("x", Some(Value::Number(1.0))));
    ///
    /// environment.define("x", None);
    /// assert!(environment.assign("x", Some(Value::Number(1.0))));
    /// ```
    pub fn assign(&mut self, name: &str, value: Option<Value>) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            },
            None => false,
        }
    }

    /// Looks up a binding by name.
    ///
    /// The outer `Option` distinguishes unbound names from bound ones; the
    /// inner `Option` is empty for a variable declared without an
    /// initializer.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    ///
    /// # Returns
    /// The binding's slot if the name is bound, otherwise `None`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Option<Value>> {
        self.values.get(name)
    }

    /// Checks whether a name is bound, with or without a value.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}
