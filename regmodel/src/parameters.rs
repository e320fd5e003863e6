use std::ops::Index;

/// Named, read-only view of a parameter vector.
///
/// Keeps the parameter order of the model, e.g. `[("V", 5.), ("K", 2.)]` for
/// [MichaelisMenten](crate::MichaelisMenten).
#[derive(Clone, Debug, PartialEq)]
pub struct ModelParameters {
    names: &'static [&'static str],
    values: Vec<f64>,
}

impl ModelParameters {
    pub(crate) fn new(names: &'static [&'static str], values: Vec<f64>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Self { names, values }
    }

    /// Returns the value of parameter `name`.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.position(name).map(|idx| self.values[idx])
    }

    /// Parameter names in vector order.
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// Parameter values in vector order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over `(name, value)` pairs in vector order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.names.iter().copied().zip(self.values.iter().copied())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the model has no parameters.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| *n == name)
    }
}

impl Index<&str> for ModelParameters {
    type Output = f64;

    /// # Panics
    /// Panics if the model has no parameter `name`.
    fn index(&self, name: &str) -> &f64 {
        match self.position(name) {
            Some(idx) => &self.values[idx],
            None => panic!("no parameter {name} in {:?}", self.names),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mm_parameters() -> ModelParameters {
        ModelParameters::new(&["V", "K"], vec![5., 2.])
    }

    #[test]
    fn lookup() {
        let p = mm_parameters();
        assert_eq!(p.get("V"), Some(5.));
        assert_eq!(p.get("K"), Some(2.));
        assert_eq!(p.get("k"), None);
        assert_eq!(p["K"], 2.);
        assert_eq!(p.len(), 2);
        assert!(!p.is_empty());
    }

    #[test]
    fn order() {
        let p = mm_parameters();
        assert_eq!(p.names(), &["V", "K"]);
        assert_eq!(p.values(), &[5., 2.]);
        assert_eq!(p.iter().collect::<Vec<_>>(), vec![("V", 5.), ("K", 2.)]);
    }

    #[test]
    #[should_panic]
    fn index_unknown_name() {
        let p = mm_parameters();
        let _ = p["Vmax"];
    }
}
