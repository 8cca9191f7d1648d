use std::ops::Index;
use std::slice::Iter;

const BUF_SIZE: usize = 256;


/// Dense representation of a feature (a column of the sample).
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Feature name
    pub(crate) name: String,
    /// Feature values, one per example.
    pub(crate) sample: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature with `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            sample: Vec::with_capacity(BUF_SIZE),
        }
    }


    /// Construct a feature from its values.
    pub fn from_values<T: ToString>(name: T, sample: Vec<f64>) -> Self {
        Self { name: name.to_string(), sample, }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    pub(super) fn replace_name<S>(&mut self, name: S) -> String
        where S: ToString,
    {
        let name = name.to_string();
        std::mem::replace(&mut self.name, name)
    }


    /// Returns an iterator over feature values.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.sample.iter()
    }


    /// Returns the feature values as a slice.
    pub fn values(&self) -> &[f64] {
        &self.sample[..]
    }


    pub(crate) fn into_target(self) -> Vec<f64> {
        self.sample
    }


    /// Append an example to this feature.
    pub fn append(&mut self, x: f64) {
        self.sample.push(x);
    }


    /// Returns the number of items in `self.sample`.
    pub fn len(&self) -> usize {
        self.sample.len()
    }


    /// Returns `true` if `self.len()` is equals to `0`.
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }


    /// Returns the indices of the examples
    /// sorted by ascending order of the feature value.
    /// Ties keep the example order.
    pub fn sorted_indices(&self) -> Vec<usize> {
        let mut indices = (0..self.len()).collect::<Vec<_>>();
        indices.sort_by(|&i, &j| self.sample[i].total_cmp(&self.sample[j]));
        indices
    }
}


impl Index<usize> for Feature {
    type Output = f64;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.sample[idx]
    }
}
