use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::HashMap;
use std::ops::Index;

use super::feature_struct::*;
use crate::error::{BoostError, Result};


/// Struct `Sample` holds a batch sample with dense format.
/// Features are stored column by column,
/// so that the weak learner can scan a feature without striding.
///
/// A `Sample` always has at least one example and one feature.
/// The target may be empty for a sample used only for prediction.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a labeled sample from row-major data.
    /// `rows[i]` is the `i`-th example and `target[i]` is its label.
    ///
    /// ```
    /// use stumpboost::Sample;
    /// let rows = vec![vec![0.5, 1.0], vec![-1.0, 2.0]];
    /// let sample = Sample::from_rows(&rows, vec![1.0, -1.0]).unwrap();
    /// assert_eq!(sample.shape(), (2, 2));
    /// ```
    pub fn from_rows<R>(rows: &[R], target: Vec<f64>) -> Result<Self>
        where R: AsRef<[f64]>,
    {
        let mut sample = Self::from_rows_unlabeled(rows)?;

        if target.len() != sample.n_sample {
            return Err(BoostError::TargetLength {
                n_sample: sample.n_sample,
                n_target: target.len(),
            });
        }
        sample.target = target;
        Ok(sample)
    }


    /// Construct a sample without target labels.
    /// Such a sample can be passed to the prediction methods,
    /// but not to the training or margin-loss methods.
    pub fn from_rows_unlabeled<R>(rows: &[R]) -> Result<Self>
        where R: AsRef<[f64]>,
    {
        let n_sample = rows.len();
        if n_sample == 0 {
            return Err(BoostError::EmptySample);
        }

        let n_feature = rows[0].as_ref().len();
        if n_feature == 0 {
            return Err(BoostError::NoFeature);
        }

        let mut features = (1..=n_feature)
            .map(|k| Feature::new(format!("Feat. [{k}]")))
            .collect::<Vec<_>>();

        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n_feature {
                return Err(BoostError::RaggedRow {
                    row: i,
                    expected: n_feature,
                    got: row.len(),
                });
            }
            for (j, (feat, &x)) in features.iter_mut().zip(row).enumerate() {
                if !x.is_finite() {
                    return Err(BoostError::NonFiniteValue { row: i, feature: j });
                }
                feat.append(x);
            }
        }

        Ok(Self::from_features(features, Vec::new()))
    }


    /// Build a sample from already-validated columns.
    pub(super) fn from_features(features: Vec<Feature>, target: Vec<f64>)
        -> Self
    {
        let n_feature = features.len();
        let n_sample = features.first()
            .map(|feat| feat.len())
            .unwrap_or(0);
        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        Self { name_to_index, features, target, n_sample, n_feature, }
    }


    /// Read a CSV format file to `Sample` type.
    /// If `has_header` is `false`,
    /// the columns are named `Feat. [1]`, `Feat. [2]`, ...
    /// The target column must be chosen by [`Sample::set_target`].
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        let path = file.as_ref();
        let io_error = |source| BoostError::Io {
            path: path.to_path_buf(),
            source,
        };

        // Open the given `file`.
        let file = File::open(path).map_err(io_error)?;
        let mut lines = BufReader::new(file).lines().enumerate();

        let mut features: Vec<Feature> = Vec::new();
        if has_header {
            if let Some((_, line)) = lines.next() {
                features = line.map_err(io_error)?
                    .split(',')
                    .map(|name| Feature::new(name.trim()))
                    .collect::<Vec<_>>();
            }
        }

        // For each line of the file
        for (l, line) in lines {
            let line = line.map_err(io_error)?;
            if line.trim().is_empty() {
                continue;
            }

            let xs = line.split(',')
                .map(|x| {
                    let x = x.trim();
                    x.parse::<f64>()
                        .map_err(|_| BoostError::Parse {
                            line: l + 1,
                            value: x.to_string(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;

            // if the header does not exist,
            // construct a dummy header.
            if features.is_empty() {
                features = (1..=xs.len())
                    .map(|k| Feature::new(format!("Feat. [{k}]")))
                    .collect();
            }

            let row = features.first().map(|f| f.len()).unwrap_or(0);
            if xs.len() != features.len() {
                return Err(BoostError::RaggedRow {
                    row,
                    expected: features.len(),
                    got: xs.len(),
                });
            }
            for (j, (feat, x)) in features.iter_mut().zip(xs).enumerate() {
                if !x.is_finite() {
                    return Err(BoostError::NonFiniteValue { row, feature: j });
                }
                feat.append(x);
            }
        }

        if features.is_empty() {
            return Err(BoostError::NoFeature);
        }
        if features[0].is_empty() {
            return Err(BoostError::EmptySample);
        }

        Ok(Self::from_features(features, Vec::new()))
    }


    /// Returns a slice of type `f64`.
    /// The slice is empty if the target is not specified.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the value of `feature` for the `row`-th example.
    #[inline]
    pub fn value(&self, row: usize, feature: usize) -> f64 {
        self.features[feature][row]
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Result<Self> {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .ok_or_else(|| BoostError::UnknownColumn(target.to_string()))?;

        if self.n_feature == 1 {
            return Err(BoostError::NoFeature);
        }

        let target = self.features.remove(pos).into_target();
        self.target = target;
        self.n_feature -= 1;


        self.name_to_index = self.features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        Ok(self)
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Set the feature (column) names.
    /// Returns the old names.
    pub fn replace_names<S, T>(&mut self, names: T) -> Result<Vec<String>>
        where S: ToString,
              T: AsRef<[S]>,
    {
        let names = names.as_ref();

        if self.n_feature != names.len() {
            return Err(BoostError::RaggedRow {
                row: 0,
                expected: self.n_feature,
                got: names.len(),
            });
        }

        let old_names = names.iter()
            .zip(&mut self.features[..])
            .map(|(name, feature)| feature.replace_name(name.to_string()))
            .collect();

        self.name_to_index = self.features.iter()
            .map(|feature| feature.name().to_string())
            .enumerate()
            .map(|(i, name)| (name, i))
            .collect();
        Ok(old_names)
    }


    /// Returns the `idx`-th example as a row vector.
    pub fn row(&self, idx: usize) -> Vec<f64> {
        self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>()
    }


    /// Returns `true` if the target labels are specified.
    pub fn has_target(&self) -> bool {
        !self.target.is_empty()
    }


    fn target_is_specified(&self) -> Result<()> {
        if !self.has_target() {
            return Err(BoostError::MissingTarget);
        }
        if self.target.len() != self.n_sample {
            return Err(BoostError::TargetLength {
                n_sample: self.n_sample,
                n_target: self.target.len(),
            });
        }
        Ok(())
    }


    /// Check whether `self` is
    /// a training set for binary classification or not.
    /// Every label must be exactly `-1.0` or `+1.0`.
    pub fn is_valid_binary_instance(&self) -> Result<()> {
        // Check whether the target column is specified.
        self.target_is_specified()?;

        // Check whether the target values take +1 or -1.
        let invalid = self.target.iter()
            .copied()
            .enumerate()
            .find(|&(_, y)| y != 1.0 && y != -1.0);

        match invalid {
            Some((row, label)) => Err(BoostError::InvalidLabel { row, label }),
            None => Ok(()),
        }
    }
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;


    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name)
            .unwrap_or_else(|| panic!("The feature `{name}` does not exist"));
        &self.features[k]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_is_column_major() {
        let rows = vec![
            vec![  1.2, 0.5, -1.0,  2.0],
            vec![  0.1, 0.2,  0.3, -9.0],
            vec![-21.0, 2.0,  1.9,  7.1],
        ];
        let sample = Sample::from_rows(&rows, vec![1.0, -1.0, 1.0]).unwrap();

        assert_eq!(sample.shape(), (3, 4));
        assert_eq!(sample.value(2, 0), -21.0);
        assert_eq!(sample["Feat. [4]"].values(), &[2.0, -9.0, 7.1]);
        assert_eq!(sample.row(1), rows[1]);
    }

    #[test]
    fn rejects_malformed_rows() {
        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(matches!(
            Sample::from_rows_unlabeled(&empty),
            Err(BoostError::EmptySample)
        ));

        let no_feature = vec![Vec::<f64>::new()];
        assert!(matches!(
            Sample::from_rows_unlabeled(&no_feature),
            Err(BoostError::NoFeature)
        ));

        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            Sample::from_rows_unlabeled(&ragged),
            Err(BoostError::RaggedRow { row: 1, expected: 2, got: 1 })
        ));

        let nan = vec![vec![1.0, f64::NAN]];
        assert!(matches!(
            Sample::from_rows_unlabeled(&nan),
            Err(BoostError::NonFiniteValue { row: 0, feature: 1 })
        ));

        let rows = vec![vec![1.0], vec![2.0]];
        assert!(matches!(
            Sample::from_rows(&rows, vec![1.0]),
            Err(BoostError::TargetLength { n_sample: 2, n_target: 1 })
        ));
    }

    #[test]
    fn binary_instance_check() {
        let rows = vec![vec![1.0], vec![2.0], vec![3.0]];

        let sample = Sample::from_rows(&rows, vec![1.0, -1.0, 1.0]).unwrap();
        assert!(sample.is_valid_binary_instance().is_ok());

        let sample = Sample::from_rows(&rows, vec![1.0, 0.0, 1.0]).unwrap();
        assert!(matches!(
            sample.is_valid_binary_instance(),
            Err(BoostError::InvalidLabel { row: 1, .. })
        ));

        let sample = Sample::from_rows_unlabeled(&rows).unwrap();
        assert!(matches!(
            sample.is_valid_binary_instance(),
            Err(BoostError::MissingTarget)
        ));
    }

    #[test]
    fn replace_names_updates_lookup() {
        let rows = vec![vec![1.0, 2.0]];
        let mut sample = Sample::from_rows_unlabeled(&rows).unwrap();
        let old = sample.replace_names(["a", "b"]).unwrap();

        assert_eq!(old, vec!["Feat. [1]", "Feat. [2]"]);
        assert_eq!(sample["b"][0], 2.0);
        assert!(sample.replace_names(["a"]).is_err());
    }
}
