use crate::error::ClassifierError;
use nalgebra::DMatrix;
use std::collections::BTreeSet;

type ConfusionMatrix = DMatrix<usize>;

/// Evaluation of string-labeled predictions.
///
/// Rows of the confusion matrix are true classes, columns are predicted
/// classes, both in lexicographic order of the labels seen in either slice.
pub trait ClassificationMetrics {
    /// Computes the confusion matrix based on the true labels and predicted labels.
    ///
    /// # Arguments
    ///
    /// * `y_true` - The true labels.
    /// * `y_pred` - The predicted labels.
    ///
    /// # Errors
    ///
    /// Returns `LengthMismatch` when the slices differ in length.
    fn confusion_matrix(
        &self,
        y_true: &[String],
        y_pred: &[String],
    ) -> Result<ConfusionMatrix, ClassifierError> {
        if y_true.len() != y_pred.len() {
            return Err(ClassifierError::LengthMismatch {
                expected: y_true.len(),
                actual: y_pred.len(),
            });
        }

        let classes = y_true
            .iter()
            .chain(y_pred.iter())
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();

        let mut matrix = DMatrix::zeros(classes.len(), classes.len());

        for (y_t, y_p) in y_true.iter().zip(y_pred.iter()) {
            let row = classes.binary_search(&y_t.as_str());
            let col = classes.binary_search(&y_p.as_str());
            if let (Ok(row), Ok(col)) = (row, col) {
                matrix[(row, col)] += 1;
            }
        }

        Ok(matrix)
    }

    /// Fraction of predictions equal to the true label.
    fn accuracy(&self, y_true: &[String], y_pred: &[String]) -> Result<f64, ClassifierError> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;

        let correct: usize = matrix.diagonal().iter().sum();

        Ok(correct as f64 / y_true.len() as f64)
    }

    /// Macro-averaged precision over every class seen in either slice.
    ///
    /// Classes never predicted contribute zero.
    fn precision(&self, y_true: &[String], y_pred: &[String]) -> Result<f64, ClassifierError> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let num_classes = matrix.nrows();

        let mut precision_total = 0.0;
        for class in 0..num_classes {
            let tp = matrix[(class, class)];
            let fp = matrix.column(class).sum() - tp;

            if tp + fp > 0 {
                precision_total += tp as f64 / (tp + fp) as f64;
            }
        }

        Ok(precision_total / num_classes as f64)
    }

    /// Macro-averaged recall over every class seen in either slice.
    fn recall(&self, y_true: &[String], y_pred: &[String]) -> Result<f64, ClassifierError> {
        let matrix = self.confusion_matrix(y_true, y_pred)?;
        let num_classes = matrix.nrows();

        let mut recall_total = 0.0;
        for class in 0..num_classes {
            let tp = matrix[(class, class)];
            let fn_ = matrix.row(class).sum() - tp;

            if tp + fn_ > 0 {
                recall_total += tp as f64 / (tp + fn_) as f64;
            }
        }

        Ok(recall_total / num_classes as f64)
    }
}
