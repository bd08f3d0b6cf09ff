use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::{PyOSError, PyValueError};
use pyo3::prelude::*;

use crate::error::Error;
use crate::fp::{fp_growth_algorithm, into_levels, mine_with_config, MiningConfig};

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        match err {
            Error::Io { .. } => PyOSError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Mine lists of string items. Returns `(itemset, support ratio)` pairs
/// ordered by itemset size, then items.
#[pyfunction]
#[pyo3(name = "fp_growth")]
fn fp_growth_py(
    py: Python<'_>,
    transactions: Vec<Vec<String>>,
    min_support: f64,
) -> PyResult<Vec<(Vec<String>, f64)>> {
    let num_transactions = transactions.len() as f64;
    let config = MiningConfig::default().with_min_support_ratio(min_support);
    let patterns = py.allow_threads(|| mine_with_config::<String, _>(&transactions, &config))?;

    let result = into_levels(&patterns)
        .iter()
        .flat_map(|level| {
            level
                .iter()
                .map(|(itemset, support)| (itemset.to_vec(), support / num_transactions))
                .collect::<Vec<_>>()
        })
        .collect();

    Ok(result)
}

/// Mine a 0/1 matrix of transactions x items. Returns one array per itemset
/// size, each row an itemset of column indices.
#[pyfunction]
#[pyo3(name = "fp_growth_matrix")]
fn fp_growth_matrix_py<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
) -> PyResult<Vec<Bound<'py, PyArray2<usize>>>> {
    let frequent_levels = fp_growth_algorithm(transactions.as_array(), min_support)?;

    let mut result = Vec::new();

    for level in frequent_levels {
        if level.is_empty() {
            continue;
        }

        let itemset_size = level.itemset_size;
        let num_itemsets = level.len();
        let mut data = vec![0usize; num_itemsets * itemset_size];

        for (i, itemset) in level.iter_itemsets().enumerate() {
            for (j, &item) in itemset.iter().enumerate() {
                data[i * itemset_size + j] = item;
            }
        }

        let array = Array2::from_shape_vec((num_itemsets, itemset_size), data)
            .map_err(|e| Error::Shape(e.to_string()))?;

        result.push(array.into_pyarray(py));
    }

    Ok(result)
}

#[pymodule]
fn fpgrowth(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fp_growth_py, m)?)?;
    m.add_function(wrap_pyfunction!(fp_growth_matrix_py, m)?)?;
    Ok(())
}
