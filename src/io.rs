use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;

use crate::errors::DataError;

/// Position of a course in the catalog. Also its row and column in the
/// similarity matrix.
pub type RowIndex = usize;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Course {
    pub name: String,
    pub url: String,
}

/// Dense square matrix of precomputed course-to-course similarity scores,
/// row-major. Entry (i, j) scores course i against course j; symmetry is not
/// assumed. The scoring method is opaque to this crate, the matrix is
/// produced by an offline job.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    dim: usize,
    scores: Vec<f64>,
}

impl SimilarityMatrix {
    pub fn new(dim: usize, scores: Vec<f64>) -> Result<Self, DataError> {
        if scores.len() != dim * dim {
            return Err(DataError::corrupt(format!(
                "similarity matrix has {} entries, expected {} for {} courses",
                scores.len(),
                dim * dim,
                dim
            )));
        }
        Ok(SimilarityMatrix { dim, scores })
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DataError> {
        let dim = rows.len();
        if let Some(bad_row) = rows.iter().position(|row| row.len() != dim) {
            return Err(DataError::corrupt(format!(
                "similarity matrix row {} has {} entries, expected {}",
                bad_row,
                rows[bad_row].len(),
                dim
            )));
        }
        let scores = rows.into_iter().flatten().collect();
        Ok(SimilarityMatrix { dim, scores })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// All scores for the given course against the whole catalog,
    /// self-similarity included.
    pub fn row(&self, index: RowIndex) -> &[f64] {
        &self.scores[index * self.dim..(index + 1) * self.dim]
    }
}

/// Read the course catalog artifact. Paths ending in `.csv`/`.tsv` are parsed
/// as tab-delimited text with a header, anything else as bincode.
pub fn read_catalog(path: &Path) -> Result<Vec<Course>, DataError> {
    if is_textual_artifact(path) {
        read_catalog_csv(path)
    } else {
        let reader = BufReader::new(open_artifact(path)?);
        bincode::deserialize_from(reader).map_err(|err| decode_failure(path, err))
    }
}

/// Read the similarity matrix artifact, with the same format dispatch as
/// [`read_catalog`].
pub fn read_similarity(path: &Path) -> Result<SimilarityMatrix, DataError> {
    if is_textual_artifact(path) {
        read_similarity_csv(path)
    } else {
        let reader = BufReader::new(open_artifact(path)?);
        bincode::deserialize_from(reader).map_err(|err| decode_failure(path, err))
    }
}

pub fn write_catalog(path: &Path, courses: &[Course]) -> Result<(), DataError> {
    let writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(writer, courses).map_err(|err| decode_failure(path, err))
}

pub fn write_similarity(path: &Path, similarity: &SimilarityMatrix) -> Result<(), DataError> {
    let writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(writer, similarity).map_err(|err| decode_failure(path, err))
}

fn read_catalog_csv(path: &Path) -> Result<Vec<Course>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(open_artifact(path)?);

    let mut courses: Vec<Course> = Vec::new();
    for result in reader.deserialize() {
        let course: Course = result.map_err(|err| decode_failure(path, err))?;
        courses.push(course);
    }
    Ok(courses)
}

fn read_similarity_csv(path: &Path) -> Result<SimilarityMatrix, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(open_artifact(path)?);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for result in reader.deserialize() {
        let row: Vec<f64> = result.map_err(|err| decode_failure(path, err))?;
        rows.push(row);
    }
    SimilarityMatrix::from_rows(rows)
}

fn is_textual_artifact(path: &Path) -> bool {
    matches!(
        path.extension().and_then(OsStr::to_str),
        Some("csv") | Some("tsv")
    )
}

fn open_artifact(path: &Path) -> Result<File, DataError> {
    File::open(path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            DataError::DataNotFound {
                path: path.display().to_string(),
            }
        } else {
            DataError::Io(err)
        }
    })
}

fn decode_failure(path: &Path, err: impl std::fmt::Display) -> DataError {
    DataError::corrupt(format!("{}: {}", path.display(), err))
}
