use hashbrown::HashMap;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::errors::DataError;
use crate::io::{self, Course, RowIndex, SimilarityMatrix};

/// In-memory store for the recommender: the course catalog, the similarity
/// matrix aligned to its row order, and a name lookup built at load time.
///
/// The catalog and the matrix are produced independently by the offline job,
/// so their alignment is validated here once instead of being trusted on
/// every query. Immutable after construction, safe to share across threads
/// by reference.
pub struct CourseIndex {
    courses: Vec<Course>,
    similarity: SimilarityMatrix,
    name_to_row: HashMap<String, RowIndex>,
}

impl CourseIndex {
    /// Load both artifacts and bundle them into a validated index.
    pub fn new(catalog_path: &str, similarity_path: &str) -> Result<Self, DataError> {
        let start_time = Instant::now();
        let courses = io::read_catalog(Path::new(catalog_path))?;
        let similarity = io::read_similarity(Path::new(similarity_path))?;
        let index = Self::from_parts(courses, similarity)?;
        info!(
            "loaded {} courses and their similarity matrix: {} micros",
            index.len(),
            start_time.elapsed().as_micros()
        );
        Ok(index)
    }

    pub fn from_parts(
        courses: Vec<Course>,
        similarity: SimilarityMatrix,
    ) -> Result<Self, DataError> {
        if similarity.dim() != courses.len() {
            return Err(DataError::corrupt(format!(
                "similarity matrix is {}x{} but the catalog has {} courses",
                similarity.dim(),
                similarity.dim(),
                courses.len()
            )));
        }

        let mut name_to_row: HashMap<String, RowIndex> = HashMap::with_capacity(courses.len());
        for (row, course) in courses.iter().enumerate() {
            // Duplicate names resolve to their first catalog row.
            name_to_row.entry(course.name.clone()).or_insert(row);
        }

        Ok(CourseIndex {
            courses,
            similarity,
            name_to_row,
        })
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Resolve a course name to its catalog row. Case-sensitive exact match.
    pub fn row_of(&self, name: &str) -> Option<RowIndex> {
        self.name_to_row.get(name).copied()
    }

    pub fn course(&self, row: RowIndex) -> &Course {
        &self.courses[row]
    }

    /// Similarity scores of the given course against the whole catalog, in
    /// catalog row order.
    pub fn similarities(&self, row: RowIndex) -> &[f64] {
        self.similarity.row(row)
    }
}

#[cfg(test)]
mod course_index_test {
    use super::*;

    fn course(name: &str) -> Course {
        Course {
            name: name.to_string(),
            url: format!("https://example.org/{}", name),
        }
    }

    #[test]
    fn should_reject_misaligned_artifacts() {
        let courses = vec![course("a"), course("b"), course("c")];
        let similarity = SimilarityMatrix::from_rows(vec![vec![1.0, 0.2], vec![0.2, 1.0]]).unwrap();

        let result = CourseIndex::from_parts(courses, similarity);

        assert!(matches!(result, Err(DataError::Corrupt { .. })));
    }

    #[test]
    fn should_resolve_duplicate_names_to_first_row() {
        let courses = vec![course("a"), course("b"), course("a")];
        let similarity = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.2, 0.3],
            vec![0.2, 1.0, 0.4],
            vec![0.3, 0.4, 1.0],
        ])
        .unwrap();

        let index = CourseIndex::from_parts(courses, similarity).unwrap();

        assert_eq!(Some(0), index.row_of("a"));
        assert_eq!(Some(1), index.row_of("b"));
    }

    #[test]
    fn should_match_names_case_sensitively() {
        let courses = vec![course("Rust"), course("rust")];
        let similarity = SimilarityMatrix::from_rows(vec![vec![1.0, 0.9], vec![0.9, 1.0]]).unwrap();

        let index = CourseIndex::from_parts(courses, similarity).unwrap();

        assert_eq!(Some(0), index.row_of("Rust"));
        assert_eq!(Some(1), index.row_of("rust"));
        assert_eq!(None, index.row_of("RUST"));
    }

    #[test]
    fn should_load_artifacts_written_by_this_crate() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("courses.bin");
        let similarity_path = dir.path().join("similarity.bin");

        let courses = vec![course("a"), course("b")];
        let similarity =
            SimilarityMatrix::from_rows(vec![vec![1.0, 0.7], vec![0.6, 1.0]]).unwrap();
        io::write_catalog(&catalog_path, &courses).unwrap();
        io::write_similarity(&similarity_path, &similarity).unwrap();

        let index = CourseIndex::new(
            catalog_path.to_str().unwrap(),
            similarity_path.to_str().unwrap(),
        )
        .unwrap();

        assert_eq!(2, index.len());
        assert_eq!("a", index.course(0).name);
        assert_eq!(&[0.6, 1.0], index.similarities(1));
    }
}
