use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::warn;

use crate::config::AppConfig;
use crate::errors::DataError;
use crate::index::CourseIndex;
use crate::io::RowIndex;

/// A candidate course with its similarity to the selected course.
#[derive(PartialEq, Debug)]
pub struct ScoredCourse {
    pub row: RowIndex,
    pub score: f64,
}

impl ScoredCourse {
    fn new(row: RowIndex, score: f64) -> Self {
        ScoredCourse { row, score }
    }
}

impl Eq for ScoredCourse {}

impl Ord for ScoredCourse {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse order by score, ties resolved by catalog row
        match self.score.partial_cmp(&other.score) {
            Some(Ordering::Less) => Ordering::Greater,
            Some(Ordering::Greater) => Ordering::Less,
            _ => self.row.cmp(&other.row),
        }
    }
}

impl PartialOrd for ScoredCourse {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub name: String,
    pub url: String,
}

/// Rank every other course by its similarity to `selected_name` and return
/// the top `how_many`, best first.
///
/// An unknown name yields an empty list, it is not an error. The selected
/// course is excluded from the candidates up front rather than trusting its
/// self-similarity to sort first.
pub fn recommend(
    index: &CourseIndex,
    selected_name: &str,
    how_many: usize,
) -> Vec<Recommendation> {
    if how_many == 0 {
        return Vec::new();
    }

    let query_row = match index.row_of(selected_name) {
        Some(row) => row,
        None => return Vec::new(),
    };

    let mut top_courses: BinaryHeap<ScoredCourse> = BinaryHeap::with_capacity(how_many);
    for (row, &score) in index.similarities(query_row).iter().enumerate() {
        if row == query_row {
            continue;
        }
        let scored_course = ScoredCourse::new(row, score);
        if top_courses.len() < how_many {
            top_courses.push(scored_course);
        } else if let Some(mut bottom) = top_courses.peek_mut() {
            if scored_course < *bottom {
                *bottom = scored_course;
            }
        }
    }

    top_courses
        .into_sorted_vec()
        .into_iter()
        .map(|scored_course| {
            let course = index.course(scored_course.row);
            Recommendation {
                name: course.name.clone(),
                url: course.url.clone(),
            }
        })
        .collect()
}

/// Context object constructed once at startup and shared by reference for the
/// rest of the process.
///
/// Missing artifacts put it into a disabled state instead of aborting:
/// `recommend` then always returns empty and `is_available` lets the caller
/// surface the outage. Corrupt artifacts are a hard error, misaligned data
/// must never serve.
pub struct Recommender {
    index: Option<CourseIndex>,
    how_many: usize,
}

impl Recommender {
    pub fn new(config: &AppConfig) -> Result<Self, DataError> {
        let how_many = config.model.num_items_to_recommend;
        match CourseIndex::new(&config.data.catalog_path, &config.data.similarity_path) {
            Ok(index) => Ok(Recommender {
                index: Some(index),
                how_many,
            }),
            Err(DataError::DataNotFound { path }) => {
                warn!("recommendations disabled, artifact missing: {}", path);
                Ok(Recommender {
                    index: None,
                    how_many,
                })
            }
            Err(other) => Err(other),
        }
    }

    pub fn with_index(index: CourseIndex, how_many: usize) -> Self {
        Recommender {
            index: Some(index),
            how_many,
        }
    }

    pub fn is_available(&self) -> bool {
        self.index.is_some()
    }

    pub fn recommend(&self, selected_name: &str) -> Vec<Recommendation> {
        match &self.index {
            Some(index) => recommend(index, selected_name, self.how_many),
            None => Vec::new(),
        }
    }
}
