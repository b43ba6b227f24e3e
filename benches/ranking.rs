#[macro_use]
extern crate bencher;
extern crate courserec;
extern crate rand;

use bencher::Bencher;
use rand::Rng;

use courserec::index::CourseIndex;
use courserec::io::{Course, SimilarityMatrix};
use courserec::recommender::recommend;

benchmark_group!(benches, rank_large_catalog);
benchmark_main!(benches);

const CATALOG_SIZE: usize = 3000;
const HOW_MANY: usize = 6;

fn rank_large_catalog(bench: &mut Bencher) {
    let mut rng = rand::thread_rng();
    let courses: Vec<Course> = (0..CATALOG_SIZE)
        .map(|row| Course {
            name: format!("course-{}", row),
            url: format!("https://example.org/course/{}", row),
        })
        .collect();
    let scores: Vec<f64> = (0..CATALOG_SIZE * CATALOG_SIZE)
        .map(|_| rng.gen::<f64>())
        .collect();
    let similarity = SimilarityMatrix::new(CATALOG_SIZE, scores).unwrap();
    let index = CourseIndex::from_parts(courses, similarity).unwrap();

    bench.iter(|| recommend(&index, "course-1500", HOW_MANY));
}
