use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{Dataset, ItemContent, Rating};

const SAMPLE_GENRES: [&str; 5] = ["Action", "Comedy", "Drama", "Horror", "Sci-Fi"];

const NUM_SAMPLE_USERS: u32 = 50;
const NUM_SAMPLE_MOVIES: u32 = 20;

/// Generates a small synthetic benchmark snapshot for ad-hoc runs and tests.
/// The generator is fully determined by `seed`: repeated calls with the same
/// seed produce the same dataset.
pub fn sample_dataset(seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut item_content = Vec::with_capacity(NUM_SAMPLE_MOVIES as usize);

    for movie_id in 0..NUM_SAMPLE_MOVIES {
        let first_genre = SAMPLE_GENRES[rng.gen_range(0..SAMPLE_GENRES.len())];
        let second_genre = SAMPLE_GENRES[rng.gen_range(0..SAMPLE_GENRES.len())];

        let mut genres = vec![first_genre.to_string()];
        if second_genre != first_genre {
            genres.push(second_genre.to_string());
        }

        item_content.push(ItemContent { movie_id, genres });
    }

    let mut train = Vec::new();
    let mut test = Vec::new();

    for user_id in 0..NUM_SAMPLE_USERS {
        for movie_id in 0..NUM_SAMPLE_MOVIES {
            // Each user rates roughly 60% of the movies
            if rng.gen_bool(0.4) {
                continue;
            }

            let rating = Rating {
                user_id,
                movie_id,
                rating: rng.gen_range(1..=5) as f64,
            };

            // Roughly an 80/20 train/test split per observation
            if rng.gen_bool(0.2) {
                test.push(rating);
            } else {
                train.push(rating);
            }
        }
    }

    Dataset {
        train,
        test,
        item_content,
    }
}
