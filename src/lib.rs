#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;

use std::time::Instant;

use log::{debug, info};

pub mod io;
pub mod recommend;
pub mod sample;
pub mod stats;
pub mod types;

mod usage_tests;

use crate::stats::{GenreIndex, MovieStats, UserHistories};
use crate::types::{Dataset, RecommendConfig, RecommendResult};

/// Number of movies to recommend per user.
pub const NUM_ITEMS_TO_RECOMMEND: usize = 10;

/// Common contract for the recommenders evaluated by the benchmark: consume
/// a read-only dataset snapshot and a configuration, produce predicted
/// ratings for the test rows plus a ranked movie list per user.
pub trait Recommender {
    fn recommend(&self, dataset: &Dataset, config: &RecommendConfig) -> RecommendResult;

    /// Ad-hoc entry point: runs the recommender on a small seeded synthetic
    /// dataset and prints the predictions and recommendation lists.
    fn run_sample(&self, seed: u64) {
        let dataset = sample::sample_dataset(seed);

        println!(
            "Generated {} training ratings and {} test ratings for {} movies.",
            dataset.train.len(),
            dataset.test.len(),
            dataset.item_content.len(),
        );

        let config = RecommendConfig {
            minimum_num_rating: 5,
            ..RecommendConfig::default()
        };

        let result = self.recommend(&dataset, &config);

        for (row, predicted_rating) in dataset.test.iter().zip(result.predicted_ratings.iter()) {
            println!(
                "user {} movie {}: predicted rating {:.2}",
                row.user_id, row.movie_id, predicted_rating,
            );
        }

        let movie_stats = MovieStats::from_ratings(dataset.train.iter());

        let mut user_ids: Vec<u32> = result.user_to_items.keys().cloned().collect();
        user_ids.sort_unstable();

        for user_id in user_ids {
            println!("Recommendations for user {}:", user_id);

            for movie_id in result.user_to_items[&user_id].iter() {
                println!(
                    "\t{} (average rating {:.2})",
                    movie_id,
                    movie_stats.mean(*movie_id).unwrap_or(0.0),
                );
            }
        }
    }
}

/// Scores movies by their average training rating and recommends the
/// highest-rated movies a user has not watched yet. Non-personalized: every
/// user walks the same globally ranked movie list.
pub struct PopularityRecommender;

impl Recommender for PopularityRecommender {
    fn recommend(&self, dataset: &Dataset, config: &RecommendConfig) -> RecommendResult {
        let batch_start = Instant::now();

        let movie_stats = MovieStats::from_ratings(dataset.train.iter());

        // The predicted rating for a test row is the average training rating
        // of its movie. Movies unseen in training default to 0.
        let predicted_ratings: Vec<f64> = dataset
            .test
            .iter()
            .map(|row| movie_stats.mean(row.movie_id).unwrap_or(0.0))
            .collect();

        let eligible_movies = movie_stats.ranked_by_mean(config.minimum_num_rating);

        debug!(
            "{} of {} movies have at least {} ratings",
            eligible_movies.len(),
            movie_stats.num_movies(),
            config.minimum_num_rating,
        );

        let histories = UserHistories::from_ratings(dataset.train.iter());
        let genre_index = GenreIndex::from_items(&dataset.item_content);

        let user_to_items = recommend::top_ranked_unseen(
            &histories,
            &eligible_movies,
            &genre_index,
            config.genre.as_deref(),
            NUM_ITEMS_TO_RECOMMEND,
        );

        info!(
            "{} predictions and recommendations for {} users computed in {}ms",
            predicted_ratings.len(),
            histories.num_users(),
            batch_start.elapsed().as_millis(),
        );

        RecommendResult {
            predicted_ratings,
            user_to_items,
        }
    }
}
