/**
 * PopRec
 * Copyright (C) 2026 The poprec developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

#[cfg(test)]
mod tests {

    use fnv::FnvHashSet;

    use crate::io;
    use crate::sample::sample_dataset;
    use crate::stats::{GenreIndex, MovieStats, UserHistories};
    use crate::types::{Dataset, ItemContent, Rating, RecommendConfig};
    use crate::{PopularityRecommender, Recommender, NUM_ITEMS_TO_RECOMMEND};

    fn rating(user_id: u32, movie_id: u32, rating: f64) -> Rating {
        Rating {
            user_id,
            movie_id,
            rating,
        }
    }

    /* User 1 rated movies 1 and 2, user 2 rated movie 1. The test rows ask
       for predictions on movie 2 (average 3.0) and movie 3 (unseen in
       training). */
    fn small_dataset() -> Dataset {
        Dataset {
            train: vec![rating(1, 1, 5.0), rating(1, 2, 3.0), rating(2, 1, 4.0)],
            test: vec![rating(2, 2, 4.0), rating(2, 3, 1.0)],
            item_content: vec![
                ItemContent {
                    movie_id: 1,
                    genres: vec!["Action".to_string()],
                },
                ItemContent {
                    movie_id: 2,
                    genres: vec!["Action".to_string(), "Comedy".to_string()],
                },
            ],
        }
    }

    #[test]
    fn programmatic_usage() {
        /* Our input data comprises of observed movie ratings, split into a
           training table and a held-out test table, plus genre metadata for
           the rated movies. */
        let dataset = small_dataset();

        /* The popularity recommender needs no training: it scores every
           movie by its average training rating and walks that ranking per
           user. The minimum rating count guards against movies with too few
           ratings to have a trustworthy average. */
        let config = RecommendConfig {
            minimum_num_rating: 1,
            genre: None,
        };

        let result = PopularityRecommender.recommend(&dataset, &config);

        /* One predicted rating per test row, in test row order. */
        assert_eq!(result.predicted_ratings.len(), dataset.test.len());

        /* User 1 watched both movies already and gets an empty list, user 2
           still gets movie 2 recommended. */
        assert_eq!(result.user_to_items[&1], Vec::<u32>::new());
        assert_eq!(result.user_to_items[&2], vec![2]);

        for (row, predicted_rating) in dataset.test.iter().zip(result.predicted_ratings.iter()) {
            println!(
                "user {} movie {}: predicted rating {}",
                row.user_id, row.movie_id, predicted_rating,
            );
        }
    }

    #[test]
    fn movie_averages_match_the_training_ratings() {
        let dataset = small_dataset();
        let movie_stats = MovieStats::from_ratings(dataset.train.iter());

        assert_eq!(movie_stats.num_movies(), 2);
        assert_eq!(movie_stats.count(1), 2);
        assert_eq!(movie_stats.count(2), 1);
        assert_eq!(movie_stats.count(3), 0);
        assert_eq!(movie_stats.mean(1), Some(4.5));
        assert_eq!(movie_stats.mean(2), Some(3.0));
        assert_eq!(movie_stats.mean(3), None);
    }

    #[test]
    fn predictions_align_with_the_test_rows() {
        let dataset = small_dataset();
        let config = RecommendConfig {
            minimum_num_rating: 1,
            genre: None,
        };

        let result = PopularityRecommender.recommend(&dataset, &config);

        // movie 2 averages 3.0, movie 3 is unseen in training and defaults to 0
        assert_eq!(result.predicted_ratings, vec![3.0, 0.0]);
    }

    #[test]
    fn ranking_is_ordered_by_average_and_stable_for_ties() {
        let train = vec![
            rating(1, 7, 4.0),
            rating(1, 9, 4.0),
            rating(1, 3, 5.0),
            rating(2, 7, 4.0),
            rating(2, 9, 4.0),
            rating(2, 3, 1.0),
        ];

        let movie_stats = MovieStats::from_ratings(train.iter());

        // movies 7 and 9 tie at 4.0 and keep their first-occurrence order,
        // movie 3 averages 3.0 and ranks last
        assert_eq!(movie_stats.ranked_by_mean(1), vec![7, 9, 3]);
        assert_eq!(movie_stats.ranked_by_mean(2), vec![7, 9, 3]);
        assert_eq!(movie_stats.ranked_by_mean(3), Vec::<u32>::new());
    }

    #[test]
    fn minimum_rating_count_restricts_the_recommendable_pool_only() {
        let dataset = small_dataset();
        let config = RecommendConfig {
            minimum_num_rating: 2,
            genre: None,
        };

        let result = PopularityRecommender.recommend(&dataset, &config);

        // only movie 1 has two ratings and both users watched it already
        assert_eq!(result.user_to_items[&1], Vec::<u32>::new());
        assert_eq!(result.user_to_items[&2], Vec::<u32>::new());

        // predictions are unaffected by the pool restriction
        assert_eq!(result.predicted_ratings, vec![3.0, 0.0]);
    }

    #[test]
    fn an_overly_high_minimum_empties_every_list() {
        let dataset = small_dataset();
        let config = RecommendConfig {
            minimum_num_rating: 100,
            genre: None,
        };

        let result = PopularityRecommender.recommend(&dataset, &config);

        // every training user still gets an (empty) entry
        assert_eq!(result.user_to_items.len(), 2);
        for items in result.user_to_items.values() {
            assert!(items.is_empty());
        }
    }

    #[test]
    fn genre_filter_restricts_recommendations() {
        let dataset = small_dataset();
        let config = RecommendConfig {
            minimum_num_rating: 1,
            genre: Some("Comedy".to_string()),
        };

        let result = PopularityRecommender.recommend(&dataset, &config);

        // movie 1 is Action-only, movie 2 carries Comedy
        assert_eq!(result.user_to_items[&1], Vec::<u32>::new());
        assert_eq!(result.user_to_items[&2], vec![2]);
    }

    #[test]
    fn a_genre_absent_from_the_metadata_empties_every_list() {
        let dataset = small_dataset();
        let config = RecommendConfig {
            minimum_num_rating: 1,
            genre: Some("Documentary".to_string()),
        };

        let result = PopularityRecommender.recommend(&dataset, &config);

        for items in result.user_to_items.values() {
            assert!(items.is_empty());
        }
    }

    #[test]
    fn an_unset_genre_filter_admits_movies_without_metadata() {
        let mut dataset = small_dataset();
        dataset.item_content.clear();

        let config = RecommendConfig {
            minimum_num_rating: 1,
            genre: None,
        };

        let result = PopularityRecommender.recommend(&dataset, &config);

        // without metadata and without a filter, movie 2 is still recommendable
        assert_eq!(result.user_to_items[&2], vec![2]);

        let genre_index = GenreIndex::from_items(&dataset.item_content);
        assert!(genre_index.matches(2, None));
        assert!(!genre_index.matches(2, Some("Action")));
    }

    #[test]
    fn recommendation_lists_are_capped_and_qualified() {
        let dataset = sample_dataset(42);
        let config = RecommendConfig {
            minimum_num_rating: 3,
            genre: None,
        };

        let result = PopularityRecommender.recommend(&dataset, &config);

        let movie_stats = MovieStats::from_ratings(dataset.train.iter());
        let histories = UserHistories::from_ratings(dataset.train.iter());

        assert_eq!(result.user_to_items.len(), histories.num_users());

        for (&user_id, items) in result.user_to_items.iter() {
            assert!(items.len() <= NUM_ITEMS_TO_RECOMMEND);

            let unique_items: FnvHashSet<u32> = items.iter().cloned().collect();
            assert_eq!(unique_items.len(), items.len());

            for &movie_id in items.iter() {
                assert!(movie_stats.count(movie_id) >= 3);
                assert!(!histories.has_watched(user_id, movie_id));
            }
        }
    }

    #[test]
    fn identical_inputs_produce_identical_results() {
        let dataset = sample_dataset(7);
        let config = RecommendConfig {
            minimum_num_rating: 3,
            genre: Some("Action".to_string()),
        };

        let first = PopularityRecommender.recommend(&dataset, &config);
        let second = PopularityRecommender.recommend(&dataset, &config);

        assert_eq!(first, second);
    }

    #[test]
    fn sample_datasets_are_reproducible() {
        let first = sample_dataset(3);
        let second = sample_dataset(3);

        assert_eq!(first.train, second.train);
        assert_eq!(first.test, second.test);
        assert_eq!(first.item_content, second.item_content);
    }

    #[test]
    fn reads_ratings_and_metadata_from_tab_separated_files() {
        let dir = tempfile::tempdir().unwrap();

        let ratings_path = dir.path().join("ratings.tsv");
        std::fs::write(&ratings_path, "1\t1\t5.0\n1\t2\t3.0\n2\t1\t4.0\n").unwrap();

        let movies_path = dir.path().join("movies.tsv");
        std::fs::write(&movies_path, "1\tAction\n2\tAction|Comedy\n3\t\n").unwrap();

        let ratings = io::read_ratings(ratings_path.to_str().unwrap()).unwrap();
        assert_eq!(
            ratings,
            vec![rating(1, 1, 5.0), rating(1, 2, 3.0), rating(2, 1, 4.0)]
        );

        let items = io::read_item_content(movies_path.to_str().unwrap()).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].genres, vec!["Action".to_string()]);
        assert_eq!(
            items[1].genres,
            vec!["Action".to_string(), "Comedy".to_string()]
        );
        assert!(items[2].genres.is_empty());
    }

    #[test]
    fn malformed_ratings_fail_loud() {
        let dir = tempfile::tempdir().unwrap();

        let ratings_path = dir.path().join("ratings.tsv");
        std::fs::write(&ratings_path, "1\tnot-a-movie\t5.0\n").unwrap();

        assert!(io::read_ratings(ratings_path.to_str().unwrap()).is_err());

        let movies_path = dir.path().join("movies.tsv");
        std::fs::write(&movies_path, "not-a-movie\tAction\n").unwrap();

        assert!(io::read_item_content(movies_path.to_str().unwrap()).is_err());
    }
}
