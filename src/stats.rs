use std::cmp::Ordering;

use fnv::{FnvHashMap, FnvHashSet};

use crate::types::{ItemContent, Rating};

/// Per-movie rating count and rating sum, aggregated over the training
/// ratings in a single pass.
pub struct MovieStats {
    rating_counts: FnvHashMap<u32, u32>,
    rating_sums: FnvHashMap<u32, f64>,
    insertion_order: Vec<u32>,
}

impl MovieStats {
    pub fn from_ratings<'a, I>(ratings: I) -> Self
    where
        I: Iterator<Item = &'a Rating>,
    {
        let mut rating_counts: FnvHashMap<u32, u32> =
            FnvHashMap::with_capacity_and_hasher(100, Default::default());
        let mut rating_sums: FnvHashMap<u32, f64> =
            FnvHashMap::with_capacity_and_hasher(100, Default::default());
        let mut insertion_order: Vec<u32> = Vec::new();

        for rating in ratings {
            if !rating_counts.contains_key(&rating.movie_id) {
                insertion_order.push(rating.movie_id);
            }

            *rating_counts.entry(rating.movie_id).or_insert(0) += 1;
            *rating_sums.entry(rating.movie_id).or_insert(0.0) += rating.rating;
        }

        MovieStats {
            rating_counts,
            rating_sums,
            insertion_order,
        }
    }

    pub fn num_movies(&self) -> usize {
        self.insertion_order.len()
    }

    /// Number of training ratings observed for a movie.
    pub fn count(&self, movie_id: u32) -> u32 {
        self.rating_counts.get(&movie_id).cloned().unwrap_or(0)
    }

    /// Average training rating of a movie, `None` for movies that never
    /// occurred in the training data.
    pub fn mean(&self, movie_id: u32) -> Option<f64> {
        self.rating_counts
            .get(&movie_id)
            .map(|count| self.rating_sums[&movie_id] / f64::from(*count))
    }

    /// Movies with at least `minimum_num_rating` ratings, ordered by average
    /// rating, highest first. The sort is stable: ties keep the order in
    /// which the movies first occurred in the training data.
    pub fn ranked_by_mean(&self, minimum_num_rating: u32) -> Vec<u32> {
        let mut eligible: Vec<u32> = self
            .insertion_order
            .iter()
            .filter(|movie_id| self.count(**movie_id) >= minimum_num_rating)
            .cloned()
            .collect();

        eligible.sort_by(|movie_a, movie_b| {
            let mean_a = self.mean(*movie_a).unwrap_or(0.0);
            let mean_b = self.mean(*movie_b).unwrap_or(0.0);

            mean_b.partial_cmp(&mean_a).unwrap_or(Ordering::Equal)
        });

        eligible
    }
}

/// The set of movies each user has rated in the training data, plus the
/// order in which the users first occurred.
pub struct UserHistories {
    watched: FnvHashMap<u32, FnvHashSet<u32>>,
    insertion_order: Vec<u32>,
}

impl UserHistories {
    pub fn from_ratings<'a, I>(ratings: I) -> Self
    where
        I: Iterator<Item = &'a Rating>,
    {
        let mut watched: FnvHashMap<u32, FnvHashSet<u32>> =
            FnvHashMap::with_capacity_and_hasher(100, Default::default());
        let mut insertion_order: Vec<u32> = Vec::new();

        for rating in ratings {
            if !watched.contains_key(&rating.user_id) {
                insertion_order.push(rating.user_id);
            }

            watched
                .entry(rating.user_id)
                .or_insert_with(FnvHashSet::default)
                .insert(rating.movie_id);
        }

        UserHistories {
            watched,
            insertion_order,
        }
    }

    pub fn num_users(&self) -> usize {
        self.insertion_order.len()
    }

    /// Users in the order they first occurred in the training data.
    pub fn users(&self) -> &[u32] {
        &self.insertion_order
    }

    pub fn has_watched(&self, user_id: u32, movie_id: u32) -> bool {
        self.watched
            .get(&user_id)
            .map_or(false, |movies| movies.contains(&movie_id))
    }
}

/// Maps movies to their genre memberships. Duplicate metadata entries for a
/// movie overwrite each other, the last one wins.
pub struct GenreIndex {
    genres: FnvHashMap<u32, Vec<String>>,
}

impl GenreIndex {
    pub fn from_items(items: &[ItemContent]) -> Self {
        let mut genres: FnvHashMap<u32, Vec<String>> =
            FnvHashMap::with_capacity_and_hasher(items.len(), Default::default());

        for item in items {
            genres.insert(item.movie_id, item.genres.clone());
        }

        GenreIndex { genres }
    }

    /// Whether a movie passes the genre filter. An unset filter admits every
    /// movie; a movie without a metadata entry matches no genre.
    pub fn matches(&self, movie_id: u32, genre: Option<&str>) -> bool {
        match genre {
            None => true,
            Some(genre) => self
                .genres
                .get(&movie_id)
                .map_or(false, |genres| genres.iter().any(|g| g == genre)),
        }
    }
}
