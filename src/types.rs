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

use fnv::FnvHashMap;

/// A single (user, movie, rating) observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    pub user_id: u32,
    pub movie_id: u32,
    pub rating: f64,
}

/// Genre metadata for a single movie. A movie can be a member of several
/// genres.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemContent {
    pub movie_id: u32,
    pub genres: Vec<String>,
}

/// A fully materialized snapshot of the benchmark data: training ratings,
/// held-out test ratings and genre metadata for the rated movies. Row order
/// of the rating tables is significant and preserved throughout.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub train: Vec<Rating>,
    pub test: Vec<Rating>,
    pub item_content: Vec<ItemContent>,
}

/// Options recognized by the recommenders.
#[derive(Debug, Clone)]
pub struct RecommendConfig {
    /// Movies with fewer training ratings than this are never recommended.
    pub minimum_num_rating: u32,
    /// If set, only movies that carry this genre are recommended. Leaving
    /// the genre unset disables the filter entirely.
    pub genre: Option<String>,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        RecommendConfig {
            minimum_num_rating: 200,
            genre: None,
        }
    }
}

/// What a recommender produces: one predicted rating per test row, in test
/// row order, and a ranked list of recommended movies per training user.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendResult {
    pub predicted_ratings: Vec<f64>,
    pub user_to_items: FnvHashMap<u32, Vec<u32>>,
}
