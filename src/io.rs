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

use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::stdout;
use std::path::Path;

use thiserror::Error;

use crate::types::{ItemContent, Rating, RecommendResult};

/// Failures that can occur while reading the benchmark data. Merely missing
/// values never end up here, only structurally invalid input does.
#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
    #[error("malformed input: {0}")]
    Csv(#[from] csv::Error),
    #[error("movie id `{0}` is not a number")]
    InvalidMovieId(String),
}

/// Reads a CSV input file. We expect NO headers, and a user-movie-rating
/// triple per line with tab separation.
pub fn ratings_reader(file: &str) -> Result<csv::Reader<File>, csv::Error> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .from_path(file)?;

    Ok(reader)
}

/// Reads all rating records from a tab separated file, preserving row order.
pub fn read_ratings(file: &str) -> Result<Vec<Rating>, Error> {
    let mut reader = ratings_reader(file)?;

    let mut ratings = Vec::new();

    for record in reader.deserialize() {
        let (user_id, movie_id, rating): (u32, u32, f64) = record?;

        ratings.push(Rating {
            user_id,
            movie_id,
            rating,
        });
    }

    Ok(ratings)
}

/// Reads movie metadata from a tab separated file with a movie id and a
/// `|`-separated genre list per line. An empty genre field means the movie
/// has no genre memberships.
pub fn read_item_content(file: &str) -> Result<Vec<ItemContent>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b'\t')
        .from_path(file)?;

    let mut items = Vec::new();

    for record in reader.records() {
        let record = record?;
        let raw_movie_id = record.get(0).unwrap_or("");

        let movie_id: u32 = raw_movie_id
            .parse()
            .map_err(|_| Error::InvalidMovieId(raw_movie_id.to_string()))?;

        let genres: Vec<String> = match record.get(1) {
            Some(genre_field) if !genre_field.is_empty() => genre_field
                .split('|')
                .map(|genre| genre.to_string())
                .collect(),
            _ => Vec::new(),
        };

        items.push(ItemContent { movie_id, genres });
    }

    Ok(items)
}

/// Struct used for JSON serialization of a user's recommendation list. Field
/// names will be used in JSON.
#[derive(Serialize)]
struct Recommendations<'a> {
    user_id: u32,
    movie_ids: &'a [u32],
}

/// Output the recommendation lists in JSON format, one user per line in
/// ascending user id order. If a `recommendations_path` is supplied, we
/// write to a file at the specified path, otherwise, we output to stdout.
pub fn write_recommendations(
    result: &RecommendResult,
    recommendations_path: Option<String>,
) -> io::Result<()> {
    let mut out: Box<dyn Write> = match recommendations_path {
        Some(path) => Box::new(File::create(&Path::new(&path))?),
        _ => Box::new(stdout()),
    };

    let mut user_ids: Vec<u32> = result.user_to_items.keys().cloned().collect();
    user_ids.sort_unstable();

    for user_id in user_ids {
        let movie_ids: &[u32] = &result.user_to_items[&user_id];

        let recommendations_as_json = json!(Recommendations { user_id, movie_ids });

        write!(out, "{}\n", recommendations_as_json.to_string())?;
    }

    Ok(())
}

/// Struct used for JSON serialization of a single test row prediction.
#[derive(Serialize)]
struct Prediction {
    user_id: u32,
    movie_id: u32,
    predicted_rating: f64,
}

/// Output one predicted rating per test row in JSON format, preserving the
/// test row order. If a `predictions_path` is supplied, we write to a file
/// at the specified path, otherwise, we output to stdout.
pub fn write_predictions(
    test: &[Rating],
    predicted_ratings: &[f64],
    predictions_path: Option<String>,
) -> io::Result<()> {
    let mut out: Box<dyn Write> = match predictions_path {
        Some(path) => Box::new(File::create(&Path::new(&path))?),
        _ => Box::new(stdout()),
    };

    for (row, predicted_rating) in test.iter().zip(predicted_ratings.iter()) {
        let prediction_as_json = json!(Prediction {
            user_id: row.user_id,
            movie_id: row.movie_id,
            predicted_rating: *predicted_rating,
        });

        write!(out, "{}\n", prediction_as_json.to_string())?;
    }

    Ok(())
}
