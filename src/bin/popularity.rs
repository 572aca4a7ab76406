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

extern crate env_logger;
extern crate getopts;
extern crate poprec;

use std::env;
use std::error::Error;

use getopts::Options;

use poprec::io;
use poprec::types::{Dataset, RecommendConfig};
use poprec::{PopularityRecommender, Recommender};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("t", "trainfile", "Training ratings file name (required). The input must \
        contain a user id, movie id and rating per line, separated by a tab.", "PATH");
    opts.optopt("e", "testfile", "Held-out test ratings file name (required), in the same \
        format as the training file. One predicted rating is produced per line.", "PATH");
    opts.optopt("m", "moviesfile", "Movie metadata file name (optional). The input must \
        contain a movie id and a |-separated genre list per line, separated by a tab.", "PATH");
    opts.optopt("r", "recommendationsfile", "Recommendations output file name (optional, \
        output will be written to stdout by default).", "PATH");
    opts.optopt("p", "predictionsfile", "Predictions output file name (optional, predictions \
        are only written when this is set).", "PATH");
    opts.optopt("n", "min-ratings", "Minimum number of ratings a movie needs to be \
        recommendable (optional, defaults to 200).", "NUMBER");
    opts.optopt("g", "genre", "Only recommend movies that carry this genre (optional, \
        defaults to no genre filter).", "NAME");
    opts.optflag("h", "help", "Print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if matches.opt_present("h") {
        return print_usage_and_exit(&program, opts, None);
    }

    if !matches.opt_present("t") || !matches.opt_present("e") {
        return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify a trainfile via --trainfile and a testfile via --testfile."),
        );
    }

    let train_path = matches.opt_str("t").unwrap();
    let test_path = matches.opt_str("e").unwrap();
    let movies_path = matches.opt_str("m");
    let recommendations_path = matches.opt_str("r");
    let predictions_path = matches.opt_str("p");
    let genre = matches.opt_str("g");

    let minimum_num_rating: u32 = match matches.opt_get_default("n", 200) {
        Ok(minimum_num_rating) => minimum_num_rating,
        Err(failure) => {
            let hint = format!("Problem with option 'n': {}", failure.to_string());
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    let config = RecommendConfig {
        minimum_num_rating,
        genre,
    };

    compute_recommendations(
        &train_path,
        &test_path,
        movies_path,
        config,
        recommendations_path,
        predictions_path,
    ).unwrap();
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>
) {

    if let Some(hint) = hint {
        eprintln!("\n{}\n", hint);
    }

    let brief = format!("Usage: {} [options]", program);
    eprint!("{}", opts.usage(&brief));
}

fn compute_recommendations(
    train_path: &str,
    test_path: &str,
    movies_path: Option<String>,
    config: RecommendConfig,
    recommendations_path: Option<String>,
    predictions_path: Option<String>,
) -> Result<(), Box<dyn Error>> {

    println!("Reading {} as training ratings", train_path);
    let train = io::read_ratings(train_path)?;

    println!("Reading {} as test ratings", test_path);
    let test = io::read_ratings(test_path)?;

    let item_content = match movies_path {
        Some(path) => {
            println!("Reading {} as movie metadata", path);
            io::read_item_content(&path)?
        },
        None => Vec::new(),
    };

    println!(
        "Found {} training ratings, {} test ratings and metadata for {} movies.",
        train.len(),
        test.len(),
        item_content.len(),
    );

    let dataset = Dataset {
        train,
        test,
        item_content,
    };

    let result = PopularityRecommender.recommend(&dataset, &config);

    if let Some(path) = predictions_path {
        println!("Writing predictions to {}", path);
        io::write_predictions(&dataset.test, &result.predicted_ratings, Some(path))?;
    }

    println!("Writing recommendations...");
    io::write_recommendations(&result, recommendations_path)?;

    Ok(())
}
