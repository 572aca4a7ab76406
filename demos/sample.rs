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
extern crate poprec;

use poprec::{PopularityRecommender, Recommender};

fn main() {
    env_logger::init();

    // The seed fully determines the generated sample dataset, rerunning
    // with the same seed reproduces the exact same output.
    PopularityRecommender.run_sample(0);
}
