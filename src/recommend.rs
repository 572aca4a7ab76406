use fnv::FnvHashMap;

use crate::stats::{GenreIndex, UserHistories};

/// Builds the per-user recommendation lists. Every user walks the globally
/// ranked eligible movies from the top and keeps the first
/// `num_items_to_recommend` movies that were not watched yet and pass the
/// genre filter. Users for which fewer movies qualify end up with a shorter,
/// possibly empty list.
pub fn top_ranked_unseen(
    histories: &UserHistories,
    ranked_movies: &[u32],
    genre_index: &GenreIndex,
    genre: Option<&str>,
    num_items_to_recommend: usize,
) -> FnvHashMap<u32, Vec<u32>> {
    let mut recommendations: FnvHashMap<u32, Vec<u32>> =
        FnvHashMap::with_capacity_and_hasher(histories.num_users(), Default::default());

    for &user_id in histories.users() {
        let mut items_for_user: Vec<u32> = Vec::with_capacity(num_items_to_recommend);

        for &movie_id in ranked_movies {
            if items_for_user.len() == num_items_to_recommend {
                break;
            }

            if !histories.has_watched(user_id, movie_id) && genre_index.matches(movie_id, genre) {
                items_for_user.push(movie_id);
            }
        }

        recommendations.insert(user_id, items_for_user);
    }

    recommendations
}
