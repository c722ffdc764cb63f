//! Static branching order over colors.

use itertools::Itertools;
use rand::seq::SliceRandom;

use crate::board::{MAX_COLORS, wall_dist};
use crate::game::PuzzleInfo;

struct ColorFeatures {
    index: usize,
    // Reserved for manual pinning; every color carries the same value
    // until an override surface exists.
    user_index: usize,
    wall_dist_init: i32,
    wall_dist_goal: i32,
    min_dist: i32,
}

/// Fix `info.color_order` before searching. The default order prefers
/// colors starting near a wall, then those whose goal sits deep in the
/// board, then long runs; `randomize` replaces all of that with a
/// shuffle.
pub fn order_colors(info: &mut PuzzleInfo, randomize: bool) {
    if randomize {
        let mut rng = rand::thread_rng();
        info.color_order[..info.num_colors].shuffle(&mut rng);
        return;
    }

    let sorted = (0..info.num_colors)
        .map(|color| {
            let (ix, iy) = info.init_pos[color].coords();
            let (gx, gy) = info.goal_pos[color].coords();
            ColorFeatures {
                index: color,
                user_index: MAX_COLORS,
                wall_dist_init: wall_dist(info.size, ix, iy),
                wall_dist_goal: wall_dist(info.size, gx, gy),
                min_dist: (gx - ix).abs() + (gy - iy).abs(),
            }
        })
        .sorted_by(|a, b| {
            a.user_index
                .cmp(&b.user_index)
                .then(a.wall_dist_init.cmp(&b.wall_dist_init))
                .then(b.wall_dist_goal.cmp(&a.wall_dist_goal))
                .then(b.min_dist.cmp(&a.min_dist))
        });

    for (i, features) in sorted.enumerate() {
        info.color_order[i] = features.index;
    }
}
