use crate::Input;
use std::time::{Duration, Instant};

/// Swaps the graphs when the first one is bigger, so that `|G1| <= |G2|`.
/// The flag tells whether a swap happened.
pub fn orient(input: Input) -> (Input, bool) {
    if input.g1.num_vertices() > input.g2.num_vertices() {
        (Input::new(input.g2, input.g1), true)
    } else {
        (input, false)
    }
}

/// Runs `f` and measures its wall-clock time
pub fn time_it<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}
