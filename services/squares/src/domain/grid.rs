//! Pure board arithmetic: digit permutations, winner lookup, fill planning.

use std::collections::BTreeSet;

use rand::RngExt;

/// Number of digit labels on each axis (digits 0–9).
pub const DIGIT_COUNT: usize = 10;

/// Produce an unbiased random permutation of the digits 0–9 (Fisher–Yates).
pub fn shuffle_digits() -> Vec<u8> {
    let mut rng = rand::rng();
    let mut digits: Vec<u8> = (0..DIGIT_COUNT as u8).collect();
    for i in (1..digits.len()).rev() {
        let j = rng.random_range(0..=i);
        digits.swap(i, j);
    }
    digits
}

/// True when `digits` contains each of 0–9 exactly once.
pub fn is_digit_permutation(digits: &[u8]) -> bool {
    if digits.len() != DIGIT_COUNT {
        return false;
    }
    let mut seen = [false; DIGIT_COUNT];
    for &d in digits {
        let Some(slot) = seen.get_mut(d as usize) else {
            return false;
        };
        if *slot {
            return false;
        }
        *slot = true;
    }
    true
}

/// Last digit of a score. `rem_euclid` keeps the digit in 0–9 even for
/// negative input.
pub fn score_digit(score: i32) -> u8 {
    score.rem_euclid(10) as u8
}

/// Locate the winning (row, col) for a pair of quarter scores: the row whose
/// digit equals the last digit of `score_a`, the column whose digit equals
/// the last digit of `score_b`. `None` only if the slices are not full
/// permutations.
pub fn winning_cell(
    row_numbers: &[u8],
    col_numbers: &[u8],
    score_a: i32,
    score_b: i32,
) -> Option<(i32, i32)> {
    let row = row_numbers.iter().position(|&d| d == score_digit(score_a))?;
    let col = col_numbers.iter().position(|&d| d == score_digit(score_b))?;
    Some((row as i32, col as i32))
}

/// All unclaimed cells of an N×N board, in row-major order.
pub fn empty_cells(grid_size: i32, claimed: &BTreeSet<(i32, i32)>) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    for row in 0..grid_size {
        for col in 0..grid_size {
            if !claimed.contains(&(row, col)) {
                cells.push((row, col));
            }
        }
    }
    cells
}

/// Assign empty cells cyclically across the sorted distinct player names:
/// the i-th empty cell (row-major) goes to `players[i mod players.len()]`.
/// Empty when there are no players to draw from.
pub fn round_robin_assignments<'a>(
    empty: &[(i32, i32)],
    players: &'a BTreeSet<String>,
) -> Vec<((i32, i32), &'a str)> {
    let ordered: Vec<&str> = players.iter().map(String::as_str).collect();
    if ordered.is_empty() {
        return Vec::new();
    }
    empty
        .iter()
        .enumerate()
        .map(|(i, &cell)| (cell, ordered[i % ordered.len()]))
        .collect()
}
