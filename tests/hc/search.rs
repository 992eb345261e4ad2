// Integration tests for hc::search: chain insertion and longest-match search.

use lz4codec::hc::search::find_longest_match;
use lz4codec::hc::{HcContext, Match, LZ4HC_MAX_ATTEMPTS};

fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .collect()
}

#[test]
fn finds_match_within_window() {
    let mut src = b"WXYZ1234".to_vec();
    src.extend_from_slice(&noise(60_000, 7));
    let ip = src.len();
    src.extend_from_slice(b"WXYZ1234!!!!!");
    let limit = src.len() - 5;

    let mut ctx = HcContext::new();
    let m = find_longest_match(&mut ctx, &src, ip, limit, LZ4HC_MAX_ATTEMPTS);
    assert_eq!(m, Some(Match { pos: 0, len: 8 }));
    assert_eq!(m.map(|m| m.offset(ip)), Some(ip));
}

#[test]
fn ignores_match_beyond_window() {
    let mut src = b"WXYZ1234".to_vec();
    src.extend_from_slice(&noise(70_000, 7));
    let ip = src.len();
    src.extend_from_slice(b"WXYZ1234!!!!!");
    let limit = src.len() - 5;

    let mut ctx = HcContext::new();
    assert_eq!(find_longest_match(&mut ctx, &src, ip, limit, LZ4HC_MAX_ATTEMPTS), None);
}

#[test]
fn longest_candidate_wins_over_nearest() {
    //          0         1         2         3
    //          0123456789012345678901234567890123456
    let src = b"abcdefghij-abcdXYZ-abcd---abcdefghij...";
    let ip = 26;
    let mut ctx = HcContext::new();
    let m = find_longest_match(&mut ctx, src, ip, src.len(), LZ4HC_MAX_ATTEMPTS).unwrap();
    assert_eq!(m, Match { pos: 0, len: 10 });
}

#[test]
fn attempt_budget_limits_the_walk() {
    let src = b"abcdefghij-abcdXYZ-abcd---abcdefghij...";
    let ip = 26;
    let mut ctx = HcContext::new();
    // One attempt only reaches the nearest candidate at 19.
    let m = find_longest_match(&mut ctx, src, ip, src.len(), 1).unwrap();
    assert_eq!(m, Match { pos: 19, len: 4 });
}

#[test]
fn no_room_for_a_match() {
    let src = b"abcdabcd";
    let mut ctx = HcContext::new();
    assert_eq!(find_longest_match(&mut ctx, src, 4, 7, LZ4HC_MAX_ATTEMPTS), None);
}
