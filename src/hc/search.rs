//! Match-finding core for the LZ4-HC compressor.
//!
//! 1. **Insertion** ([`insert`]): link every position in
//!    `[next_to_update, target]` into the hash and chain tables, exactly
//!    once each.  Positions skipped over by an emitted match are picked up
//!    by the next call, so interior offsets stay reachable.
//! 2. **Match search** ([`find_longest_match`]): walk the chain backwards
//!    from the current position for the longest exact match.

use super::types::{HcContext, Match, CHAIN_END};
use crate::block::types::{count, LZ4_DISTANCE_MAX, MINMATCH};

// ─────────────────────────────────────────────────────────────────────────────
// insert
// ─────────────────────────────────────────────────────────────────────────────

/// Link all positions from `ctx.next_to_update` up to and including `target`.
///
/// `target + MINMATCH` must not exceed `src.len()`.
pub fn insert(ctx: &mut HcContext, src: &[u8], target: usize) {
    while ctx.next_to_update <= target {
        let pos = ctx.next_to_update;
        ctx.link(src, pos);
        ctx.next_to_update += 1;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// find_longest_match
// ─────────────────────────────────────────────────────────────────────────────

/// Longest match for `ip` among earlier positions sharing its hash.
///
/// Inserts `ip` first, then follows at most `max_attempts` chain links no
/// further back than [`LZ4_DISTANCE_MAX`].  Matches are measured up to
/// `match_limit`.  Of equally long candidates the first (nearest) one wins.
/// Returns `None` when nothing reaches [`MINMATCH`].
pub fn find_longest_match(
    ctx: &mut HcContext,
    src: &[u8],
    ip: usize,
    match_limit: usize,
    max_attempts: usize,
) -> Option<Match> {
    if ip + MINMATCH > match_limit {
        return None;
    }
    insert(ctx, src, ip);

    let max_len = match_limit - ip;
    let mut best: Option<Match> = None;
    let mut longest = MINMATCH - 1;
    let mut cursor = ip;
    let mut attempts = max_attempts;

    while attempts > 0 {
        let delta = ctx.delta_next(cursor);
        if delta == CHAIN_END {
            break;
        }
        let delta = delta as usize;
        if delta > cursor || ip - (cursor - delta) > LZ4_DISTANCE_MAX {
            break;
        }
        cursor -= delta;
        attempts -= 1;

        // Cheap reject: the byte that would make this candidate longer must match.
        if src[cursor + longest] != src[ip + longest] {
            continue;
        }
        let len = count(&src[ip..match_limit], &src[cursor..]);
        if len > longest {
            longest = len;
            best = Some(Match { pos: cursor, len });
            if len == max_len {
                break;
            }
        }
    }

    best
}
