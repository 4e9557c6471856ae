use chrono::FixedOffset;

mod invitation;
mod leaderboard;
mod user;

/// Indian Standard Time, the default slot time zone.
fn ist() -> FixedOffset {
    FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
}
