//! Due-window and wakeup computation
//!
//! Pure functions shared by the notification scheduler. Instead of polling
//! on a fixed interval (which can miss a post that falls between two
//! ticks), the scheduler sleeps until the wakeup computed here from the
//! next known publish instant.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use chrono::{DateTime, Duration, Utc};
use postpilot_domain::{PostStatus, ScheduledPost};

/// Posts that are due within the lead window.
///
/// A post is due when its status is `scheduled` and its publish instant
/// lies in `[now, now + lead)`. The upper bound is exclusive: a post
/// exactly `lead` away belongs to the next wakeup.
pub fn due_within(posts: &[ScheduledPost], now: DateTime<Utc>, lead: Duration) -> Vec<ScheduledPost> {
    let end = now + lead;
    posts
        .iter()
        .filter(|post| post.status == PostStatus::Scheduled)
        .filter(|post| post.scheduled_at >= now && post.scheduled_at < end)
        .cloned()
        .collect()
}

/// The next instant the scheduler should wake up at.
///
/// Builds a min-heap over upcoming publish instants and returns the
/// earliest `scheduled_at - lead`, clamped to `now` so a post already
/// inside the window triggers an immediate pass. Returns `None` when
/// nothing is upcoming; the caller falls back to its idle re-poll
/// interval.
pub fn next_wakeup(
    posts: &[ScheduledPost],
    now: DateTime<Utc>,
    lead: Duration,
) -> Option<DateTime<Utc>> {
    let mut upcoming: BinaryHeap<Reverse<DateTime<Utc>>> = posts
        .iter()
        .filter(|post| post.status == PostStatus::Scheduled)
        .filter(|post| post.scheduled_at >= now)
        .map(|post| Reverse(post.scheduled_at))
        .collect();

    upcoming.pop().map(|Reverse(at)| (at - lead).max(now))
}
