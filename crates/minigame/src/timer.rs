//! Deadline-ordered timer queue driven by the host clock.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use crate::catalogue::GameKey;
use crate::session::{TimerKind, TimerRequest, TimerTag};

#[derive(Debug, Clone, Copy)]
struct Pending {
    deadline: Duration,
    seq: u64,
    tag: TimerTag,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.seq == other.seq
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    // Reversed: BinaryHeap is a max-heap and the earliest deadline must pop first.
    // Equal deadlines fire in scheduling order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .deadline
            .cmp(&self.deadline)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    heap: BinaryHeap<Pending>,
    seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Duration, request: TimerRequest) {
        self.seq += 1;
        self.heap.push(Pending {
            deadline: now + request.delay,
            seq: self.seq,
            tag: request.tag,
        });
    }

    /// Pop the earliest timer whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, TimerTag)> {
        if self.heap.peek()?.deadline > now {
            return None;
        }
        self.heap.pop().map(|p| (p.deadline, p.tag))
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.heap.peek().map(|p| p.deadline)
    }

    /// Drop every pending timer of `kind` armed by `game`.
    pub fn cancel(&mut self, game: GameKey, kind: TimerKind) {
        self.heap
            .retain(|p| !(p.tag.game == game && p.tag.kind == kind));
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionToken;

    fn tag(game: GameKey, kind: TimerKind) -> TimerTag {
        TimerTag {
            game,
            session: SessionToken::default().next(),
            kind,
        }
    }

    fn request(game: GameKey, kind: TimerKind, ms: u64) -> TimerRequest {
        TimerRequest {
            tag: tag(game, kind),
            delay: Duration::from_millis(ms),
        }
    }

    #[test]
    fn test_pops_in_deadline_order() {
        let mut queue = TimerQueue::new();
        queue.schedule(Duration::ZERO, request(GameKey::ClickRush, TimerKind::Deadline, 300));
        queue.schedule(Duration::ZERO, request(GameKey::Memory, TimerKind::Hide, 100));
        queue.schedule(Duration::ZERO, request(GameKey::Keymaster, TimerKind::Tick, 200));

        let now = Duration::from_millis(1000);
        let order: Vec<GameKey> = std::iter::from_fn(|| queue.pop_due(now))
            .map(|(_, t)| t.game)
            .collect();
        assert_eq!(
            order,
            vec![GameKey::Memory, GameKey::Keymaster, GameKey::ClickRush]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_not_due_yet() {
        let mut queue = TimerQueue::new();
        queue.schedule(
            Duration::from_millis(50),
            request(GameKey::Reaction, TimerKind::Signal, 700),
        );
        assert_eq!(queue.next_deadline(), Some(Duration::from_millis(750)));
        assert!(queue.pop_due(Duration::from_millis(749)).is_none());
        let (deadline, _) = queue.pop_due(Duration::from_millis(750)).unwrap();
        assert_eq!(deadline, Duration::from_millis(750));
    }

    #[test]
    fn test_equal_deadlines_fifo() {
        let mut queue = TimerQueue::new();
        queue.schedule(Duration::ZERO, request(GameKey::Quiz, TimerKind::Tick, 10));
        queue.schedule(Duration::ZERO, request(GameKey::CoinFlip, TimerKind::Tick, 10));
        let now = Duration::from_millis(10);
        assert_eq!(queue.pop_due(now).unwrap().1.game, GameKey::Quiz);
        assert_eq!(queue.pop_due(now).unwrap().1.game, GameKey::CoinFlip);
    }

    #[test]
    fn test_cancel_by_kind() {
        let mut queue = TimerQueue::new();
        queue.schedule(Duration::ZERO, request(GameKey::TimingTap, TimerKind::Frame, 16));
        queue.schedule(Duration::ZERO, request(GameKey::Memory, TimerKind::Frame, 16));
        queue.cancel(GameKey::TimingTap, TimerKind::Frame);
        assert_eq!(queue.len(), 1);
        queue.cancel(GameKey::Memory, TimerKind::Hide);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next_deadline(), Some(Duration::from_millis(16)));
    }
}
