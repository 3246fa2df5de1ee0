//! Scripted pointer session standing in for a live user

use flurry_core::Vec2;
use flurry_particles::Viewport;
use flurry_runtime::PointerEvent;

/// Pointer events keyed by the tick they fire before
pub struct PointerScript {
    events: Vec<(u64, PointerEvent)>,
    /// Index of the first event not yet handed out
    cursor: usize,
}

impl PointerScript {
    /// Press left of center, drag across to the right for the first third of
    /// the run, release, then fire a burst at the center halfway through.
    pub fn demo(viewport: Viewport, ticks: u64) -> Self {
        let center = viewport.center();
        let start = Vec2::new(viewport.width * 0.25, center.y);
        let end = Vec2::new(viewport.width * 0.75, center.y);
        let drag_ticks = (ticks / 3).max(1);

        let mut events = vec![(0, PointerEvent::Pressed(start))];
        for tick in 1..drag_ticks {
            let t = tick as f64 / drag_ticks as f64;
            let position = start.add_scaled(end - start, t);
            events.push((tick, PointerEvent::Moved(position)));
        }
        events.push((drag_ticks, PointerEvent::Released));
        events.push((ticks / 2, PointerEvent::SecondaryPressed(center)));
        events.sort_by_key(|(tick, _)| *tick);

        Self { events, cursor: 0 }
    }

    /// Every event scheduled at or before `tick` that has not fired yet, in
    /// order. Events at ticks the host skipped over still fire, just late.
    pub fn take_due(&mut self, tick: u64) -> &[(u64, PointerEvent)] {
        let start = self.cursor;
        let pending = &self.events[start..];
        self.cursor += pending.iter().take_while(|(at, _)| *at <= tick).count();
        &self.events[start..self.cursor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(due: &[(u64, PointerEvent)]) -> Vec<PointerEvent> {
        due.iter().map(|(_, event)| *event).collect()
    }

    #[test]
    fn demo_starts_with_press_and_includes_burst() {
        let mut script = PointerScript::demo(Viewport::default(), 300);
        assert_eq!(
            events(script.take_due(0)),
            vec![PointerEvent::Pressed(Vec2::new(200.0, 300.0))]
        );

        script.take_due(99);
        assert_eq!(events(script.take_due(100)), vec![PointerEvent::Released]);
        assert!(script.take_due(149).is_empty());
        assert_eq!(
            events(script.take_due(150)),
            vec![PointerEvent::SecondaryPressed(Vec2::new(400.0, 300.0))]
        );
        assert!(script.take_due(299).is_empty());
    }

    #[test]
    fn drag_stays_on_the_line() {
        let mut script = PointerScript::demo(Viewport::default(), 90);
        script.take_due(0);
        for tick in 1..30 {
            for event in events(script.take_due(tick)) {
                let PointerEvent::Moved(p) = event else {
                    panic!("expected a move at tick {tick}");
                };
                assert!((200.0..600.0).contains(&p.x));
                assert_eq!(p.y, 300.0);
            }
        }
    }

    #[test]
    fn skipped_ticks_still_fire_in_order() {
        let mut script = PointerScript::demo(Viewport::default(), 300);
        script.take_due(0);

        // Jump straight past the release and the burst
        let late = script.take_due(160);
        assert_eq!(late.len(), 99 + 2);
        assert!(late.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(late[late.len() - 2].1, PointerEvent::Released);
        assert_eq!(
            late[late.len() - 1].1,
            PointerEvent::SecondaryPressed(Vec2::new(400.0, 300.0))
        );

        // Nothing fires twice
        assert!(script.take_due(160).is_empty());
        assert!(script.take_due(1_000).is_empty());
    }
}
