/// Tick intervals for the typewriter cycle, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_interval_ms: u32,
    pub pause_ms: u32,
    pub delete_interval_ms: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_interval_ms: 80,
            pause_ms: 2000,
            delete_interval_ms: 40,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Paused,
    Deleting,
}

/// Looping type/pause/delete cycle over a fixed list of role strings.
///
/// The machine owns no timers - `tick` performs exactly one transition and
/// `delay` reports how long the driver should wait before the next one.
/// The displayed text is always a contiguous character prefix of the
/// current role, and the cycle never terminates: after the last role is
/// deleted it wraps back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    roles: Vec<String>,
    timing: TypewriterTiming,
    role: usize,
    shown_chars: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(roles: Vec<String>, timing: TypewriterTiming) -> Self {
        assert!(!roles.is_empty(), "typewriter needs at least one role");
        Self {
            roles,
            timing,
            role: 0,
            shown_chars: 0,
            phase: Phase::Typing,
        }
    }

    fn current_role(&self) -> &str {
        &self.roles[self.role]
    }

    /// The currently displayed prefix of the active role.
    pub fn display(&self) -> &str {
        let role = self.current_role();
        let end = role
            .char_indices()
            .nth(self.shown_chars)
            .map(|(i, _)| i)
            .unwrap_or(role.len());
        &role[..end]
    }

    /// Milliseconds the driver should wait before the next `tick`.
    pub fn delay(&self) -> u32 {
        match self.phase {
            Phase::Typing => self.timing.type_interval_ms,
            Phase::Paused => self.timing.pause_ms,
            Phase::Deleting => self.timing.delete_interval_ms,
        }
    }

    /// Advance the cycle by one step.
    pub fn tick(&mut self) {
        let role_chars = self.current_role().chars().count();
        match self.phase {
            Phase::Typing => {
                self.shown_chars = (self.shown_chars + 1).min(role_chars);
                if self.shown_chars == role_chars {
                    self.phase = Phase::Paused;
                }
            }
            Phase::Paused => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                self.shown_chars = self.shown_chars.saturating_sub(1);
                if self.shown_chars == 0 {
                    self.role = (self.role + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(roles: &[&str]) -> Typewriter {
        Typewriter::new(
            roles.iter().map(|s| s.to_string()).collect(),
            TypewriterTiming {
                type_interval_ms: 1,
                pause_ms: 2,
                delete_interval_ms: 1,
            },
        )
    }

    #[test]
    fn cycles_through_two_roles_and_wraps() {
        let mut tw = machine(&["AB", "C"]);
        let mut snapshots = Vec::new();
        for _ in 0..9 {
            tw.tick();
            snapshots.push(tw.display().to_string());
        }
        assert_eq!(
            snapshots,
            vec!["A", "AB", "AB", "A", "", "C", "C", "", "A"],
        );
    }

    #[test]
    fn delay_tracks_phase() {
        let mut tw = machine(&["AB"]);
        assert_eq!(tw.delay(), 1); // typing
        tw.tick(); // "A"
        assert_eq!(tw.delay(), 1);
        tw.tick(); // "AB" -> paused
        assert_eq!(tw.delay(), 2);
        tw.tick(); // -> deleting
        assert_eq!(tw.delay(), 1);
    }

    #[test]
    fn single_role_never_halts() {
        let mut tw = machine(&["Full Stack Developer"]);
        let full = "Full Stack Developer";
        for _ in 0..10_000 {
            tw.tick();
            assert!(full.starts_with(tw.display()));
        }
        // still cycling, not wedged at either boundary
        let mut seen = std::collections::HashSet::new();
        for _ in 0..50 {
            tw.tick();
            seen.insert(tw.display().to_string());
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn display_is_char_prefix_for_multibyte_roles() {
        let mut tw = machine(&["Ingeniería"]);
        for _ in 0..6 {
            tw.tick();
        }
        assert_eq!(tw.display(), "Ingeni");
        tw.tick();
        assert_eq!(tw.display(), "Ingenie");
    }

    // Minimal stand-in for the browser timer: a tick is armed, and firing
    // it after cancellation must leave the machine untouched.
    struct FakeTimer {
        armed: bool,
    }

    impl FakeTimer {
        fn schedule(&mut self) {
            self.armed = true;
        }

        fn cancel(&mut self) {
            self.armed = false;
        }

        fn fire(&mut self, tw: &mut Typewriter) {
            if self.armed {
                self.armed = false;
                tw.tick();
            }
        }
    }

    #[test]
    fn cancelled_tick_applies_no_mutation() {
        let mut tw = machine(&["AB", "C"]);
        let mut timer = FakeTimer { armed: false };

        timer.schedule();
        timer.fire(&mut tw);
        timer.schedule();
        timer.fire(&mut tw);
        assert_eq!(tw.display(), "AB");

        // unmount: cancel the pending tick, then the (stale) timer fires
        let frozen = tw.clone();
        timer.schedule();
        timer.cancel();
        timer.fire(&mut tw);
        timer.fire(&mut tw);
        assert_eq!(tw, frozen);
        assert_eq!(tw.display(), "AB");
    }
}
