//! Scenario Tests
//!
//! Drive a headless checklist and gate through the same steps the browser
//! tests perform, checking the rendered label after each one.

#[cfg(test)]
mod tests {
    use crate::seeds;
    use crate::{Checklist, ChecklistConfig, SubmitGate};

    struct Harness {
        list: Checklist,
        gate: SubmitGate,
    }

    impl Harness {
        /// Fresh store per scenario; nothing leaks between tests
        fn seeded(items: Vec<crate::Item>) -> Self {
            let mut list = Checklist::default();
            list.seed(items);
            let gate = SubmitGate::mount(list.items(), &ChecklistConfig::default());
            Self { list, gate }
        }

        fn set(&mut self, id: u32, done: bool) {
            let current = self.list.items().iter().find(|i| i.id == id).map(|i| i.done);
            if current == Some(!done) {
                self.list.toggle(id);
            }
        }

        fn submit(&mut self) {
            self.gate.submit(self.list.items());
        }

        fn label(&self) -> String {
            self.gate.label()
        }
    }

    #[test]
    fn test_scenario_a_submit_gate() {
        let mut h = Harness::seeded(seeds::default_items());
        assert_eq!(h.label(), "0/5 (0%)");

        h.set(1, true);
        h.set(2, true);
        assert_eq!(h.label(), "0/5 (0%)");

        h.submit();
        assert_eq!(h.label(), "2/5 (40%)");
    }

    #[test]
    fn test_scenario_b_repeat_submit() {
        let mut h = Harness::seeded(seeds::default_items());
        h.set(1, true);
        h.set(2, true);
        h.submit();
        assert_eq!(h.label(), "2/5 (40%)");

        h.set(1, false);
        h.set(3, true);
        h.set(4, true);
        assert_eq!(h.label(), "2/5 (40%)");

        h.submit();
        assert_eq!(h.label(), "3/5 (60%)");
    }

    #[test]
    fn test_scenario_c_all_checked() {
        let mut h = Harness::seeded(seeds::default_items());
        for id in 1..=5 {
            h.set(id, true);
        }
        h.submit();
        assert_eq!(h.label(), "5/5 (100%)");
    }

    #[test]
    fn test_scenario_d_none_checked() {
        let mut h = Harness::seeded(seeds::mixed());
        assert_eq!(h.label(), "0/5 (0%)");
        for id in 1..=5 {
            h.set(id, false);
        }
        h.submit();
        assert_eq!(h.label(), "0/5 (0%)");
    }

    #[test]
    fn test_toggles_without_submit_never_move_label() {
        let mut h = Harness::seeded(seeds::default_items());
        h.set(5, true);
        h.submit();
        let frozen = h.label();

        for id in [1, 2, 3, 1, 4, 999, 5, 2] {
            h.list.toggle(id);
            assert_eq!(h.label(), frozen);
        }
    }

    #[test]
    fn test_submit_is_idempotent() {
        let mut h = Harness::seeded(seeds::mixed());
        h.submit();
        let first = h.label();
        h.submit();
        assert_eq!(h.label(), first);
        assert_eq!(first, "2/5 (40%)");
    }

    #[test]
    fn test_submit_matches_current_aggregates() {
        let mut h = Harness::seeded(seeds::long_labels());
        h.list.toggle(3);
        h.submit();
        let agg = h.list.aggregates(Default::default());
        let snap = h.gate.snapshot();
        assert_eq!((snap.completed, snap.percent, snap.total), (agg.completed, agg.percent, agg.total));
        assert_eq!(h.label(), "2/3 (67%)");
    }

    #[test]
    fn test_empty_checklist_label() {
        let mut h = Harness::seeded(Vec::new());
        assert_eq!(h.label(), "0/0 (0%)");
        h.list.toggle(1);
        h.submit();
        assert_eq!(h.label(), "0/0 (0%)");
    }
}
