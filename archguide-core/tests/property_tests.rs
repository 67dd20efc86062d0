//! Property tests for view state invariants.
//!
//! Uses proptest to verify:
//! 1. Select always lands on the requested section with nothing expanded
//! 2. Toggle discipline — open, close, and switch between two layers
//! 3. Random action sequences never leave a layer expanded outside security

use archguide_core::{render, Action, ContentStore, SectionId, ViewController};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_section() -> impl Strategy<Value = SectionId> {
    (0..SectionId::ALL.len()).prop_map(|i| SectionId::ALL[i])
}

fn arb_layer() -> impl Strategy<Value = usize> {
    0..ContentStore::builtin().security_layers().len()
}

/// An action that is valid in whatever state it is applied to: layer toggles
/// are only produced while the security section is selected.
#[derive(Debug, Clone, Copy)]
enum Step {
    Select(SectionId),
    Toggle(usize),
}

fn arb_steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(
        prop_oneof![
            arb_section().prop_map(Step::Select),
            arb_layer().prop_map(Step::Toggle),
        ],
        0..40,
    )
}

fn run(c: &mut ViewController<'_>, step: Step) {
    match step {
        Step::Select(id) => c.apply(Action::SelectSection(id)),
        Step::Toggle(i) if c.selected_section() == SectionId::Security => {
            c.apply(Action::ToggleLayer(i))
        }
        Step::Toggle(_) => {}
    }
}

// ── 1. Select resets ─────────────────────────────────────────────────

proptest! {
    /// Whatever came before, selecting `s` yields (s, None).
    #[test]
    fn select_always_resets(prefix in arb_steps(), s in arb_section()) {
        let mut c = ViewController::new(ContentStore::builtin());
        for step in prefix {
            run(&mut c, step);
        }
        c.select_section(s);
        prop_assert_eq!(c.selected_section(), s);
        prop_assert_eq!(c.expanded_layer(), None);
    }
}

// ── 2. Exclusive accordion ───────────────────────────────────────────

proptest! {
    /// Open i, close i, open i, switch to j: never two open at once.
    #[test]
    fn toggle_discipline(
        (i, j) in (arb_layer(), arb_layer()).prop_filter("distinct", |(i, j)| i != j)
    ) {
        let mut c = ViewController::new(ContentStore::builtin());
        c.select_section(SectionId::Security);

        c.toggle_layer(i);
        prop_assert_eq!(c.expanded_layer(), Some(i));
        c.toggle_layer(i);
        prop_assert_eq!(c.expanded_layer(), None);
        c.toggle_layer(i);
        c.toggle_layer(j);
        prop_assert_eq!(c.expanded_layer(), Some(j));

        let screen = render(c.store(), c.state());
        let expanded: Vec<usize> =
            screen.layers().filter(|l| l.expanded).map(|l| l.index).collect();
        prop_assert_eq!(expanded, vec![j]);
    }
}

// ── 3. Sequence invariants ───────────────────────────────────────────

proptest! {
    /// Expansion only ever exists inside the security section, and the
    /// rendered screen agrees with the state after every step.
    #[test]
    fn expansion_scoped_to_security(steps in arb_steps()) {
        let mut c = ViewController::new(ContentStore::builtin());
        for step in steps {
            run(&mut c, step);
            if c.selected_section() != SectionId::Security {
                prop_assert_eq!(c.expanded_layer(), None);
            }
            let screen = render(c.store(), c.state());
            prop_assert_eq!(screen.highlighted_tab(), Some(c.selected_section()));
            prop_assert!(screen.layers().filter(|l| l.expanded).count() <= 1);
        }
    }
}
