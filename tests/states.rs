use std::collections::HashMap;

use floatpanel::{PanelPosition, PanelState, StateSet, BUILTIN_STATES};

#[test]
fn test_full_is_named_full_and_distinct_from_half() {
    assert_eq!(PanelState::FULL.name(), "full");
    assert_ne!(PanelState::FULL, PanelState::HALF);
}

#[test]
fn test_custom_peek_state() {
    let peek = PanelState::new("peek");

    for builtin in BUILTIN_STATES {
        assert_ne!(&peek, builtin);
    }

    // Independently constructed tokens with the same name are equal
    assert_eq!(peek, PanelState::new("peek"));
}

#[test]
fn test_states_as_map_keys() {
    let mut map = HashMap::new();
    map.insert(PanelState::FULL, 1);
    map.insert(PanelState::HALF, 2);

    assert_eq!(map.get(&PanelState::HALF), Some(&2));
    assert_eq!(map.get(&PanelState::new("half")), Some(&2));
    assert_eq!(map.get(&PanelState::new("peek")), None);
}

#[test]
fn test_builtins_are_pairwise_distinct() {
    assert_eq!(BUILTIN_STATES.len(), 4);
    for (i, a) in BUILTIN_STATES.iter().enumerate() {
        for b in &BUILTIN_STATES[i + 1..] {
            assert_ne!(a, b);
            assert_ne!(a.name(), b.name());
        }
    }
}

#[test]
fn test_custom_state_in_a_state_set() {
    let peek = PanelState::with_order("peek", 250);
    let set = StateSet::new(
        [PanelState::TIP, peek.clone(), PanelState::FULL],
        peek.clone(),
    );

    assert_eq!(set.ordered(), vec![PanelState::TIP, peek.clone(), PanelState::FULL]);
    assert_eq!(
        set.directional(PanelPosition::Bottom),
        vec![PanelState::FULL, peek.clone(), PanelState::TIP]
    );

    // Requesting a state the panel cannot settle in lands on the initial
    assert_eq!(set.resolve(PanelState::HALF), peek);
}

#[test]
fn test_states_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<PanelState>();
    assert_send_sync::<PanelPosition>();
    assert_send_sync::<StateSet>();
}

#[test]
fn test_shared_across_threads() {
    let set = StateSet::default();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let set = set.clone();
            std::thread::spawn(move || {
                assert_eq!(set.most(), PanelState::FULL);
                assert_eq!(set.resolve(PanelState::new("peek")), PanelState::HALF);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
