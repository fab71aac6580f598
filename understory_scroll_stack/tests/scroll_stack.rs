// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_scroll_stack` crate.
//!
//! These check that edits reach the wrapped stack unchanged and that sizing and inset
//! changes swap constraint sets on the host in the right order.

use kurbo::{Insets, Size};
use understory_scroll_stack::{
    Attribute, ConstraintHost, ConstraintSet, HorizontalAlign, Item, Relation, ScrollList,
    ScrollStack, Sizing, derive_constraints,
};
use understory_stack::{Alignment, Distribution, Gaps, Stack, StackConfig};

#[derive(Clone, Debug, PartialEq)]
enum Event {
    Activate(ConstraintSet),
    Deactivate(ConstraintSet),
}

#[derive(Debug, Default)]
struct RecordingHost {
    events: Vec<Event>,
}

impl ConstraintHost for RecordingHost {
    fn activate(&mut self, set: &ConstraintSet) {
        self.events.push(Event::Activate(set.clone()));
    }

    fn deactivate(&mut self, set: &ConstraintSet) {
        self.events.push(Event::Deactivate(set.clone()));
    }
}

fn list() -> ScrollList<char, RecordingHost> {
    ScrollList::with_config(
        StackConfig::default().with_spacing(10.0),
        RecordingHost::default(),
    )
}

#[test]
fn construction_activates_initial_constraints() {
    let list = list();
    assert_eq!(
        list.host().events,
        vec![Event::Activate(derive_constraints(Sizing::Fill, Insets::ZERO))]
    );
    assert_eq!(list.constraints(), &derive_constraints(Sizing::Fill, Insets::ZERO));
}

#[test]
fn sizing_change_swaps_constraint_sets() {
    let mut list = list();
    let initial = list.constraints().clone();
    list.host_mut().events.clear();

    let natural = Sizing::Natural(HorizontalAlign::Right);
    list.set_sizing(natural);

    let expected = derive_constraints(natural, Insets::ZERO);
    assert_eq!(
        list.host().events,
        vec![Event::Deactivate(initial), Event::Activate(expected.clone())]
    );
    assert_eq!(list.constraints(), &expected);
    assert_eq!(list.sizing(), natural);
}

#[test]
fn inset_change_swaps_constraint_sets() {
    let mut list = list();
    list.set_sizing(Sizing::Natural(HorizontalAlign::Center));
    let previous = list.constraints().clone();
    list.host_mut().events.clear();

    let insets = Insets::new(4.0, 8.0, 12.0, 16.0);
    list.set_content_insets(insets);

    let expected = derive_constraints(Sizing::Natural(HorizontalAlign::Center), insets);
    assert_eq!(
        list.host().events,
        vec![Event::Deactivate(previous), Event::Activate(expected)]
    );
    assert_eq!(list.content_insets(), insets);

    let top = list
        .constraints()
        .iter()
        .find(|c| c.item == Item::Content && c.attribute == Attribute::Top)
        .unwrap();
    assert_eq!(top.relation, Relation::Equal);
    assert_eq!(top.constant, 8.0);
}

#[test]
fn unchanged_values_do_not_rebuild() {
    let mut list = list();
    list.host_mut().events.clear();
    list.set_sizing(Sizing::Fill);
    list.set_content_insets(Insets::ZERO);
    assert!(list.host().events.is_empty());
}

#[test]
fn edits_are_forwarded_to_the_stack() {
    let mut list = list();
    list.extend(['a', 'b', 'c']);
    list.insert_after('d', 'c', Gaps::new(77.0, 88.0));
    assert_eq!(list.arranged(), &['a', 'b', 'c', 'd']);
    assert_eq!(list.spacing_after('c'), 77.0);
    assert_eq!(list.spacing_after('d'), 88.0);

    list.insert_before('d', 'a', Gaps::DEFAULT);
    assert_eq!(list.arranged(), &['d', 'a', 'b', 'c']);

    list.insert_at('z', 4, Gaps::prev(3.0));
    assert_eq!(list.spacing_after('c'), 3.0);
    assert!(list.try_insert_at('y', 9, Gaps::DEFAULT).is_err());

    list.replace('b', 'x');
    list.remove('a');
    assert_eq!(list.arranged(), &['d', 'x', 'c', 'z']);

    list.append('e', Gaps::DEFAULT);
    assert_eq!(list.len(), 5);
    list.remove_all();
    assert!(list.is_empty());

    // Edits never touch constraints.
    assert_eq!(list.host().events.len(), 1);
}

#[test]
fn stack_settings_are_proxied() {
    let mut list = list();
    assert_eq!(list.spacing(), 10.0);
    list.set_spacing(2.0);
    list.set_distribution(Distribution::EqualCentering);
    list.set_alignment(Alignment::Trailing);
    list.append('a', Gaps::DEFAULT);

    assert_eq!(list.spacing_after('a'), 2.0);
    assert_eq!(list.stack().spacing(), 2.0);
    assert_eq!(list.stack().distribution(), Distribution::EqualCentering);
    assert_eq!(list.alignment(), Alignment::Trailing);
}

#[test]
fn wraps_an_existing_stack() {
    let mut stack = Stack::new(StackConfig::default());
    stack.extend([1_u32, 2]);
    let list: ScrollStack<_> = ScrollStack::with_layout(
        stack,
        (),
        Sizing::Natural(HorizontalAlign::Left),
        Insets::uniform(2.0),
    );
    assert_eq!(list.arranged(), &[1, 2]);
    assert_eq!(list.constraints().len(), 6);
}

#[test]
fn scroll_offset_tracks_insets_and_content() {
    let mut list = list();
    list.set_viewport_size(Size::new(100.0, 200.0));
    list.set_content_size(Size::new(100.0, 250.0));
    list.scroll_to_end();
    assert_eq!(list.scroll().offset(), 50.0);

    list.set_content_insets(Insets::new(0.0, 10.0, 0.0, 20.0));
    assert_eq!(list.scroll().max_offset(), 80.0);
    list.scroll_by(1_000.0);
    assert_eq!(list.scroll().offset(), 80.0);
    assert!(list.scroll().is_at_end());

    list.set_content_size(Size::new(100.0, 100.0));
    assert_eq!(list.scroll().offset(), 0.0);
}
