//! Property tests for the perimeter layout arithmetic.

use proptest::prelude::*;

use skirmishkit_designer::series::{Edge, KeepList, SeriesLayout, SeriesParams, SlotId};

use crate::support::Marker;

const TOL: f64 = 1e-6;

fn front_only(span: f64, component: f64, padding: f64) -> SeriesParams {
    SeriesParams {
        outer_length: span,
        outer_width: span,
        component_length: component,
        padding,
        edges: vec![Edge::Front],
        ..SeriesParams::default()
    }
}

proptest! {
    #[test]
    fn count_is_floor_of_span_over_pitch(
        span in 0.0f64..500.0,
        component in 0.5f64..50.0,
        padding in 0.0f64..10.0,
    ) {
        let layout = SeriesLayout::new(front_only(span, component, padding)).unwrap();
        let pitch = component + padding;
        let n = layout.count(Edge::Front);
        prop_assert_eq!(n, (span / pitch).floor() as usize);
        prop_assert!(n as f64 * pitch <= span + TOL);
    }
}

proptest! {
    #[test]
    fn count_is_stable_until_next_multiple(
        span in 1.0f64..500.0,
        component in 0.5f64..50.0,
        padding in 0.0f64..10.0,
        fraction in 0.0f64..0.999,
    ) {
        let pitch = component + padding;
        let n = (span / pitch).floor();
        let missing = (n + 1.0) * pitch - span;
        prop_assume!(missing > 1e-6);
        let grown = span + missing * fraction * 0.999;

        let before = SeriesLayout::new(front_only(span, component, padding)).unwrap();
        let after = SeriesLayout::new(front_only(grown, component, padding)).unwrap();
        prop_assert_eq!(before.count(Edge::Front), after.count(Edge::Front));
    }
}

proptest! {
    #[test]
    fn margins_are_equal_on_both_ends(
        span in 1.0f64..500.0,
        component in 0.5f64..50.0,
        padding in 0.0f64..10.0,
    ) {
        let layout = SeriesLayout::new(front_only(span, component, padding)).unwrap();
        let xs: Vec<f64> = layout
            .slots()
            .iter()
            .map(|slot| slot.placement.translation.x)
            .collect();
        prop_assume!(!xs.is_empty());

        let left = (xs[0] - component / 2.0) + span / 2.0;
        let right = span / 2.0 - (xs[xs.len() - 1] + component / 2.0);
        prop_assert!((left - right).abs() < TOL, "left {} right {}", left, right);
        prop_assert!(left >= -TOL);
    }
}

proptest! {
    #[test]
    fn keeping_every_id_equals_keeping_none(
        span in 0.0f64..300.0,
        component in 1.0f64..40.0,
        padding in 0.0f64..10.0,
    ) {
        let params = SeriesParams {
            outer_length: span,
            outer_width: span * 0.8,
            component_length: component,
            padding,
            x_translate: span / 2.0,
            y_translate: span * 0.4,
            ..SeriesParams::default()
        };
        let open = SeriesLayout::new(params.clone()).unwrap();
        let everything: KeepList = open.slot_ids().into_iter().collect();
        let explicit = SeriesLayout::new(SeriesParams { keep: everything, ..params }).unwrap();

        let template = Marker::at_origin();
        let a = open.scene(&template);
        let b = explicit.scene(&template);
        prop_assert_eq!(a.placements(), b.placements());
        prop_assert_eq!(a.solid(), b.solid());
    }
}

proptest! {
    #[test]
    fn keep_list_subsets_are_monotone(
        span in 30.0f64..300.0,
        mask_a in any::<u64>(),
        mask_b in any::<u64>(),
    ) {
        let params = SeriesParams {
            outer_length: span,
            outer_width: span,
            component_length: 10.0,
            padding: 2.0,
            ..SeriesParams::default()
        };
        let open = SeriesLayout::new(params.clone()).unwrap();
        let ids = open.slot_ids();

        // B is a superset of A
        let pick = |mask: u64| -> Vec<SlotId> {
            ids.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1u64 << (i % 64)) != 0)
                .map(|(_, id)| *id)
                .collect()
        };
        let subset = pick(mask_a & mask_b);
        let superset = pick(mask_b);
        // an empty keep-list keeps everything, so both must name something
        prop_assume!(!subset.is_empty());

        let kept = |keep: Vec<SlotId>| {
            SeriesLayout::new(SeriesParams {
                keep: keep.into_iter().collect(),
                ..params.clone()
            })
            .unwrap()
            .scene(&Marker::at_origin())
        };
        let small = kept(subset);
        let large = kept(superset);

        prop_assert!(small.len() <= large.len());
        for slot in small.placements() {
            prop_assert!(large.placements().contains(slot));
            // filtering never moves a slot
            prop_assert!(open.slots().contains(slot));
        }
    }
}
