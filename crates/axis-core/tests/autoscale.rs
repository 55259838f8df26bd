// File: crates/axis-core/tests/autoscale.rs
// Purpose: Validate display-range derivation: padding, autoscale toggle, manual range.

use axis_core::{AxisConfig, AxisModel, Range, SeriesCollection, SeriesModel};

fn model_with(collection: &SeriesCollection) -> AxisModel {
    let model = AxisModel::new(AxisConfig::new(Range::new(0.0, 100.0)));
    model.observe(collection);
    model
}

#[test]
fn autoscale_pads_the_extent() {
    let collection = SeriesCollection::new();
    collection.add(SeriesModel::with_stats("s", Range::new(0.0, 10.0)));
    let model = model_with(&collection);

    assert_eq!(model.stats(), Some(Range::new(0.0, 10.0)));
    // width 10 * 0.1 = 1 of padding per side
    assert_eq!(model.display_range(), Some(Range::new(-1.0, 11.0)));
}

#[test]
fn single_point_extent_gets_fallback_padding() {
    let collection = SeriesCollection::new();
    collection.add(SeriesModel::with_stats("s", Range::new(5.0, 5.0)));
    let model = model_with(&collection);

    // zero-width extent still yields a renderable range
    assert_eq!(model.display_range(), Some(Range::new(4.0, 6.0)));
}

#[test]
fn padding_change_recomputes() {
    let collection = SeriesCollection::new();
    collection.add(SeriesModel::with_stats("s", Range::new(0.0, 10.0)));
    let model = model_with(&collection);

    model.set_autoscale_padding(0.5);
    assert_eq!(model.display_range(), Some(Range::new(-5.0, 15.0)));
}

#[test]
fn negative_padding_inverts_direction() {
    let collection = SeriesCollection::new();
    collection.add(SeriesModel::with_stats("s", Range::new(0.0, 10.0)));
    let model = model_with(&collection);

    model.set_autoscale_padding(-0.1);
    assert_eq!(model.display_range(), Some(Range::new(1.0, 9.0)));
}

#[test]
fn autoscale_off_snaps_to_manual_range() {
    let collection = SeriesCollection::new();
    collection.add(SeriesModel::with_stats("s", Range::new(0.0, 10.0)));
    let model = model_with(&collection);

    model.set_autoscale(false);
    assert_eq!(model.display_range(), Some(Range::new(0.0, 100.0)));

    // back on: derived from the current extent again
    model.set_autoscale(true);
    assert_eq!(model.display_range(), Some(Range::new(-1.0, 11.0)));
}

#[test]
fn autoscale_on_with_no_data_clears_display_range() {
    let collection = SeriesCollection::new();
    let model = model_with(&collection);

    model.set_autoscale(false);
    assert_eq!(model.display_range(), Some(Range::new(0.0, 100.0)));

    model.set_autoscale(true);
    assert_eq!(model.display_range(), None);
}

#[test]
fn manual_range_applies_only_while_autoscale_off() {
    let collection = SeriesCollection::new();
    let series = SeriesModel::with_stats("s", Range::new(0.0, 10.0));
    collection.add(series.clone());
    let model = model_with(&collection);

    model.set_manual_range(Range::new(-50.0, 50.0));
    // autoscale still on: manual change is stored, not displayed
    assert_eq!(model.display_range(), Some(Range::new(-1.0, 11.0)));
    assert_eq!(model.manual_range(), Range::new(-50.0, 50.0));

    model.set_autoscale(false);
    assert_eq!(model.display_range(), Some(Range::new(-50.0, 50.0)));

    // extent changes are ignored while autoscale is off
    series.set_stats(Some(Range::new(-1000.0, 1000.0)));
    assert_eq!(model.stats(), Some(Range::new(-1000.0, 1000.0)));
    assert_eq!(model.display_range(), Some(Range::new(-50.0, 50.0)));

    // manual changes land immediately
    model.set_manual_range(Range::new(0.0, 1.0));
    assert_eq!(model.display_range(), Some(Range::new(0.0, 1.0)));
}

#[test]
fn constructed_with_autoscale_off_starts_at_manual_range() {
    let mut config = AxisConfig::new(Range::new(2.0, 4.0));
    config.autoscale = false;
    let model = AxisModel::new(config);
    assert_eq!(model.display_range(), Some(Range::new(2.0, 4.0)));
}
