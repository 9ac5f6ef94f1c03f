use super::{tooltip_text, MeasureSession, SegmentLabeler, SessionPhase};
use crate::core::geo::LatLng;
use crate::shared::MeasureOptions;
use approx::assert_relative_eq;

fn metric_options() -> MeasureOptions {
    MeasureOptions::default()
}

#[test]
fn test_two_segments_yield_two_midpoint_labels() {
    let mut session = MeasureSession::new(&metric_options());

    session.add_vertex(LatLng::new(0.0, 0.0));
    session.add_vertex(LatLng::new(0.0, 1.0));
    session.add_vertex(LatLng::new(0.0, 2.0));

    let labels = session.labels();
    assert_eq!(labels.len(), 2);

    // Labels liegen in der Segment-Mitte, Text ist die halbe Segment-Distanz
    assert_relative_eq!(labels[0].position.lng, 0.5, epsilon = 1e-6);
    assert_relative_eq!(labels[0].position.lat, 0.0, epsilon = 1e-6);
    assert_relative_eq!(labels[1].position.lng, 1.5, epsilon = 1e-6);
    assert_eq!(labels[0].text, "55.66 km");
    assert_eq!(labels[1].text, "55.66 km");
}

#[test]
fn test_total_distance_accumulates() {
    let mut session = MeasureSession::new(&metric_options());

    assert_eq!(session.add_vertex(LatLng::new(0.0, 0.0)), None);
    let d1 = session
        .add_vertex(LatLng::new(0.0, 1.0))
        .expect("Segment-Distanz erwartet");
    let d2 = session
        .add_vertex(LatLng::new(0.0, 2.0))
        .expect("Segment-Distanz erwartet");

    assert_relative_eq!(session.total_distance_m(), d1 + d2, epsilon = 1e-9);
    assert_relative_eq!(d1, 111_319.49, epsilon = 1.0);
}

#[test]
fn test_zero_length_segment_gets_no_label() {
    let mut session = MeasureSession::new(&metric_options());
    let p = LatLng::new(10.0, 20.0);

    session.add_vertex(p);
    session.add_vertex(p);

    assert_eq!(session.labels().len(), 0);
    assert_eq!(session.total_distance_m(), 0.0);
}

#[test]
fn test_labels_disabled_by_option() {
    let mut options = metric_options();
    options.show_segment_labels = false;
    let mut session = MeasureSession::new(&options);

    session.add_vertex(LatLng::new(0.0, 0.0));
    session.add_vertex(LatLng::new(0.0, 1.0));

    assert!(session.labels().is_empty());
    assert!(session.total_distance_m() > 0.0);
}

#[test]
fn test_running_distance_includes_cursor_segment() {
    let mut session = MeasureSession::new(&metric_options());
    session.add_vertex(LatLng::new(0.0, 0.0));
    session.add_vertex(LatLng::new(0.0, 1.0));

    let cursor = LatLng::new(0.0, 2.0);
    let running = session.running_distance_m(cursor);
    assert_relative_eq!(running, 2.0 * 111_319.49, epsilon = 2.0);
}

#[test]
fn test_finish_freezes_measurement() {
    let mut session = MeasureSession::new(&metric_options());
    session.add_vertex(LatLng::new(0.0, 0.0));
    session.add_vertex(LatLng::new(0.0, 1.0));

    session.finish_shape();
    assert_eq!(session.phase(), SessionPhase::Finished);

    // Nach Abschluss: keine neuen Vertices, Cursor ändert die Distanz nicht mehr
    assert_eq!(session.add_vertex(LatLng::new(0.0, 5.0)), None);
    assert_eq!(session.vertices().len(), 2);
    assert_relative_eq!(
        session.running_distance_m(LatLng::new(0.0, 9.0)),
        session.total_distance_m()
    );
}

#[test]
fn test_finish_requires_two_vertices() {
    let mut session = MeasureSession::new(&metric_options());
    session.add_vertex(LatLng::new(0.0, 0.0));

    session.finish_shape();
    assert!(session.is_drawing());
}

#[test]
fn test_start_shape_discards_previous_session_state() {
    let mut session = MeasureSession::new(&metric_options());
    session.add_vertex(LatLng::new(0.0, 0.0));
    session.add_vertex(LatLng::new(0.0, 1.0));
    session.finish_shape();

    session.start_shape();
    assert!(session.vertices().is_empty());
    assert!(session.labels().is_empty());
    assert_eq!(session.total_distance_m(), 0.0);
    assert!(session.is_drawing());
}

#[test]
fn test_set_options_relabels_in_new_units() {
    let mut session = MeasureSession::new(&metric_options());
    session.add_vertex(LatLng::new(0.0, 0.0));
    session.add_vertex(LatLng::new(0.0, 1.0));
    assert_eq!(session.labels()[0].text, "55.66 km");

    let mut imperial = metric_options();
    imperial.use_metric = false;
    session.set_options(&imperial);

    assert_eq!(session.labels().len(), 1);
    assert_eq!(session.labels()[0].text, "34.59 mi");
}

#[test]
fn test_labeler_skips_degenerate_segment() {
    let labeler = SegmentLabeler::new(&metric_options());
    let p = LatLng::new(1.0, 1.0);
    assert_eq!(labeler.label_for_segment(p, p), None);
}

#[test]
fn test_tooltip_states_follow_vertex_count() {
    let mut session = MeasureSession::new(&metric_options());

    let t = tooltip_text(&session, None);
    assert_eq!(t.text, "Click to start drawing line.");
    assert!(t.subtext.is_empty());

    session.add_vertex(LatLng::new(0.0, 0.0));
    let t = tooltip_text(&session, Some(LatLng::new(0.0, 1.0)));
    assert_eq!(t.text, "Click to continue drawing line.");
    assert_eq!(t.subtext, "111.32 km");

    session.add_vertex(LatLng::new(0.0, 1.0));
    let t = tooltip_text(&session, Some(LatLng::new(0.0, 1.0)));
    assert_eq!(t.text, "Click last point to finish line.");
    assert_eq!(t.subtext, "111.32 km");
}

#[test]
fn test_tooltip_after_finish_shows_only_total() {
    let mut session = MeasureSession::new(&metric_options());
    session.add_vertex(LatLng::new(0.0, 0.0));
    session.add_vertex(LatLng::new(0.0, 1.0));
    session.finish_shape();

    let t = tooltip_text(&session, Some(LatLng::new(0.0, 5.0)));
    assert!(t.text.is_empty());
    assert_eq!(t.subtext, "111.32 km");
    assert!(!t.is_empty());
}
