use linechart_rs::api::{ChartEngine, ChartEngineConfig};
use linechart_rs::core::{ChartRecord, Sample};
use linechart_rs::render::NullRenderer;
use proptest::prelude::*;

const EPSILON: f64 = 1e-6;

proptest! {
    #[test]
    fn single_series_markers_stay_inside_the_plot_area(
        xs in proptest::collection::vec(-10_000.0f64..10_000.0, 1..64),
        ys in proptest::collection::vec(-1_000.0f64..1_000.0, 1..64)
    ) {
        let len = xs.len().min(ys.len());
        let samples: Vec<Sample> = (0..len)
            .map(|i| Sample::single(xs[i], Some(ys[i])))
            .collect();
        let record = ChartRecord::from_samples("P", samples).expect("valid record");

        let config = ChartEngineConfig::single();
        let plot_width = config.plot_width();
        let plot_height = config.plot_height();
        let mut engine =
            ChartEngine::new(NullRenderer::default(), config).expect("engine init");
        engine.set_record(record).expect("set record");

        prop_assert_eq!(engine.markers().len(), len);
        for marker in engine.markers() {
            prop_assert!(marker.px.is_finite());
            prop_assert!(marker.py.is_finite());
            prop_assert!(marker.px >= -EPSILON && marker.px <= plot_width + EPSILON);
            prop_assert!(marker.py >= -EPSILON && marker.py <= plot_height + EPSILON);
        }

        let stroke = engine.config().line_stroke_width;
        let frame = engine.render_frame();
        let path_count = frame
            .polylines
            .iter()
            .filter(|polyline| polyline.stroke_width == stroke)
            .count();
        prop_assert_eq!(path_count, 1);
        prop_assert_eq!(frame.circles.len(), len);
    }

    #[test]
    fn multi_series_path_count_matches_declared_series(
        series_count in 1usize..5,
        sample_count in 1usize..32,
        seed in -500.0f64..500.0
    ) {
        let samples: Vec<Sample> = (0..sample_count)
            .map(|i| {
                let values = (0..series_count)
                    .map(|s| Some(seed + (i * series_count + s) as f64))
                    .collect::<Vec<_>>();
                Sample::multi(i as f64, values)
            })
            .collect();
        let record = ChartRecord::from_samples("P", samples).expect("valid record");

        let mut engine =
            ChartEngine::new(NullRenderer::default(), ChartEngineConfig::multi())
                .expect("engine init");
        engine.set_record(record).expect("set record");

        let stroke = engine.config().line_stroke_width;
        let frame = engine.render_frame();
        let path_count = frame
            .polylines
            .iter()
            .filter(|polyline| polyline.stroke_width == stroke)
            .count();
        prop_assert_eq!(path_count, series_count);
        prop_assert_eq!(frame.circles.len(), series_count * sample_count);
        prop_assert_eq!(frame.rects.len(), series_count);
    }

    #[test]
    fn rendering_never_produces_an_invalid_frame(
        xs in proptest::collection::vec(-10_000.0f64..10_000.0, 1..64),
        gaps in proptest::collection::vec(proptest::bool::ANY, 1..64)
    ) {
        let len = xs.len().min(gaps.len());
        let samples: Vec<Sample> = (0..len)
            .map(|i| {
                let value = if gaps[i] { None } else { Some(xs[i] / 2.0) };
                Sample::single(xs[i], value)
            })
            .collect();
        let record = ChartRecord::from_samples("P", samples).expect("valid record");

        let mut engine =
            ChartEngine::new(NullRenderer::default(), ChartEngineConfig::single())
                .expect("engine init");
        // NullRenderer validates every frame, so an all-gap record must still
        // produce a clean (blank) pass.
        engine.set_record(record).expect("set record");
        engine.render_frame().validate().expect("valid frame");
    }
}
