//! # Integration Tests
//!
//! End-to-end tests across the workspace crates.
//!
//! Covers:
//! - Descriptor contracts exercised through real stage builders
//! - Pipeline serialization scenarios and round trips
//! - Engine invocation driven with stand-in executables, so no engine
//!   install is required

#[cfg(test)]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod descriptor_tests {
    use contracts::Bounds;
    use serde_json::json;
    use stages::{filters, readers};

    #[test]
    fn single_set_option_yields_exact_descriptor() {
        let stage = filters::decimation().step(8).build();
        assert_eq!(
            serde_json::to_value(&stage).unwrap(),
            json!({"type": "filters.decimation", "step": 8})
        );
    }

    #[test]
    fn every_builder_family_tags_its_type() {
        assert_eq!(
            readers::ept().build().stage_type(),
            Some("readers.ept")
        );
        assert_eq!(
            filters::reprojection().build().stage_type(),
            Some("filters.reprojection")
        );
        assert_eq!(
            stages::writers::copc().build().stage_type(),
            Some("writers.copc")
        );
    }

    #[test]
    fn bounds_value_feeds_reader_options() {
        let stage = readers::copc()
            .bounds(Bounds::new(635619.85, 848899.7, 638982.55, 853535.43))
            .build();
        assert_eq!(
            stage.get("bounds"),
            Some(&json!("([635619.85,638982.55],[848899.7,853535.43])"))
        );
    }

    #[test]
    fn extras_win_across_builder_and_descriptor_layers() {
        let stage = filters::crop()
            .bounds("([0,1],[0,1])")
            .outside(true)
            .option("bounds", "([2,3],[2,3])")
            .build();
        assert_eq!(stage.get("bounds"), Some(&json!("([2,3],[2,3])")));
        assert_eq!(stage.get("outside"), Some(&json!(true)));
    }
}

#[cfg(test)]
mod e2e_tests {
    use anyhow::Result;
    use contracts::{PipelineElement, Stage};
    use pipeline::{Engine, Pipeline};
    use stages::{filters, readers, writers};

    use crate::init_tracing;

    /// A ground-extraction pipeline, the shape the engine's documentation
    /// uses: reader, assign, ground classification, range, writer.
    fn sample_ground_pipeline() -> Pipeline {
        Pipeline::new()
            .with(readers::las().tag("input").option("filename", "input.las"))
            .with(filters::assign().assignment("Classification[:]=0").inputs("input"))
            .with(filters::smrf().slope(0.15).window(18.0))
            .with(filters::range().limits("Classification[2:2]"))
            .with(writers::las().filename("ground.las").compression(true))
    }

    #[test]
    fn composed_pipeline_round_trips_equivalently() -> Result<()> {
        init_tracing();
        let pipeline = sample_ground_pipeline();

        let json = pipeline.to_json_string()?;
        let parsed: Pipeline = serde_json::from_str(&json)?;

        assert_eq!(parsed, pipeline);
        assert_eq!(parsed.len(), 5);
        let types: Vec<_> = parsed
            .elements()
            .iter()
            .filter_map(PipelineElement::as_stage)
            .filter_map(Stage::stage_type)
            .collect();
        assert_eq!(
            types,
            [
                "readers.las",
                "filters.assign",
                "filters.smrf",
                "filters.range",
                "writers.las"
            ]
        );
        Ok(())
    }

    #[test]
    fn literal_array_scenario_matches_wire_format() -> Result<()> {
        let pipeline = Pipeline::new()
            .with("in.las")
            .with(Stage::of("Y"))
            .with("out.las");

        assert_eq!(
            pipeline.to_json_string()?,
            r#"["in.las",{"type":"Y"},"out.las"]"#
        );
        Ok(())
    }

    #[test]
    fn named_file_and_memory_serializer_agree_byte_for_byte() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("ground.json");

        let pipeline = sample_ground_pipeline();
        pipeline.to_json_file(&path)?;

        assert_eq!(std::fs::read(&path)?, pipeline.to_json_string()?.into_bytes());
        Ok(())
    }

    #[test]
    fn engine_run_consumes_a_persisted_pipeline_file() -> Result<()> {
        init_tracing();
        // `true` stands in for the engine executable.
        let execution = sample_ground_pipeline().execute(&Engine::new("true"))?;

        let content = std::fs::read_to_string(&execution.pipeline_file)?;
        let parsed: Pipeline = serde_json::from_str(&content)?;
        assert_eq!(parsed, sample_ground_pipeline());

        std::fs::remove_file(&execution.pipeline_file)?;
        Ok(())
    }

    #[test]
    fn engine_failure_is_not_swallowed() {
        init_tracing();
        let err = sample_ground_pipeline()
            .execute(&Engine::new("false"))
            .unwrap_err();
        assert!(err.to_string().starts_with("engine failed"));
    }

    #[test]
    fn detached_run_yields_a_waitable_child() -> Result<()> {
        let mut child = sample_ground_pipeline().execute_detached(&Engine::new("true"))?;
        assert!(child.wait()?.success());
        Ok(())
    }
}
