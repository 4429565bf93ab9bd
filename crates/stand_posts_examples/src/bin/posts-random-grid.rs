use rand::rngs::StdRng;
use rand::SeedableRng;
use stand_posts::prelude::*;
use stand_posts_examples::{demo_stands, init_tracing, render_samples_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let stands = demo_stands()?;

    // 50 m cells, one random post per cell and stand. The stands are stored in feet.
    let config = GenerateConfig::new(50.0, 50.0)
        .with_unit(LinearUnit::Meters)
        .with_mode(PlacementMode::Random);
    let generator = SampleGenerator::try_new(config)?;
    let mut rng = StdRng::seed_from_u64(7);

    let mut skipped = 0usize;
    let mut sink = FnSink::new(|event| {
        if let SurveyEvent::CellSkipped { .. } = event {
            skipped += 1;
        }
    });
    let samples = generator.generate_with_events(stands.clone(), "Foot", &mut rng, &mut sink)?;
    tracing::info!("{skipped} cells had no stand overlap.");

    render_samples_to_png(
        &stands,
        &samples,
        &RenderConfig::default().with_post_color([30, 80, 200]),
        "posts-random-grid.png",
    )?;
    Ok(())
}
