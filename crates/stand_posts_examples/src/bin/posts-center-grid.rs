use rand::rngs::StdRng;
use rand::SeedableRng;
use stand_posts::prelude::*;
use stand_posts_examples::{demo_stands, init_tracing, render_samples_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let stands = demo_stands()?;

    // 150 ft regular grid, posts at cell centers.
    let config = GenerateConfig::new(150.0, 150.0).with_mode(PlacementMode::Center);
    let generator = SampleGenerator::try_new(config)?;
    let mut rng = StdRng::seed_from_u64(42);
    let samples = generator.generate(stands.clone(), "Foot", &mut rng)?;

    render_samples_to_png(
        &stands,
        &samples,
        &RenderConfig::default(),
        "posts-center-grid.png",
    )?;
    Ok(())
}
