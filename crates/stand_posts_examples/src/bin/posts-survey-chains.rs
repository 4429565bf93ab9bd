use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use stand_posts::error::Error;
use stand_posts::prelude::*;
use stand_posts_examples::{demo_stands, init_tracing};

/// Writes posts as `id,stand,x,y,unit` records.
struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    fn new(out: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(out),
        }
    }
}

fn sink_error(err: csv::Error) -> Error {
    Error::Sink(err.to_string())
}

impl<W: Write> PostSink for CsvSink<W> {
    fn write(&mut self, samples: &SampleSet, unit: WorkingUnit) -> stand_posts::error::Result<()> {
        self.writer
            .write_record(["id", "stand", "x", "y", "unit"])
            .map_err(sink_error)?;
        let unit = unit.to_string();
        for (id, post) in samples.posts.iter().enumerate() {
            self.writer
                .write_record([
                    (id + 1).to_string(),
                    post.stand.to_string(),
                    format!("{:.3}", post.position.x),
                    format!("{:.3}", post.position.y),
                    unit.clone(),
                ])
                .map_err(sink_error)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let source = MemorySource::new(demo_stands()?, "Foot");

    // 6 x 6 chain cruise grid.
    let config = GenerateConfig::new(6.0, 6.0)
        .with_unit("chains".parse()?)
        .with_mode("center".parse()?);

    let mut sink = CsvSink::new(std::io::stdout().lock());
    let mut rng = StdRng::seed_from_u64(1);
    run_survey(&source, &config, &mut sink, &mut rng)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_are_written_as_csv_records() {
        let stand = Polygon::rectangle(Extent::from_coords(0.0, 0.0, 100.0, 100.0)).unwrap();
        let source = MemorySource::new(vec![stand], "Meter");
        let config = GenerateConfig::new(50.0, 50.0).with_unit(LinearUnit::Meters);
        let mut sink = CsvSink::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(0);
        run_survey(&source, &config, &mut sink, &mut rng).unwrap();

        let bytes = sink
            .writer
            .into_inner()
            .map_err(|e| e.error().to_string())
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "id,stand,x,y,unit");
        assert_eq!(lines[1], "1,0,25.000,25.000,Meter");
        assert_eq!(lines[4], "4,0,75.000,75.000,Meter");
    }
}
