//! Synthetic `measurements.txt` generator.
//!
//! Each line picks a station uniformly at random and draws a temperature
//! from a normal distribution around that station's mean, rounded to one
//! decimal place.

use super::stations::STATIONS;
use crate::utils::config::{DELIMITER, GENERATOR_STD_DEV};
use crate::utils::error::GenerateError;
use crate::utils::Progress;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A station with its temperature distribution
#[derive(Debug, Clone)]
pub struct WeatherStation {
    name: &'static str,
    distribution: Normal<f64>,
}

impl WeatherStation {
    /// Build a station whose readings follow `Normal(mean, std_dev)`
    pub fn new(name: &'static str, mean: f64, std_dev: f64) -> Result<Self, GenerateError> {
        let distribution =
            Normal::new(mean, std_dev).map_err(|e| GenerateError::InvalidStation {
                station: name.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { name, distribution })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Draw one reading, rounded to one decimal place
    pub fn measurement<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let m = self.distribution.sample(rng);
        (m * 10.0).round() / 10.0
    }
}

/// All built-in stations with the default spread
pub fn default_stations() -> Result<Vec<WeatherStation>, GenerateError> {
    STATIONS
        .iter()
        .map(|&(name, mean)| WeatherStation::new(name, mean, GENERATOR_STD_DEV))
        .collect()
}

/// Write `size` measurement lines to `writer`
///
/// **Public** - main entry point for generation
///
/// # Returns
/// Number of lines written
pub fn generate<W: Write, R: Rng + ?Sized>(
    writer: W,
    rng: &mut R,
    size: u64,
) -> Result<u64, GenerateError> {
    let stations = default_stations()?;
    generate_from(writer, rng, &stations, size)
}

/// Write `size` lines drawn from the given stations
pub fn generate_from<W: Write, R: Rng + ?Sized>(
    mut writer: W,
    rng: &mut R,
    stations: &[WeatherStation],
    size: u64,
) -> Result<u64, GenerateError> {
    let progress = Progress::new("Wrote");
    let mut written = 0;

    for _ in 0..size {
        let Some(station) = stations.choose(rng) else {
            break;
        };

        writeln!(
            writer,
            "{}{}{:.1}",
            station.name(),
            DELIMITER,
            station.measurement(rng)
        )?;
        written += 1;

        progress.tick(written);
    }

    writer.flush()?;
    debug!("Generated {} lines in {:.2}s", written, progress.elapsed_secs());

    Ok(written)
}

/// Generate a measurements file at `path`, truncating any existing file
pub fn generate_file<R: Rng + ?Sized>(
    path: impl AsRef<Path>,
    rng: &mut R,
    size: u64,
) -> Result<u64, GenerateError> {
    let path = path.as_ref();
    info!("Writing {} measurements to: {}", size, path.display());

    let file = File::create(path)?;
    generate(BufWriter::new(file), rng, size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_stations_load() {
        let stations = default_stations().unwrap();
        assert_eq!(stations.len(), STATIONS.len());
    }

    #[test]
    fn test_invalid_std_dev() {
        let err = WeatherStation::new("Nowhere", 0.0, -1.0).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidStation { .. }));
    }

    #[test]
    fn test_measurement_has_one_decimal() {
        let station = WeatherStation::new("Oslo", 5.7, 10.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let m = station.measurement(&mut rng);
            assert!(((m * 10.0).round() - m * 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_spread_is_constant() {
        let station = WeatherStation::new("Fixed", 12.3, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(station.measurement(&mut rng), 12.3);
    }

    #[test]
    fn test_generate_line_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut buf = Vec::new();

        let written = generate(&mut buf, &mut rng, 250).unwrap();

        assert_eq!(written, 250);
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 250);
    }

    #[test]
    fn test_generate_from_no_stations() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut buf = Vec::new();

        assert_eq!(generate_from(&mut buf, &mut rng, &[], 10).unwrap(), 0);
        assert!(buf.is_empty());
    }
}
