use crate::error::{CourtsideError, CsResult};
use crate::grader::TacticImages;
use image::{imageops, DynamicImage, GenericImageView, RgbImage};
use std::path::{Path, PathBuf};
use tracing::info;

/// Places `left` and `right` next to each other, top aligned.
/// The canvas is as tall as the taller image; uncovered pixels stay black.
pub fn compose_side_by_side(left: &DynamicImage, right: &DynamicImage) -> RgbImage {
    let (w1, h1) = left.dimensions();
    let (w2, h2) = right.dimensions();

    let mut canvas = RgbImage::new(w1 + w2, h1.max(h2));
    imageops::replace(&mut canvas, &left.to_rgb8(), 0, 0);
    imageops::replace(&mut canvas, &right.to_rgb8(), i64::from(w1), 0);
    canvas
}

/// Writes the offense/defense pair for a tactic as one image file.
#[derive(Debug, Clone)]
pub struct ImageDisplay {
    pub image_dir: PathBuf,
    pub output: PathBuf,
}

impl ImageDisplay {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(image_dir: P, output: Q) -> Self {
        Self {
            image_dir: image_dir.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
        }
    }

    /// Looks up the image pair for `bucket` and writes the combined image.
    /// Every failure, a missing pair for the bucket included, is an `ImageLoad`.
    pub fn show(&self, bucket: i32) -> CsResult<PathBuf> {
        let images = TacticImages::for_bucket(bucket)
            .map_err(|e| CourtsideError::ImageLoad(e.to_string()))?;
        self.render(&images)
            .map_err(|e| CourtsideError::ImageLoad(e.to_string()))
    }

    fn render(&self, images: &TacticImages) -> image::ImageResult<PathBuf> {
        let offense_path = self.image_dir.join(images.offense_file());
        let defense_path = self.image_dir.join(images.defense_file());
        info!(
            "🖼️  Composing {} + {}",
            offense_path.display(),
            defense_path.display()
        );

        let offense = image::open(&offense_path)?;
        let defense = image::open(&defense_path)?;

        let combined = compose_side_by_side(&offense, &defense);
        combined.save(&self.output)?;
        info!("💾 Saved tactic image: {}", self.output.display());
        Ok(self.output.clone())
    }
}
