//! In-place 180 degree rotation of converted images.

use image::ImageFormat;
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};

/// Rotates raster images on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rotator;

impl Rotator {
    /// Rotate the image at `path` by 180 degrees and overwrite it.
    ///
    /// Decode and encode run on the blocking pool. Failures are logged here
    /// with the path and also returned.
    pub async fn rotate_in_place(&self, path: &Path) -> PipelineResult<()> {
        let path_owned = path.to_path_buf();
        let result = tokio::task::spawn_blocking(move || Self::rotate_sync(&path_owned))
            .await
            .unwrap_or_else(|e| {
                Err(PipelineError::Rotate {
                    path: path.to_path_buf(),
                    message: format!("Task join error: {}", e),
                })
            });

        if let Err(e) = &result {
            tracing::error!("Error rotating {:?}: {}", path, e);
        }
        result
    }

    /// Synchronous rotate (runs in spawn_blocking).
    ///
    /// The decoded buffer is dropped before returning on every path.
    pub fn rotate_sync(path: &Path) -> PipelineResult<()> {
        let rotate_err = |message: String| PipelineError::Rotate {
            path: path.to_path_buf(),
            message,
        };

        let format = ImageFormat::from_path(path)
            .map_err(|e| rotate_err(format!("Cannot infer output format: {}", e)))?;
        let image = image::open(path).map_err(|e| rotate_err(e.to_string()))?;
        let rotated = image.rotate180();
        drop(image);

        rotated
            .save_with_format(path, format)
            .map_err(|e| rotate_err(format!("Cannot save: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x * 40) as u8, (y * 40) as u8, (x + y) as u8, 255 - x as u8])
        })
    }

    #[test]
    fn test_rotate_moves_corners() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Hero.png");
        let original = gradient(4, 3);
        original.save(&path).unwrap();

        Rotator::rotate_sync(&path).unwrap();

        let rotated = image::open(&path).unwrap().to_rgba8();
        assert_eq!(rotated.dimensions(), (4, 3));
        assert_eq!(rotated.get_pixel(0, 0), original.get_pixel(3, 2));
        assert_eq!(rotated.get_pixel(3, 2), original.get_pixel(0, 0));
        assert_eq!(rotated.get_pixel(1, 0), original.get_pixel(2, 2));
    }

    #[tokio::test]
    async fn test_rotate_twice_is_identity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Villain.png");
        let original = gradient(5, 2);
        original.save(&path).unwrap();

        Rotator.rotate_in_place(&path).await.unwrap();
        Rotator.rotate_in_place(&path).await.unwrap();

        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back, original);
    }

    #[tokio::test]
    async fn test_rotate_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Broken.png");
        std::fs::write(&path, b"not a png").unwrap();

        let err = Rotator.rotate_in_place(&path).await.unwrap_err();
        assert!(matches!(err, PipelineError::Rotate { .. }));
        assert_eq!(std::fs::read(&path).unwrap(), b"not a png");
    }

    #[tokio::test]
    async fn test_rotate_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Rotator
            .rotate_in_place(&dir.path().join("Gone.png"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Gone.png"));
    }
}
