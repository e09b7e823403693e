use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{Rgb, RgbImage};
use ising_sim::Snapshot;

/// Shortest side of a written frame, in pixels.
const MIN_SIDE: usize = 256;

const DOWN: Rgb<u8> = Rgb([0, 0, 143]);
const UP: Rgb<u8> = Rgb([128, 0, 0]);

/// Writes snapshots as a numbered PNG sequence, one square block per site.
pub struct FrameWriter {
    dir: PathBuf,
    scale: u32,
    written: usize,
}

impl FrameWriter {
    pub fn create(dir: &Path, size: usize) -> anyhow::Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("cannot create frame directory {}", dir.display()))?;
        let scale = MIN_SIDE.div_ceil(size.max(1)).max(1) as u32;
        Ok(Self {
            dir: dir.to_path_buf(),
            scale,
            written: 0,
        })
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn render(&self, snapshot: &Snapshot) -> RgbImage {
        let side = snapshot.size as u32 * self.scale;
        RgbImage::from_fn(side, side, |x, y| {
            let row = (y / self.scale) as usize;
            let col = (x / self.scale) as usize;
            if snapshot.spin(row, col) > 0 {
                UP
            } else {
                DOWN
            }
        })
    }

    pub fn write(&mut self, snapshot: &Snapshot) -> anyhow::Result<PathBuf> {
        let path = self.dir.join(format!("frame_{:05}.png", self.written));
        self.render(snapshot)
            .save(&path)
            .with_context(|| format!("cannot write frame {}", path.display()))?;
        log::trace!("epoch {} -> {}", snapshot.epoch, path.display());
        self.written += 1;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot {
            epoch: 0,
            size: 2,
            spins: vec![1, -1, -1, 1],
        }
    }

    fn writer(scale: u32) -> FrameWriter {
        FrameWriter {
            dir: PathBuf::new(),
            scale,
            written: 0,
        }
    }

    #[test]
    fn test_render_layout() {
        let img = writer(3).render(&snapshot());
        assert_eq!(img.dimensions(), (6, 6));
        assert_eq!(*img.get_pixel(0, 0), UP);
        assert_eq!(*img.get_pixel(3, 0), DOWN);
        assert_eq!(*img.get_pixel(0, 3), DOWN);
        assert_eq!(*img.get_pixel(5, 5), UP);
    }

    #[test]
    fn test_write_sequence() {
        let dir = std::env::temp_dir().join(format!("ising-frames-{}", std::process::id()));
        let mut w = FrameWriter::create(&dir, 2).unwrap();
        assert_eq!(w.scale, 128);
        let first = w.write(&snapshot()).unwrap();
        let second = w.write(&snapshot()).unwrap();
        assert!(first.ends_with("frame_00000.png"));
        assert!(second.ends_with("frame_00001.png"));
        assert_eq!(w.written(), 2);
        let img = image::open(&first).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (256, 256));
        fs::remove_dir_all(&dir).unwrap();
    }
}
