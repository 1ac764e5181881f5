use anyhow::Context;
use glam::UVec2;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Sub-region of an image, `right` and `bottom` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    fn from_corners(min: UVec2, max: UVec2) -> Self {
        Self {
            left: min.x,
            top: min.y,
            right: max.x,
            bottom: max.y,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// Output order. Quadrant `n` in this list is saved as `<prefix>_<n + 1>`.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    pub fn index(self) -> u32 {
        self as u32 + 1
    }

    /// The midpoints are floored, so an odd column or row goes to the right or bottom half.
    pub fn rect(self, width: u32, height: u32) -> CropRect {
        let size = UVec2::new(width, height);
        let mid = size / 2;

        let (min, max) = match self {
            Quadrant::TopLeft => (UVec2::ZERO, mid),
            Quadrant::TopRight => (UVec2::new(mid.x, 0), UVec2::new(size.x, mid.y)),
            Quadrant::BottomLeft => (UVec2::new(0, mid.y), UVec2::new(mid.x, size.y)),
            Quadrant::BottomRight => (mid, size),
        };

        CropRect::from_corners(min, max)
    }
}

pub fn quadrants(width: u32, height: u32) -> [CropRect; 4] {
    Quadrant::ALL.map(|quadrant| quadrant.rect(width, height))
}

/// Always `.png`, whatever the source format was.
pub fn output_path(output_dir: &Path, prefix: &str, index: u32) -> PathBuf {
    output_dir.join(format!("{}_{}.png", prefix, index))
}

/// Crops `image_path` into its four quadrants and writes them to `output_dir` as
/// `<prefix>_1.png` through `<prefix>_4.png`.
///
/// Files saved before a failure are left in place.
pub fn split_image(
    image_path: &Path,
    prefix: &str,
    output_dir: &Path,
) -> anyhow::Result<Vec<PathBuf>> {
    let image = image::open(image_path)?;

    let (width, height) = (image.width(), image.height());

    // Anything narrower would leave a quadrant with no pixels to encode.
    if width < 2 || height < 2 {
        anyhow::bail!(
            "{}x{} image is too small to split into quadrants",
            width,
            height
        );
    }

    let mut saved = Vec::with_capacity(Quadrant::ALL.len());

    for quadrant in Quadrant::ALL {
        let rect = quadrant.rect(width, height);
        let crop = image.crop_imm(rect.left, rect.top, rect.width(), rect.height());

        let save_path = output_path(output_dir, prefix, quadrant.index());
        crop.save(&save_path)
            .with_context(|| format!("Failed to save {}", save_path.display()))?;

        println!("Saved {}", save_path.display());

        saved.push(save_path);
    }

    Ok(saved)
}

/// A collage to split, relative to the base directory, and the prefix for its quadrants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub source: PathBuf,
    pub prefix: String,
}

impl Job {
    pub fn new(source: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            prefix: prefix.into(),
        }
    }

    pub fn defaults() -> Vec<Job> {
        vec![
            Job::new("collage_tech.png", "tech"),
            Job::new("collage_web.png", "web"),
        ]
    }
}

impl FromStr for Job {
    type Err = anyhow::Error;

    // Split on the last colon so drive letters survive.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (source, prefix) = s
            .rsplit_once(':')
            .ok_or_else(|| anyhow::anyhow!("Expected <source>:<prefix>, got {:?}", s))?;

        if source.is_empty() || prefix.is_empty() {
            anyhow::bail!("Expected <source>:<prefix>, got {:?}", s);
        }

        Ok(Job::new(source, prefix))
    }
}

/// Runs every job against `base_dir`, reporting failures and carrying on.
/// Returns the number of jobs that failed.
pub fn run_jobs(jobs: &[Job], base_dir: &Path) -> usize {
    let mut failures = 0;

    for job in jobs {
        let image_path = base_dir.join(&job.source);

        if let Err(error) = split_image(&image_path, &job.prefix, base_dir) {
            eprintln!("Error processing {}: {:#}", image_path.display(), error);
            failures += 1;
        }
    }

    failures
}
