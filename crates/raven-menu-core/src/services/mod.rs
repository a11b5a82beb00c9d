mod geometry;
mod programs;
mod render;
mod spawn;

pub use geometry::{Area, Geometry, GridGeometry, Point};
pub use programs::{PathLookup, ProgramLookup};
pub use render::{Renderer, Stroke};
pub use spawn::{ShellSpawner, Spawner};

#[cfg(test)]
pub use spawn::RecordingSpawner;
