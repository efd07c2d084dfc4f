use std::path::{Path, PathBuf};

use derive_more::Deref;
use log::debug;

use crate::error::{DataError, Result};
use crate::frame::SeriesFrame;
use crate::fs::list_csv_files;
use crate::ingest::read_series_csv;
use crate::resample::SamplingInterval;

/// Opaque id the presentation layer holds in place of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deref)]
pub struct FrameHandle(usize);

/// Owns every loaded and derived frame. Windows and chart widgets keep
/// `FrameHandle`s and pull rows through the accessors below; filter and
/// resample register their result as a new frame and hand back its handle.
#[derive(Debug, Default)]
pub struct FrameStore {
    frames: Vec<SeriesFrame>,
}

impl FrameStore {
    pub fn new() -> FrameStore {
        FrameStore { frames: vec![] }
    }

    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<FrameHandle> {
        let frame = read_series_csv(path.as_ref())?;
        debug!("loaded {:?} with {} rows", path.as_ref(), frame.len());
        Ok(self.register(frame))
    }

    /// Loads every csv source found in a data directory.
    pub fn load_dir<P: AsRef<Path>>(&mut self, dir: P) -> Result<Vec<(PathBuf, FrameHandle)>> {
        list_csv_files(dir.as_ref())
            .into_iter()
            .map(|p| self.load(&p).map(|h| (p, h)))
            .collect()
    }

    /// Appends a column summing every column whose name starts with
    /// `prefix`, under the frame the handle points at.
    pub fn add_derived_sum(&mut self, handle: FrameHandle, name: &str, prefix: &str) -> Result<()> {
        let frame = self.get_mut(handle)?;
        frame.add_sum_column(name, |c| c.starts_with(prefix));
        Ok(())
    }

    pub fn filter(&mut self, handle: FrameHandle, start: &str, end: &str) -> Result<FrameHandle> {
        let filtered = self.get(handle)?.filter_by_range(start, end)?;
        Ok(self.register(filtered))
    }

    /// `interval` is an interval label like "1 Hour"; an unrecognized label
    /// fails before any rows are touched.
    pub fn resample(&mut self, handle: FrameHandle, interval: &str) -> Result<FrameHandle> {
        let interval: SamplingInterval = interval.parse()?;
        let resampled = self.get(handle)?.resample(interval)?;
        Ok(self.register(resampled))
    }

    pub fn column_names(&self, handle: FrameHandle) -> Result<&[String]> {
        Ok(self.get(handle)?.column_names())
    }

    pub fn time_strings(&self, handle: FrameHandle) -> Result<&[String]> {
        Ok(self.get(handle)?.time_strings())
    }

    pub fn values(&self, handle: FrameHandle, column: &str) -> Result<&[f64]> {
        self.get(handle)?.values(column)
    }

    pub fn get(&self, handle: FrameHandle) -> Result<&SeriesFrame> {
        self.frames.get(*handle).ok_or(DataError::UnknownHandle)
    }

    fn get_mut(&mut self, handle: FrameHandle) -> Result<&mut SeriesFrame> {
        self.frames.get_mut(*handle).ok_or(DataError::UnknownHandle)
    }

    fn register(&mut self, frame: SeriesFrame) -> FrameHandle {
        self.frames.push(frame);
        FrameHandle(self.frames.len() - 1)
    }
}
