use std::collections::{BTreeMap, BTreeSet};
use std::ffi::{OsStr, OsString};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::rom::error::{Result, RomError};
use crate::rom::plane::Plane;

const TEXT_EXTENSION: &str = "txt";

// The filename template that every plane's file name is derived from: "dir/stem.ext".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasePath {
    directory: PathBuf,
    stem: OsString,
    extension: OsString,
}

impl BasePath {
    pub fn parse(path: &Path) -> Result<BasePath> {
        let invalid = |reason| RomError::InvalidBasePath { path: path.to_path_buf(), reason };

        let stem = path.file_stem().ok_or_else(|| invalid("missing file name"))?;
        let extension = path.extension().ok_or_else(|| invalid("missing file extension"))?;
        let directory = path.parent().unwrap_or(Path::new("")).to_path_buf();

        Ok(BasePath {
            directory,
            stem: stem.to_os_string(),
            extension: extension.to_os_string(),
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    // The highest plane index gets file number 0, plane 0 gets the highest number.
    pub fn plane_file_number(plane_index: u8, plane_count: u8) -> u8 {
        assert!(plane_index < plane_count, "Plane {plane_index} out of range for {plane_count} planes.");
        plane_count - 1 - plane_index
    }

    pub fn binary_path(&self, file_number: u8) -> PathBuf {
        self.numbered_path(file_number, &self.extension)
    }

    pub fn text_path(&self, file_number: u8) -> PathBuf {
        self.numbered_path(file_number, OsStr::new(TEXT_EXTENSION))
    }

    fn numbered_path(&self, file_number: u8, extension: &OsStr) -> PathBuf {
        let mut file_name = self.stem.clone();
        file_name.push(format!(".{file_number}."));
        file_name.push(extension);
        self.directory.join(file_name)
    }
}

// Where plane images end up. Kept narrow so that splitting and naming can run without a disk.
pub trait ImageTarget {
    // Create `directory` if it is missing. Only the last path component may be created.
    fn ensure_directory(&mut self, directory: &Path) -> Result<()>;
    // Write `bytes` to `path`, replacing anything already there.
    fn persist(&mut self, path: &Path, bytes: &[u8]) -> Result<()>;
}

pub struct FileTarget;

impl ImageTarget for FileTarget {
    fn ensure_directory(&mut self, directory: &Path) -> Result<()> {
        if directory.as_os_str().is_empty() || directory.is_dir() {
            return Ok(());
        }

        debug!("Creating output directory '{}'.", directory.display());
        match fs::create_dir(directory) {
            Err(err) if err.kind() != ErrorKind::AlreadyExists => Err(RomError::io(directory, err)),
            _ => Ok(()),
        }
    }

    fn persist(&mut self, path: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = File::create(path).map_err(|err| RomError::io(path, err))?;
        file.write_all(bytes).map_err(|err| RomError::io(path, err))?;
        file.flush().map_err(|err| RomError::io(path, err))
    }
}

// Collects images in memory. Used for dry runs and for checking output without touching disk.
#[derive(Default, Debug)]
pub struct MemoryTarget {
    directories: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemoryTarget {
    pub fn new() -> MemoryTarget {
        MemoryTarget::default()
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<&[u8]> {
        self.files.get(path.as_ref()).map(Vec::as_slice)
    }

    pub fn files(&self) -> &BTreeMap<PathBuf, Vec<u8>> {
        &self.files
    }

    pub fn has_directory(&self, directory: impl AsRef<Path>) -> bool {
        self.directories.contains(directory.as_ref())
    }
}

impl ImageTarget for MemoryTarget {
    fn ensure_directory(&mut self, directory: &Path) -> Result<()> {
        if !directory.as_os_str().is_empty() {
            self.directories.insert(directory.to_path_buf());
        }

        Ok(())
    }

    fn persist(&mut self, path: &Path, bytes: &[u8]) -> Result<()> {
        self.files.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}

pub struct ImageWriter<'a> {
    base_path: &'a BasePath,
    text_mirror: bool,
}

impl<'a> ImageWriter<'a> {
    pub fn new(base_path: &'a BasePath, text_mirror: bool) -> ImageWriter<'a> {
        ImageWriter { base_path, text_mirror }
    }

    /// Persist every plane (and its hex text mirror, if enabled) to `target`, returning the
    /// written paths in the order they were written. The first failure aborts the remaining
    /// writes.
    pub fn write<T: ImageTarget>(&self, planes: &[Plane], target: &mut T) -> Result<Vec<PathBuf>> {
        target.ensure_directory(self.base_path.directory())?;

        let plane_count = planes.len() as u8;
        let mut written = Vec::new();
        for plane in planes {
            let file_number = BasePath::plane_file_number(plane.index(), plane_count);

            let binary_path = self.base_path.binary_path(file_number);
            target.persist(&binary_path, plane.bytes())?;
            info!(target: "planes", "Wrote plane {} ({} bytes) to '{}'.",
                plane.index(), plane.bytes().len(), binary_path.display());
            written.push(binary_path);

            if self.text_mirror {
                let text_path = self.base_path.text_path(file_number);
                target.persist(&text_path, plane.to_hex_text().as_bytes())?;
                info!(target: "planes", "Wrote plane {} hex text to '{}'.", plane.index(), text_path.display());
                written.push(text_path);
            }
        }

        Ok(written)
    }
}
