//! Log-structured durable repository.
//!
//! Every write is appended to `planets.log` in the data directory and the
//! whole table is rebuilt in memory on open.
//!
//! ## Record Format
//!
//! ```text
//! Insert:   [1u8][id: u64 LE][len: u32 LE][bincode(Planet): len bytes]
//! Delete:   [2u8][id: u64 LE]
//! Sequence: [3u8][next_id: u64 LE]
//! ```
//!
//! A record cut short by a crash is dropped and the file truncated to the
//! last complete record. A write that fails at runtime is rolled back the
//! same way before the error is returned, so the table and the log never
//! disagree. [`LogRepository::compact`] rewrites the log with a sequence
//! record followed by one insert per live row.

use parking_lot::RwLock;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use super::table::Table;
use super::{PlanetRepository, StorageError, StorageResult};
use crate::filter::Predicate;
use crate::planet::{NewPlanet, Planet};

const LOG_FILE: &str = "planets.log";
const COMPACT_FILE: &str = "planets.log.compact";

const MARKER_INSERT: u8 = 1;
const MARKER_DELETE: u8 = 2;
const MARKER_SEQUENCE: u8 = 3;

/// Largest encoded row accepted on write and on replay.
pub(super) const MAX_ROW_LEN: u32 = 1 << 20;

/// Append target for log records.
pub(super) trait LogFile {
    /// Writes all of `bytes` at the end of the log.
    fn append(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Cuts the log back to `len` bytes.
    fn truncate(&mut self, len: u64) -> io::Result<()>;
}

impl LogFile for File {
    fn append(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.write_all(bytes)
    }

    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

/// Table plus the log it is rebuilt from.
pub(super) struct LogInner<F = File> {
    pub(super) table: Table,
    pub(super) wal: F,
    /// Length of the log up to the last complete record.
    end: u64,
    /// Set when a failed write could not be rolled back.
    broken: bool,
}

impl<F: LogFile> LogInner<F> {
    pub(super) fn new(table: Table, wal: F, end: u64) -> Self {
        Self {
            table,
            wal,
            end,
            broken: false,
        }
    }

    pub(super) fn insert(&mut self, planet: NewPlanet) -> StorageResult<Planet> {
        let id = self.table.reserve(&planet)?;
        let planet = planet.with_id(id);

        self.append(&encode_insert(&planet)?)?;

        self.table.put(planet.clone());
        Ok(planet)
    }

    pub(super) fn delete(&mut self, id: u64) -> StorageResult<()> {
        if !self.table.contains(id) {
            return Err(StorageError::RowNotFound(id));
        }

        self.append(&encode_delete(id))?;

        self.table.remove(id).map(|_| ())
    }

    /// Appends one record, or leaves the log exactly as it was.
    fn append(&mut self, record: &[u8]) -> StorageResult<()> {
        if self.broken {
            return Err(StorageError::Corrupted(
                "log tail unknown after a failed write; compact or reopen".to_string(),
            ));
        }

        if let Err(e) = self.wal.append(record) {
            if let Err(rollback) = self.wal.truncate(self.end) {
                self.broken = true;
                tracing::error!(
                    error = %rollback,
                    end = self.end,
                    "Failed to roll back partial log record"
                );
            }
            return Err(e.into());
        }

        self.end += record.len() as u64;
        Ok(())
    }
}

/// Durable repository backed by an append-only log.
pub struct LogRepository {
    path: PathBuf,
    inner: RwLock<LogInner>,
}

impl LogRepository {
    /// Opens the repository in `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the log cannot
    /// be read, or a complete record fails to decode.
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        fs::create_dir_all(&path)?;
        let log_path = path.join(LOG_FILE);

        let file_len = fs::metadata(&log_path).map(|m| m.len()).unwrap_or(0);
        let (table, valid_len) = if log_path.exists() {
            replay(&log_path, file_len)?
        } else {
            (Table::default(), 0)
        };

        if valid_len < file_len {
            tracing::warn!(
                path = %log_path.display(),
                dropped_bytes = file_len - valid_len,
                "Truncating incomplete trailing record"
            );
            OpenOptions::new()
                .write(true)
                .open(&log_path)?
                .set_len(valid_len)?;
        }

        let wal = open_wal(&log_path)?;
        tracing::info!(
            path = %path.display(),
            rows = table.len(),
            next_id = table.next_id(),
            "Opened planet log"
        );

        Ok(Self {
            path,
            inner: RwLock::new(LogInner::new(table, wal, valid_len)),
        })
    }

    /// Directory holding the log.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the log so it only holds live rows.
    ///
    /// Also clears the state left by a write that could not be rolled back,
    /// since the new log is written from the table alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the new log cannot be written or swapped in. The
    /// previous log stays in place on failure.
    pub fn compact(&self) -> StorageResult<()> {
        let mut inner = self.inner.write();

        let log_path = self.path.join(LOG_FILE);
        let compact_path = self.path.join(COMPACT_FILE);

        let mut writer = BufWriter::new(File::create(&compact_path)?);
        writer.write_all(&encode_sequence(inner.table.next_id()))?;
        for planet in inner.table.rows() {
            writer.write_all(&encode_insert(planet)?)?;
        }
        writer.flush()?;
        writer.get_ref().sync_all()?;
        drop(writer);

        fs::rename(&compact_path, &log_path)?;
        let end = fs::metadata(&log_path)?.len();
        let wal = open_wal(&log_path)?;
        let table = std::mem::take(&mut inner.table);
        *inner = LogInner::new(table, wal, end);

        tracing::info!(rows = inner.table.len(), "Compacted planet log");
        Ok(())
    }

    /// Syncs the log to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the sync fails.
    pub fn flush(&self) -> StorageResult<()> {
        self.inner.read().wal.sync_data()?;
        Ok(())
    }
}

impl PlanetRepository for LogRepository {
    fn save(&self, planet: NewPlanet) -> StorageResult<Planet> {
        self.inner.write().insert(planet)
    }

    fn find_by_id(&self, id: u64) -> StorageResult<Option<Planet>> {
        Ok(self.inner.read().table.get(id).cloned())
    }

    fn find_by_name(&self, name: &str) -> StorageResult<Option<Planet>> {
        Ok(self.inner.read().table.get_by_name(name).cloned())
    }

    fn find_all(&self, predicate: &Predicate) -> StorageResult<Vec<Planet>> {
        Ok(self.inner.read().table.scan(predicate))
    }

    fn delete_by_id(&self, id: u64) -> StorageResult<()> {
        self.inner.write().delete(id)
    }

    fn count(&self) -> StorageResult<usize> {
        Ok(self.inner.read().table.len())
    }
}

fn open_wal(log_path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(log_path)
}

pub(super) fn encode_insert(planet: &Planet) -> StorageResult<Vec<u8>> {
    let bytes = bincode::serialize(planet).map_err(|e| StorageError::Encoding(e.to_string()))?;
    let len = u32::try_from(bytes.len())
        .ok()
        .filter(|len| *len <= MAX_ROW_LEN)
        .ok_or_else(|| {
            StorageError::Encoding(format!("row of {} bytes is too large", bytes.len()))
        })?;

    let mut record = Vec::with_capacity(1 + 8 + 4 + bytes.len());
    record.push(MARKER_INSERT);
    record.extend_from_slice(&planet.id.to_le_bytes());
    record.extend_from_slice(&len.to_le_bytes());
    record.extend_from_slice(&bytes);
    Ok(record)
}

fn encode_delete(id: u64) -> Vec<u8> {
    let mut record = Vec::with_capacity(1 + 8);
    record.push(MARKER_DELETE);
    record.extend_from_slice(&id.to_le_bytes());
    record
}

fn encode_sequence(next_id: u64) -> Vec<u8> {
    let mut record = Vec::with_capacity(1 + 8);
    record.push(MARKER_SEQUENCE);
    record.extend_from_slice(&next_id.to_le_bytes());
    record
}

/// Replays the log into a fresh table.
///
/// Returns the table and the byte length of the complete records read.
fn replay(log_path: &Path, file_len: u64) -> StorageResult<(Table, u64)> {
    let mut reader = BufReader::new(File::open(log_path)?);
    let mut table = Table::default();
    let mut pos = 0u64;

    loop {
        let mut marker = [0u8; 1];
        match reader.read_exact(&mut marker) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }

        let record_len = match marker[0] {
            MARKER_INSERT => {
                let Some(id) = read_u64(&mut reader)? else {
                    break;
                };
                let Some(len) = read_u32(&mut reader)? else {
                    break;
                };
                if len > MAX_ROW_LEN {
                    return Err(StorageError::Corrupted(format!(
                        "row at offset {pos} claims {len} bytes"
                    )));
                }
                // A body running past the end of the file is a torn write.
                if pos + 1 + 8 + 4 + u64::from(len) > file_len {
                    break;
                }
                let mut bytes = vec![0u8; len as usize];
                if !read_full(&mut reader, &mut bytes)? {
                    break;
                }
                let planet: Planet = bincode::deserialize(&bytes).map_err(|e| {
                    StorageError::Corrupted(format!("row at offset {pos}: {e}"))
                })?;
                if planet.id != id {
                    return Err(StorageError::Corrupted(format!(
                        "row at offset {pos}: header id {id} does not match row id {}",
                        planet.id
                    )));
                }
                table.put(planet);
                1 + 8 + 4 + u64::from(len)
            }
            MARKER_DELETE => {
                let Some(id) = read_u64(&mut reader)? else {
                    break;
                };
                // Deletes of rows already gone are harmless.
                let _ = table.remove(id);
                1 + 8
            }
            MARKER_SEQUENCE => {
                let Some(next_id) = read_u64(&mut reader)? else {
                    break;
                };
                table.advance_sequence(next_id);
                1 + 8
            }
            other => {
                return Err(StorageError::Corrupted(format!(
                    "unknown marker {other} at offset {pos}"
                )))
            }
        };

        pos += record_len;
    }

    Ok((table, pos))
}

/// Fills `buf`, returning `false` if the log ends first.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<bool> {
    match reader.read_exact(buf) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e),
    }
}

fn read_u64<R: Read>(reader: &mut R) -> io::Result<Option<u64>> {
    let mut bytes = [0u8; 8];
    Ok(read_full(reader, &mut bytes)?.then(|| u64::from_le_bytes(bytes)))
}

fn read_u32<R: Read>(reader: &mut R) -> io::Result<Option<u32>> {
    let mut bytes = [0u8; 4];
    Ok(read_full(reader, &mut bytes)?.then(|| u32::from_le_bytes(bytes)))
}
