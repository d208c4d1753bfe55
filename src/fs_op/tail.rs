use std::io::{self, Read, Seek, SeekFrom};

/// Size of the window read from the end of a file on each step of a
/// backward scan.
pub const TAIL_CHUNK: usize = 4 * 1024;

/// Read up to `k` bytes ending at byte offset `end` of `reader`.
///
/// Returns fewer than `k` bytes when `end < k`. The reader's position is
/// left just after the returned window.
pub fn read_tail<R: Read + Seek>(reader: &mut R, end: u64, k: usize) -> io::Result<Vec<u8>> {
    let len = std::cmp::min(end, k as u64);
    let start = end - len;
    reader.seek(SeekFrom::Start(start))?;
    let mut buf = vec![0u8; len as usize];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

/// Count how many consecutive `byte`s sit immediately before `size`.
///
/// The scan walks backward in [`TAIL_CHUNK`] windows and stops at the first
/// byte that differs or at the start of the data, so only the tail run is
/// ever read.
pub fn count_trailing<R: Read + Seek>(reader: &mut R, size: u64, byte: u8) -> io::Result<u64> {
    count_trailing_with_chunk(reader, size, byte, TAIL_CHUNK)
}

pub(crate) fn count_trailing_with_chunk<R: Read + Seek>(
    reader: &mut R,
    size: u64,
    byte: u8,
    chunk: usize,
) -> io::Result<u64> {
    let mut end = size;
    let mut run = 0u64;
    while end > 0 {
        let window = read_tail(reader, end, chunk)?;
        let same = window.iter().rev().take_while(|b| **b == byte).count();
        run += same as u64;
        if same < window.len() {
            break;
        }
        end -= window.len() as u64;
    }
    Ok(run)
}
